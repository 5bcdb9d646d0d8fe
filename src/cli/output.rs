/// Output formatting: line templates, pretty blocks, JSON, table.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use super::args::OutputFormat;
use crate::product::{CATEGORY, DOMAIN, NAME, Product, ProductError, TIMESTAMP, URL};
use crate::types::ErrorOutput;

/// Renders products for one category.
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputFormatter {
    #[must_use]
    pub fn new(format: OutputFormat, no_header: bool) -> Self {
        Self { format, no_header }
    }

    /// Render every product into output lines.
    ///
    /// Nothing is printed here, so a failure leaves stdout untouched.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::Serialize` if JSON encoding fails.
    pub fn format_products(
        &self,
        category: &str,
        products: &[Product],
    ) -> Result<Vec<String>, ProductError> {
        let lines = match self.format {
            OutputFormat::CategoryDomainProduct => products
                .iter()
                .map(|p| format!("{category}#{}#{}", field(p, DOMAIN), field(p, NAME)))
                .collect(),
            OutputFormat::DomainProduct => products
                .iter()
                .map(|p| format!("{}#{}", field(p, DOMAIN), field(p, NAME)))
                .collect(),
            OutputFormat::Pretty => pretty_lines(products),
            OutputFormat::Json => vec![serde_json::to_string_pretty(&with_category(
                category, products,
            ))?],
            OutputFormat::Ndjson => with_category(category, products)
                .iter()
                .map(serde_json::to_string)
                .collect::<Result<Vec<_>, serde_json::Error>>()?,
            OutputFormat::Table => self.table_lines(products),
        };
        Ok(lines)
    }

    fn table_lines(&self, products: &[Product]) -> Vec<String> {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        if !self.no_header {
            table.set_header(["DOMAIN", "PRODUCT", "TIMESTAMP", "URL"]);
        }
        for p in products {
            table.add_row([
                field(p, DOMAIN),
                field(p, NAME),
                field(p, TIMESTAMP),
                field(p, URL),
            ]);
        }
        table.to_string().lines().map(str::to_owned).collect()
    }
}

fn field<'a>(product: &'a Product, name: &str) -> &'a str {
    product.get(name).unwrap_or_default()
}

fn pretty_lines(products: &[Product]) -> Vec<String> {
    let mut lines = Vec::with_capacity(products.len() * 4);
    for p in products {
        lines.push(format!("Domain: {}", field(p, DOMAIN)));
        lines.push(format!("Product: {}", field(p, NAME)));
        let url = field(p, URL);
        if !url.is_empty() {
            lines.push(format!("URL: {url}"));
        }
        lines.push(String::new());
    }
    lines
}

/// Copies of `products` tagged with `category`.
fn with_category(category: &str, products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .map(|p| p.clone().with(CATEGORY, category))
        .collect()
}

/// Print rendered lines to stdout.
pub fn write_lines(lines: &[String]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        if writeln!(out, "{line}").is_err() {
            // Reader went away (e.g. `| head`); nothing left to do.
            return;
        }
    }
}

// --- Error output ---

/// Write a structured error envelope to stderr.
pub fn write_error(err: &ErrorOutput) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match serde_json::to_string_pretty(err) {
        Ok(s) => {
            let _ = writeln!(out, "{s}");
        }
        Err(e) => {
            let _ = writeln!(out, "JSON serialization error: {e}");
        }
    }
}
