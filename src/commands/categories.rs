/// `categories` command: fetch, filter, and print the products of one category.
use tracing::{debug, info, warn};

use crate::cli::{OutputFormatter, write_lines};
use crate::config::AppConfig;
use crate::product::ProductError;
use crate::source::{DynamoDbSource, RecordSource};

/// Run `swiftshark categories`.
///
/// # Errors
///
/// Returns `ProductError` on query failure, malformed records, or JSON
/// encoding failure. Nothing is printed in that case.
pub async fn run(config: &AppConfig) -> Result<(), ProductError> {
    let source = DynamoDbSource::connect(config).await;
    let lines = render(&source, config).await?;
    write_lines(&lines);
    Ok(())
}

/// Fetch, filter, and render; returns the lines to print.
///
/// # Errors
///
/// See [`run`].
pub async fn render<S>(source: &S, config: &AppConfig) -> Result<Vec<String>, ProductError>
where
    S: RecordSource + ?Sized,
{
    let products = source.fetch_products(&config.category).await?;

    if products.is_empty() {
        warn!(category = %config.category, "No products found for category");
        return Ok(Vec::new());
    }
    info!(
        count = products.len(),
        category = %config.category,
        "Found products"
    );

    let pipeline = config.pipeline();
    let products = if pipeline.is_empty() {
        products
    } else {
        let before = products.len();
        let filtered = pipeline.apply(products)?;
        debug!(
            filters = ?pipeline.names(),
            before,
            after = filtered.len(),
            "filters applied"
        );
        filtered
    };

    OutputFormatter::new(config.output_format, config.no_header)
        .format_products(&config.category, &products)
}
