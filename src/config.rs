/// Resolved run configuration.
use crate::cli::OutputFormat;
use crate::cli::args::CategoriesArgs;
use crate::product::{DiscriminatorFilter, FilterPipeline};

/// Everything one `categories` run needs, after CLI and env resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    pub region: String,
    /// Custom DynamoDB endpoint (e.g. DynamoDB Local).
    pub endpoint_url: Option<String>,
    /// Category words joined with single spaces.
    pub category: String,
    pub output_format: OutputFormat,
    /// Collapse `#<digits>` name variants.
    pub filter_discriminators: bool,
    pub no_header: bool,
}

impl AppConfig {
    /// Build from parsed `categories` arguments. `--out` overrides `--format`.
    #[must_use]
    pub fn from_args(args: &CategoriesArgs) -> Self {
        Self {
            table_name: args.table.clone(),
            region: args.region.clone(),
            endpoint_url: args.endpoint_url.clone(),
            category: args.category.join(" "),
            output_format: args.out.unwrap_or(args.format),
            filter_discriminators: args.no_discriminators,
            no_header: args.no_header,
        }
    }

    /// The filter chain this configuration asks for.
    #[must_use]
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if self.filter_discriminators {
            pipeline.add(DiscriminatorFilter::new());
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::cli::args::Command;

    fn config_for(argv: &[&str]) -> AppConfig {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Categories(args) => AppConfig::from_args(&args),
        }
    }

    #[test]
    fn test_category_words_joined() {
        let config = config_for(&["swiftshark", "categories", "garden", "tools"]);
        assert_eq!(config.category, "garden tools");
        assert_eq!(config.table_name, "dreamydungbeetle");
        assert_eq!(config.output_format, OutputFormat::CategoryDomainProduct);
        assert!(!config.filter_discriminators);
    }

    #[test]
    fn test_out_overrides_format() {
        let config = config_for(&[
            "swiftshark",
            "cat",
            "tools",
            "--format",
            "pretty",
            "--out",
            "json",
        ]);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_pipeline_follows_switch() {
        let off = config_for(&["swiftshark", "cat", "tools"]);
        assert!(off.pipeline().is_empty());

        let on = config_for(&["swiftshark", "cat", "tools", "--no-discriminators"]);
        assert_eq!(on.pipeline().names(), vec!["discriminator"]);
    }
}
