/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// swiftshark — fetch product data from DynamoDB.
#[derive(Debug, Parser)]
#[command(
    name = "swiftshark",
    about = "Fetch product data from DynamoDB",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity: -v warnings, -vv info, -vvv debug.
    /// RUST_LOG directives refine the resulting default.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// `category#domain#name`, one per line.
    #[default]
    #[value(name = "category#domain#product")]
    CategoryDomainProduct,
    /// `domain#name`, one per line.
    #[value(name = "domain#product")]
    DomainProduct,
    /// Labelled blocks separated by blank lines.
    Pretty,
    /// JSON array (pretty-printed), each record tagged with its category.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
}

impl OutputFormat {
    /// Whether errors should be reported as a JSON envelope too.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Ndjson)
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch products for a category.
    #[command(visible_alias = "cat")]
    Categories(CategoriesArgs),
}

impl Command {
    /// The output format this invocation selected.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Self::Categories(args) => args.out.unwrap_or(args.format),
        }
    }
}

/// Arguments for `swiftshark categories`.
#[derive(Debug, Parser)]
pub struct CategoriesArgs {
    /// Product category to fetch. Several words are joined with spaces.
    #[arg(required = true, num_args = 1.., value_name = "CATEGORY")]
    pub category: Vec<String>,

    /// DynamoDB table name.
    #[arg(long, env = "SWIFTSHARK_TABLE", default_value = "dreamydungbeetle")]
    pub table: String,

    /// AWS region.
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local.
    #[arg(long, env = "SWIFTSHARK_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "category#domain#product")]
    pub format: OutputFormat,

    /// Output format (alias for --format; wins when both are given).
    #[arg(long, value_name = "FORMAT")]
    pub out: Option<OutputFormat>,

    /// Collapse products whose names differ only by a discriminator suffix (#1, #2, ...).
    #[arg(long)]
    pub no_discriminators: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long)]
    pub no_header: bool,
}
