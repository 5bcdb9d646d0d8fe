/// Errors from the product domain layer.
use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur while fetching, filtering, or rendering products.
#[derive(Debug, Error)]
pub enum ProductError {
    /// A record reached a filter without a field the filter requires.
    ///
    /// The record source substitutes a sentinel for absent fields, so this
    /// points at a broken collaborator rather than bad data.
    #[error("Product record #{index} has no '{field}' field")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
        /// Position of the record in the filter's input.
        index: usize,
    },

    /// Rendering records as JSON failed.
    #[error("Failed to serialize products: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The async runtime could not be started.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// An underlying record source error.
    #[error("Record source error: {0}")]
    Source(#[from] SourceError),
}

/// Exit code mapping for `ProductError` variants.
impl ProductError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Source(_) => 2,
            Self::MissingField { .. } => 3,
            Self::Serialize(_) | Self::Runtime(_) => 1,
        }
    }

    /// Machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::Serialize(_) => "serialize_error",
            Self::Runtime(_) => "runtime_error",
            Self::Source(SourceError::Query { .. }) => "query_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = ProductError::MissingField {
            field: "name",
            index: 4,
        };
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(missing.code(), "missing_field");
        assert_eq!(missing.to_string(), "Product record #4 has no 'name' field");

        let source = ProductError::from(SourceError::Query {
            table: "t".to_owned(),
            message: "boom".to_owned(),
        });
        assert_eq!(source.exit_code(), 2);
        assert_eq!(source.code(), "query_failed");
    }
}
