/// Serializable envelope for errors reported on stderr in JSON mode.
use serde::{Deserialize, Serialize};

use crate::product::ProductError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `ProductError`.
    #[must_use]
    pub fn from_product_error(err: &ProductError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let err = ProductError::MissingField {
            field: "domain",
            index: 0,
        };
        let json = serde_json::to_value(ErrorOutput::from_product_error(&err)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "missing_field");
        assert_eq!(
            json["error"]["message"],
            "Product record #0 has no 'domain' field"
        );
    }
}
