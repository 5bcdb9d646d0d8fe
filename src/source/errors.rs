/// Errors from the record source layer.
use thiserror::Error;

/// Typed errors from the store.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The query (or one of its pages) failed.
    #[error("Query against table '{table}' failed: {message}")]
    Query {
        /// Table that was queried.
        table: String,
        /// Full SDK error chain, rendered.
        message: String,
    },
}
