/// Record sources: where product records come from.
pub mod dynamodb;
pub mod errors;

use async_trait::async_trait;

use crate::product::Product;

pub use dynamodb::DynamoDbSource;
pub use errors::SourceError;

/// Fetches every product of one category, pagination already exhausted.
///
/// Implementations substitute a sentinel for absent `domain` / `name`
/// fields so that every returned record carries both.
#[async_trait]
pub trait RecordSource {
    /// Fetch all products stored under `category`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the store cannot be queried.
    async fn fetch_products(&self, category: &str) -> Result<Vec<Product>, SourceError>;
}
