/// DynamoDB-backed record source.
///
/// Products live in a table partitioned by `category`; one paginated
/// equality query returns every product of a category.
use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use super::{RecordSource, SourceError};
use crate::config::AppConfig;
use crate::product::{DOMAIN, NAME, Product, TIMESTAMP, URL};

/// Substituted for a missing `domain` or `name` attribute.
pub const UNKNOWN: &str = "unknown";

/// Queries one DynamoDB table.
pub struct DynamoDbSource {
    client: Client,
    table_name: String,
}

impl DynamoDbSource {
    #[must_use]
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build a client from the ambient AWS configuration (credentials chain,
    /// profile), pinned to the configured region and optional endpoint.
    pub async fn connect(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        debug!(
            region = %config.region,
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "DynamoDB client configured"
        );
        Self::new(Client::new(&sdk_config), config.table_name.as_str())
    }
}

#[async_trait]
impl RecordSource for DynamoDbSource {
    async fn fetch_products(&self, category: &str) -> Result<Vec<Product>, SourceError> {
        debug!(table = %self.table_name, category, "querying DynamoDB");

        let mut items = self
            .client
            .query()
            .table_name(self.table_name.as_str())
            .key_condition_expression("category = :cat")
            .expression_attribute_values(":cat", AttributeValue::S(category.to_owned()))
            .projection_expression("category, #dom, #nm, #ts, #url")
            .expression_attribute_names("#dom", DOMAIN)
            .expression_attribute_names("#nm", NAME)
            .expression_attribute_names("#ts", TIMESTAMP)
            .expression_attribute_names("#url", URL)
            .into_paginator()
            .items()
            .send();

        let mut products = Vec::new();
        while let Some(item) = items.next().await {
            let item = item.map_err(|e| SourceError::Query {
                table: self.table_name.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
            products.push(product_from_item(&item));
        }

        debug!(count = products.len(), category, "query complete");
        Ok(products)
    }
}

fn string_attr<'a>(item: &'a HashMap<String, AttributeValue>, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(String::as_str)
}

/// Map a raw item to a `Product`.
///
/// `domain` and `name` fall back to [`UNKNOWN`], `timestamp` to an empty
/// string. `url` is only set when the item has one. Non-string attributes
/// count as absent.
#[must_use]
pub fn product_from_item(item: &HashMap<String, AttributeValue>) -> Product {
    let mut product = Product::with_identity(
        string_attr(item, DOMAIN).unwrap_or(UNKNOWN),
        string_attr(item, NAME).unwrap_or(UNKNOWN),
    )
    .with(TIMESTAMP, string_attr(item, TIMESTAMP).unwrap_or_default());
    if let Some(url) = string_attr(item, URL) {
        product.insert(URL, url);
    }
    product
}
