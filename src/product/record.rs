/// A product record as returned by the store: a flat map of string fields.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field holding the store partition/grouping key within a category.
pub const DOMAIN: &str = "domain";
/// Field holding the product display name, possibly with a `#<digits>` suffix.
pub const NAME: &str = "name";
/// Field holding the item timestamp, kept as an opaque string.
pub const TIMESTAMP: &str = "timestamp";
/// Optional product link.
pub const URL: &str = "url";
/// Added to each record by the JSON renderers.
pub const CATEGORY: &str = "category";

/// One product record.
///
/// Only `domain` and `name` carry meaning for filtering; every other field is
/// payload that must survive untouched. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    fields: BTreeMap<String, String>,
}

impl Product {
    /// Empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a record carrying just `domain` and `name`.
    #[must_use]
    pub fn with_identity(domain: &str, name: &str) -> Self {
        let mut p = Self::new();
        p.insert(DOMAIN, domain);
        p.insert(NAME, name);
        p
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_owned(), value.into());
    }

    /// Look up any field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.get(DOMAIN)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(NAME)
    }
}

impl<K, V> FromIterator<(K, V)> for Product
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_accessors() {
        let p = Product::with_identity("shop.example", "Widget#1");
        assert_eq!(p.domain(), Some("shop.example"));
        assert_eq!(p.name(), Some("Widget#1"));
        assert_eq!(p.get(URL), None);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let p = Product::with_identity("d", "Widget").with(TIMESTAMP, "2024-01-01");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"d","name":"Widget","timestamp":"2024-01-01"}"#
        );
    }

    #[test]
    fn test_from_iter() {
        let p: Product = [("domain", "d"), ("name", "n"), ("url", "https://x")]
            .into_iter()
            .collect();
        assert_eq!(p.get(URL), Some("https://x"));
        assert_eq!(p, Product::with_identity("d", "n").with(URL, "https://x"));
    }
}
