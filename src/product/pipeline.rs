/// Composable product filters and the ordered pipeline that runs them.
use super::errors::ProductError;
use super::record::Product;

/// A transformation over a fully materialized product list.
///
/// Implementations must not keep state between calls.
pub trait ProductFilter {
    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    /// Reduce or rewrite `products`.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::MissingField` when a record lacks a field the
    /// filter depends on.
    fn filter(&self, products: Vec<Product>) -> Result<Vec<Product>, ProductError>;
}

/// Filters applied in registration order; output of one feeds the next.
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn ProductFilter>>,
}

impl FilterPipeline {
    /// Empty pipeline. `apply` is the identity until a filter is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to the end of the chain.
    pub fn add(&mut self, filter: impl ProductFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the registered filters, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Thread `products` through every filter.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first filter error.
    pub fn apply(&self, products: Vec<Product>) -> Result<Vec<Product>, ProductError> {
        self.filters
            .iter()
            .try_fold(products, |acc, filter| filter.filter(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::record::{NAME, URL};

    /// Keeps only records whose name starts with a prefix.
    struct Prefix(&'static str);

    impl ProductFilter for Prefix {
        fn name(&self) -> &'static str {
            "prefix"
        }

        fn filter(&self, products: Vec<Product>) -> Result<Vec<Product>, ProductError> {
            Ok(products
                .into_iter()
                .filter(|p| p.name().is_some_and(|n| n.starts_with(self.0)))
                .collect())
        }
    }

    /// Appends a marker to every name, to observe ordering.
    struct Mark(&'static str);

    impl ProductFilter for Mark {
        fn name(&self) -> &'static str {
            "mark"
        }

        fn filter(&self, products: Vec<Product>) -> Result<Vec<Product>, ProductError> {
            Ok(products
                .into_iter()
                .map(|mut p| {
                    let name = format!("{}{}", p.name().unwrap_or_default(), self.0);
                    p.insert(NAME, name);
                    p
                })
                .collect())
        }
    }

    struct Fails;

    impl ProductFilter for Fails {
        fn name(&self) -> &'static str {
            "fails"
        }

        fn filter(&self, _products: Vec<Product>) -> Result<Vec<Product>, ProductError> {
            Err(ProductError::MissingField {
                field: "domain",
                index: 0,
            })
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::with_identity("b.example", "Gadget").with(URL, "https://b/g"),
            Product::with_identity("a.example", "Widget#1"),
            Product::with_identity("a.example", "Widget"),
        ]
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());
        let out = pipeline.apply(sample()).unwrap();
        assert_eq!(out, sample());
    }

    fn pipeline_of(filters: Vec<Box<dyn ProductFilter>>) -> FilterPipeline {
        FilterPipeline { filters }
    }

    #[test]
    fn test_filters_run_in_registration_order() {
        let pipeline = pipeline_of(vec![Box::new(Mark("-a")), Box::new(Mark("-b"))]);
        let out = pipeline.apply(sample()).unwrap();
        assert_eq!(out[0].name(), Some("Gadget-a-b"));
        assert_eq!(pipeline.names(), vec!["mark", "mark"]);
    }

    #[test]
    fn test_output_feeds_next_filter() {
        let mut pipeline = FilterPipeline::new();
        pipeline.add(Prefix("W"));
        pipeline.add(Mark("!"));
        let out = pipeline.apply(sample()).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.name().unwrap().ends_with('!')));
        assert_eq!(pipeline.names(), vec!["prefix", "mark"]);
    }

    #[test]
    fn test_first_error_stops_chain() {
        let pipeline = pipeline_of(vec![Box::new(Fails), Box::new(Mark("!"))]);
        let result = pipeline.apply(sample());
        assert!(matches!(result, Err(ProductError::MissingField { .. })));
    }
}
