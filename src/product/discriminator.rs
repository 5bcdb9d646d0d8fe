/// Collapse product names that differ only by a trailing `#<digits>` suffix.
///
/// Stores often disambiguate colliding product names by appending a counter
/// (`Widget`, `Widget#1`, `Widget#2`). This filter keeps one record per
/// `(domain, base name)` and prefers the variant without a suffix.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use regex::Regex;

use super::errors::ProductError;
use super::pipeline::ProductFilter;
use super::record::{DOMAIN, NAME, Product};

static DISCRIMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9]+$").expect("discriminator pattern is valid"));

/// Strip one trailing `#<digits>` suffix from `name`, if present.
///
/// The digits must run to the end of the string: `"Widget#12abc"` is returned
/// unchanged, `"A#1#2"` becomes `"A#1"`.
#[must_use]
pub fn base_name(name: &str) -> &str {
    match DISCRIMINATOR.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

/// The stored representative of one group, with its base name computed once.
struct Kept {
    product: Product,
    base_name: String,
}

impl Kept {
    fn is_suffix_free(&self) -> bool {
        self.product.name() == Some(self.base_name.as_str())
    }
}

/// Deduplicates discriminator variants.
///
/// Per group, the first suffix-free record wins. If a group has no
/// suffix-free record, the first record seen wins. Output keeps the order in
/// which each group was first seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscriminatorFilter;

impl DiscriminatorFilter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProductFilter for DiscriminatorFilter {
    fn name(&self) -> &'static str {
        "discriminator"
    }

    fn filter(&self, products: Vec<Product>) -> Result<Vec<Product>, ProductError> {
        let mut groups: HashMap<(String, String), usize> = HashMap::new();
        let mut kept: Vec<Kept> = Vec::new();

        for (index, product) in products.into_iter().enumerate() {
            let domain = product
                .domain()
                .ok_or(ProductError::MissingField { field: DOMAIN, index })?;
            let name = product
                .name()
                .ok_or(ProductError::MissingField { field: NAME, index })?;

            let base = base_name(name);
            let incoming_has_discriminator = base.len() != name.len();
            let key = (domain.to_owned(), base.to_owned());

            match groups.entry(key) {
                Entry::Vacant(slot) => {
                    let base_name = slot.key().1.clone();
                    slot.insert(kept.len());
                    kept.push(Kept { product, base_name });
                }
                Entry::Occupied(slot) => {
                    let current = &mut kept[*slot.get()];
                    if !incoming_has_discriminator && !current.is_suffix_free() {
                        current.product = product;
                    }
                }
            }
        }

        Ok(kept.into_iter().map(|k| k.product).collect())
    }
}
