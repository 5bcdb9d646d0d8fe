/// Product domain layer: records, filters, and the filter pipeline.
pub mod discriminator;
pub mod errors;
pub mod pipeline;
pub mod record;

pub use discriminator::DiscriminatorFilter;
pub use errors::ProductError;
pub use pipeline::{FilterPipeline, ProductFilter};
pub use record::{CATEGORY, DOMAIN, NAME, Product, TIMESTAMP, URL};
