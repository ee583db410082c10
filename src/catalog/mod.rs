//! Tool catalog - records, categories, and reload-per-view loading

mod record;
mod store;

pub use record::{Catalog, Category, ToolRecord};
pub use store::CatalogStore;
