pub mod catalog;

pub use catalog::{CatalogRepository, InMemoryCatalog, Page};
