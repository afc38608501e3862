pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryCatalog;
pub use r#trait::{CatalogRepository, Page};

#[cfg(test)]
mod tests;
