//! Catalog repository trait defining persistence for products, categories
//! and sliders.
//!
//! Implementations own ordering and referential checks; callers receive
//! `DomainError::NotFound` for unknown ids instead of `None` on mutating
//! operations.

use async_trait::async_trait;
use sf_shared::types::Pagination;

use crate::domain::entities::{
    Category, CategoryPatch, NewCategory, NewProduct, NewSlider, Product, ProductPatch, Slider,
    SliderPatch,
};
use crate::domain::value_objects::ObjectId;
use crate::errors::DomainResult;

/// One page of results plus the total number of matching items
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List products, newest first
    async fn list_products(&self, pagination: Pagination) -> DomainResult<Page<Product>>;

    async fn find_product(&self, id: &ObjectId) -> DomainResult<Option<Product>>;

    /// Create a product; fails with `DomainError::Validation` when the
    /// referenced category does not exist
    async fn create_product(&self, input: NewProduct) -> DomainResult<Product>;

    async fn update_product(&self, id: &ObjectId, patch: ProductPatch) -> DomainResult<Product>;

    /// Remove and return a product
    async fn delete_product(&self, id: &ObjectId) -> DomainResult<Product>;

    /// List categories, alphabetically
    async fn list_categories(&self, pagination: Pagination) -> DomainResult<Page<Category>>;

    async fn find_category(&self, id: &ObjectId) -> DomainResult<Option<Category>>;

    async fn create_category(&self, input: NewCategory) -> DomainResult<Category>;

    async fn update_category(&self, id: &ObjectId, patch: CategoryPatch) -> DomainResult<Category>;

    async fn delete_category(&self, id: &ObjectId) -> DomainResult<Category>;

    /// List sliders by display order
    async fn list_sliders(&self, pagination: Pagination) -> DomainResult<Page<Slider>>;

    async fn find_slider(&self, id: &ObjectId) -> DomainResult<Option<Slider>>;

    async fn create_slider(&self, input: NewSlider) -> DomainResult<Slider>;

    async fn update_slider(&self, id: &ObjectId, patch: SliderPatch) -> DomainResult<Slider>;

    async fn delete_slider(&self, id: &ObjectId) -> DomainResult<Slider>;
}
