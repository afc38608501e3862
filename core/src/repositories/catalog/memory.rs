//! In-memory implementation of CatalogRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sf_shared::types::Pagination;

use super::trait_::{CatalogRepository, Page};
use crate::domain::entities::{
    Category, CategoryPatch, NewCategory, NewProduct, NewSlider, Product, ProductPatch, Slider,
    SliderPatch,
};
use crate::domain::value_objects::ObjectId;
use crate::errors::{DomainError, DomainResult};

/// Catalog kept in process memory; contents are lost on restart
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<HashMap<ObjectId, Product>>>,
    categories: Arc<RwLock<HashMap<ObjectId, Category>>>,
    sliders: Arc<RwLock<HashMap<ObjectId, Slider>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    async fn ensure_category(&self, id: &ObjectId, message: &str) -> DomainResult<()> {
        if self.categories.read().await.contains_key(id) {
            Ok(())
        } else {
            Err(DomainError::validation(message))
        }
    }
}

/// Sort `items` with `order` and cut out the requested page
fn paginate<T, F>(mut items: Vec<T>, pagination: Pagination, order: F) -> Page<T>
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.sort_by(order);
    let total = items.len();
    let items = items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.limit as usize)
        .collect();
    Page { items, total }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_products(&self, pagination: Pagination) -> DomainResult<Page<Product>> {
        let products = self.products.read().await;
        Ok(paginate(products.values().cloned().collect(), pagination, |a, b| {
            b.created_at.cmp(&a.created_at)
        }))
    }

    async fn find_product(&self, id: &ObjectId) -> DomainResult<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn create_product(&self, input: NewProduct) -> DomainResult<Product> {
        self.ensure_category(&input.category, "Category not found").await?;

        let product = Product::new(input);
        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &ObjectId, patch: ProductPatch) -> DomainResult<Product> {
        if let Some(category) = &patch.category {
            self.ensure_category(category, "Category not found").await?;
        }

        let mut products = self.products.write().await;
        let product = products
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Product"))?;
        product.apply(patch);
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &ObjectId) -> DomainResult<Product> {
        self.products
            .write()
            .await
            .remove(id)
            .ok_or_else(|| DomainError::not_found("Product"))
    }

    async fn list_categories(&self, pagination: Pagination) -> DomainResult<Page<Category>> {
        let categories = self.categories.read().await;
        Ok(paginate(categories.values().cloned().collect(), pagination, |a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        }))
    }

    async fn find_category(&self, id: &ObjectId) -> DomainResult<Option<Category>> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn create_category(&self, input: NewCategory) -> DomainResult<Category> {
        if let Some(parent) = &input.parent {
            self.ensure_category(parent, "Parent category not found").await?;
        }

        let category = Category::new(input);
        self.categories
            .write()
            .await
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: &ObjectId, patch: CategoryPatch) -> DomainResult<Category> {
        if let Some(parent) = &patch.parent {
            if parent == id {
                return Err(DomainError::validation("A category cannot be its own parent"));
            }
            self.ensure_category(parent, "Parent category not found").await?;
        }

        let mut categories = self.categories.write().await;
        let category = categories
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Category"))?;
        category.apply(patch);
        Ok(category.clone())
    }

    async fn delete_category(&self, id: &ObjectId) -> DomainResult<Category> {
        let in_use = self
            .products
            .read()
            .await
            .values()
            .any(|product| &product.category == id);
        if in_use {
            return Err(DomainError::validation(
                "Cannot delete a category that still has products",
            ));
        }

        self.categories
            .write()
            .await
            .remove(id)
            .ok_or_else(|| DomainError::not_found("Category"))
    }

    async fn list_sliders(&self, pagination: Pagination) -> DomainResult<Page<Slider>> {
        let sliders = self.sliders.read().await;
        Ok(paginate(sliders.values().cloned().collect(), pagination, |a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.created_at.cmp(&b.created_at))
        }))
    }

    async fn find_slider(&self, id: &ObjectId) -> DomainResult<Option<Slider>> {
        Ok(self.sliders.read().await.get(id).cloned())
    }

    async fn create_slider(&self, input: NewSlider) -> DomainResult<Slider> {
        let slider = Slider::new(input);
        self.sliders
            .write()
            .await
            .insert(slider.id.clone(), slider.clone());
        Ok(slider)
    }

    async fn update_slider(&self, id: &ObjectId, patch: SliderPatch) -> DomainResult<Slider> {
        let mut sliders = self.sliders.write().await;
        let slider = sliders
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Slider"))?;
        slider.apply(patch);
        Ok(slider.clone())
    }

    async fn delete_slider(&self, id: &ObjectId) -> DomainResult<Slider> {
        self.sliders
            .write()
            .await
            .remove(id)
            .ok_or_else(|| DomainError::not_found("Slider"))
    }
}
