//! Unit tests for the in-memory catalog

use serde_json::json;
use sf_shared::types::Pagination;

use crate::domain::entities::{NewCategory, NewProduct, NewSlider, ProductPatch};
use crate::domain::value_objects::ObjectId;
use crate::errors::DomainError;
use crate::repositories::catalog::{CatalogRepository, InMemoryCatalog};

fn category(name: &str) -> NewCategory {
    serde_json::from_value(json!({ "name": name })).unwrap()
}

fn product(name: &str, category: &ObjectId) -> NewProduct {
    serde_json::from_value(json!({
        "name": name,
        "description": "A product",
        "price": 10.0,
        "stock": 1,
        "category": category.as_str()
    }))
    .unwrap()
}

fn slider(title: &str, order: u32) -> NewSlider {
    serde_json::from_value(json!({
        "title": title,
        "image": "https://cdn.example.com/banner.jpg",
        "order": order
    }))
    .unwrap()
}

#[tokio::test]
async fn test_create_and_find_product() {
    let catalog = InMemoryCatalog::new();
    let furniture = catalog.create_category(category("Furniture")).await.unwrap();

    let created = catalog.create_product(product("Chair", &furniture.id)).await.unwrap();
    let found = catalog.find_product(&created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_product_requires_existing_category() {
    let catalog = InMemoryCatalog::new();
    let err = catalog
        .create_product(product("Chair", &ObjectId::generate()))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { ref message } if message == "Category not found"));
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let catalog = InMemoryCatalog::new();
    let err = catalog
        .update_product(&ObjectId::generate(), ProductPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_products_paginates() {
    let catalog = InMemoryCatalog::new();
    let furniture = catalog.create_category(category("Furniture")).await.unwrap();
    for i in 0..5 {
        catalog
            .create_product(product(&format!("Item {}", i), &furniture.id))
            .await
            .unwrap();
    }

    let page = catalog.list_products(Pagination::new(2, 2)).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 2);

    let last = catalog.list_products(Pagination::new(3, 2)).await.unwrap();
    assert_eq!(last.items.len(), 1);
}

#[tokio::test]
async fn test_category_in_use_cannot_be_deleted() {
    let catalog = InMemoryCatalog::new();
    let furniture = catalog.create_category(category("Furniture")).await.unwrap();
    let chair = catalog.create_product(product("Chair", &furniture.id)).await.unwrap();

    assert!(catalog.delete_category(&furniture.id).await.is_err());

    catalog.delete_product(&chair.id).await.unwrap();
    assert!(catalog.delete_category(&furniture.id).await.is_ok());
}

#[tokio::test]
async fn test_categories_list_alphabetically() {
    let catalog = InMemoryCatalog::new();
    for name in ["lighting", "Beds", "Armchairs"] {
        catalog.create_category(category(name)).await.unwrap();
    }

    let page = catalog.list_categories(Pagination::default()).await.unwrap();
    let names: Vec<&str> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Armchairs", "Beds", "lighting"]);
}

#[tokio::test]
async fn test_sliders_list_by_order() {
    let catalog = InMemoryCatalog::new();
    catalog.create_slider(slider("Third", 3)).await.unwrap();
    catalog.create_slider(slider("First", 1)).await.unwrap();
    catalog.create_slider(slider("Second", 2)).await.unwrap();

    let page = catalog.list_sliders(Pagination::default()).await.unwrap();
    let titles: Vec<&str> = page.items.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_category_cannot_parent_itself() {
    let catalog = InMemoryCatalog::new();
    let furniture = catalog.create_category(category("Furniture")).await.unwrap();

    let patch = serde_json::from_value(json!({ "parent": furniture.id.as_str() })).unwrap();
    let err = catalog.update_category(&furniture.id, patch).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}
