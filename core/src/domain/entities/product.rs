//! Product entity representing a sellable catalog item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clean_optional;
use crate::domain::value_objects::ObjectId;

/// Image attached to a product; `public_id` is set when the image was
/// uploaded through the media store and can be deleted there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Owning category
    pub category: ObjectId,
    pub images: Vec<ProductImage>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a product creation request, after validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u64,
    #[serde(default)]
    pub sku: Option<String>,
    pub category: ObjectId,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u64>,
    pub sku: Option<String>,
    pub category: Option<ObjectId>,
    pub images: Option<Vec<ProductImage>>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::generate(),
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            price: input.price,
            stock: input.stock,
            sku: clean_optional(input.sku),
            category: input.category,
            images: input.images,
            is_active: input.is_active.unwrap_or(true),
            is_featured: input.is_featured.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if patch.sku.is_some() {
            self.sku = clean_optional(patch.sku);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
        self.updated_at = Utc::now();
    }

    /// Public ids of images hosted by the media store
    pub fn hosted_image_ids(&self) -> Vec<String> {
        self.images
            .iter()
            .filter_map(|image| image.public_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_product() -> NewProduct {
        serde_json::from_value(json!({
            "name": "  Desk lamp ",
            "description": "Warm light",
            "price": 24.5,
            "stock": 3,
            "sku": " ",
            "category": "507f1f77bcf86cd799439011",
            "images": [
                { "url": "https://cdn.example.com/a.jpg", "publicId": "products/a" },
                { "url": "https://cdn.example.com/b.jpg" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new(new_product());
        assert_eq!(product.name, "Desk lamp");
        assert_eq!(product.sku, None);
        assert!(product.is_active);
        assert!(!product.is_featured);
        assert_eq!(product.hosted_image_ids(), vec!["products/a".to_string()]);
    }

    #[test]
    fn test_apply_patch() {
        let mut product = Product::new(new_product());
        let patch: ProductPatch = serde_json::from_value(json!({ "price": 10, "isFeatured": true })).unwrap();
        product.apply(patch);

        assert_eq!(product.price, 10.0);
        assert!(product.is_featured);
        assert_eq!(product.name, "Desk lamp");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(Product::new(new_product())).unwrap();
        assert!(value.get("isActive").is_some());
        assert!(value.get("sku").is_none());
        assert_eq!(value["category"], "507f1f77bcf86cd799439011");
    }
}
