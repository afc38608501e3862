//! Rule sets for every resource exposed by the admin API.

use once_cell::sync::Lazy;

use super::constraint::{Check, FieldConstraint, Location};
use sf_shared::types::pagination::MAX_LIMIT;

use Location::{Body, Path, Query};

pub const PRODUCT_NAME_MAX: usize = 200;
pub const PRODUCT_DESCRIPTION_MAX: usize = 2000;
pub const SKU_MAX: usize = 50;
pub const CATEGORY_NAME_MAX: usize = 100;
pub const CATEGORY_DESCRIPTION_MAX: usize = 500;
pub const SLIDER_TITLE_MAX: usize = 200;
pub const SLIDER_SUBTITLE_MAX: usize = 500;
pub const FOLDER_MAX: usize = 100;

pub static PRODUCT_CREATE: &[FieldConstraint] = &[
    FieldConstraint::required(
        Body,
        "name",
        "Product name is required",
        Check::NonEmptyString { max: PRODUCT_NAME_MAX },
        "Product name must be a string of at most 200 characters",
    ),
    FieldConstraint::required(
        Body,
        "description",
        "Product description is required",
        Check::NonEmptyString { max: PRODUCT_DESCRIPTION_MAX },
        "Product description must be a string of at most 2000 characters",
    ),
    FieldConstraint::required(
        Body,
        "price",
        "Price is required",
        Check::Number { min: Some(0.0), max: None },
        "Price must be a positive number",
    ),
    FieldConstraint::required(
        Body,
        "stock",
        "Stock is required",
        Check::Integer { min: Some(0), max: None },
        "Stock must be a non-negative integer",
    ),
    FieldConstraint::optional(
        Body,
        "sku",
        Check::MaxLength(SKU_MAX),
        "SKU cannot exceed 50 characters",
    ),
    FieldConstraint::required(
        Body,
        "category",
        "Category is required",
        Check::ObjectId,
        "Invalid category ID",
    ),
    FieldConstraint::optional(Body, "images", Check::Array, "Images must be an array"),
    FieldConstraint::optional(Body, "isActive", Check::Boolean, "isActive must be a boolean"),
    FieldConstraint::optional(Body, "isFeatured", Check::Boolean, "isFeatured must be a boolean"),
];

pub static CATEGORY_CREATE: &[FieldConstraint] = &[
    FieldConstraint::required(
        Body,
        "name",
        "Category name is required",
        Check::NonEmptyString { max: CATEGORY_NAME_MAX },
        "Category name must be a string of at most 100 characters",
    ),
    FieldConstraint::optional(
        Body,
        "description",
        Check::MaxLength(CATEGORY_DESCRIPTION_MAX),
        "Description cannot exceed 500 characters",
    ),
    FieldConstraint::optional(Body, "image", Check::Url, "Image must be a valid URL"),
    FieldConstraint::optional(Body, "parent", Check::ObjectId, "Invalid parent category ID"),
    FieldConstraint::optional(Body, "isActive", Check::Boolean, "isActive must be a boolean"),
];

pub static SLIDER_CREATE: &[FieldConstraint] = &[
    FieldConstraint::required(
        Body,
        "title",
        "Slider title is required",
        Check::NonEmptyString { max: SLIDER_TITLE_MAX },
        "Slider title must be a string of at most 200 characters",
    ),
    FieldConstraint::optional(
        Body,
        "subtitle",
        Check::MaxLength(SLIDER_SUBTITLE_MAX),
        "Subtitle cannot exceed 500 characters",
    ),
    FieldConstraint::required(
        Body,
        "image",
        "Slider image is required",
        Check::Url,
        "Image must be a valid URL",
    ),
    FieldConstraint::optional(Body, "link", Check::Url, "Link must be a valid URL"),
    FieldConstraint::optional(
        Body,
        "order",
        Check::Integer { min: Some(0), max: None },
        "Order must be a non-negative integer",
    ),
    FieldConstraint::optional(Body, "isActive", Check::Boolean, "isActive must be a boolean"),
];

pub static ID_PARAM: &[FieldConstraint] = &[FieldConstraint::required(
    Path,
    "id",
    "ID is required",
    Check::ObjectId,
    "Invalid ID format",
)];

pub static PAGINATION: &[FieldConstraint] = &[
    FieldConstraint::optional(
        Query,
        "page",
        Check::Integer { min: Some(1), max: None },
        "Page must be a positive integer",
    ),
    FieldConstraint::optional(
        Query,
        "limit",
        Check::Integer { min: Some(1), max: Some(MAX_LIMIT as i64) },
        "Limit must be between 1 and 100",
    ),
];

pub static IMAGE_DELETE: &[FieldConstraint] = &[FieldConstraint::required(
    Body,
    "publicIds",
    "publicIds is required",
    Check::Array,
    "publicIds must be an array",
)];

pub static UPLOAD_FOLDER: &[FieldConstraint] = &[FieldConstraint::optional(
    Query,
    "folder",
    Check::MaxLength(FOLDER_MAX),
    "Folder cannot exceed 100 characters",
)];

pub static PRODUCT_UPDATE: Lazy<Vec<FieldConstraint>> = Lazy::new(|| relaxed(PRODUCT_CREATE));
pub static CATEGORY_UPDATE: Lazy<Vec<FieldConstraint>> = Lazy::new(|| relaxed(CATEGORY_CREATE));
pub static SLIDER_UPDATE: Lazy<Vec<FieldConstraint>> = Lazy::new(|| relaxed(SLIDER_CREATE));

/// Every constraint of `rules` relaxed for a partial update
fn relaxed(rules: &[FieldConstraint]) -> Vec<FieldConstraint> {
    rules.iter().map(|rule| rule.relaxed()).collect()
}
