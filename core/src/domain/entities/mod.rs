//! Catalog entities managed through the admin API.

pub mod category;
pub mod product;
pub mod slider;

pub use category::{Category, CategoryPatch, NewCategory};
pub use product::{NewProduct, Product, ProductImage, ProductPatch};
pub use slider::{NewSlider, Slider, SliderPatch};

/// Trim free text, mapping blank values to `None`
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
