//! Homepage slider (hero banner) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clean_optional;
use crate::domain::value_objects::ObjectId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    pub id: ObjectId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Display position, ascending
    pub order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSlider {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub order: Option<u32>,
    pub is_active: Option<bool>,
}

impl Slider {
    pub fn new(input: NewSlider) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::generate(),
            title: input.title.trim().to_string(),
            subtitle: clean_optional(input.subtitle),
            image: input.image.trim().to_string(),
            link: clean_optional(input.link),
            order: input.order.unwrap_or(0),
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: SliderPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if patch.subtitle.is_some() {
            self.subtitle = clean_optional(patch.subtitle);
        }
        if let Some(image) = patch.image {
            self.image = image.trim().to_string();
        }
        if patch.link.is_some() {
            self.link = clean_optional(patch.link);
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}
