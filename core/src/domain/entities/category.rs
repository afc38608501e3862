//! Category entity grouping products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clean_optional;
use crate::domain::value_objects::ObjectId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: ObjectId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Parent category for nested menus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ObjectId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub parent: Option<ObjectId>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub parent: Option<ObjectId>,
    pub is_active: Option<bool>,
}

impl Category {
    pub fn new(input: NewCategory) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::generate(),
            name: input.name.trim().to_string(),
            description: clean_optional(input.description),
            image: clean_optional(input.image),
            parent: input.parent,
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if patch.description.is_some() {
            self.description = clean_optional(patch.description);
        }
        if patch.image.is_some() {
            self.image = clean_optional(patch.image);
        }
        if let Some(parent) = patch.parent {
            self.parent = Some(parent);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}
