// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Top level of the catalog tree
// ============================================================================

use std::collections::BTreeSet;

use menu_shared::{utils::is_blank, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient::{labels, null_as_default};
use super::{AgeGroup, Category, MealTime};
use crate::error::DomainError;

/// Menu entity as returned by `GET /menus`
///
/// Audience and serving times are shown as the server sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub restaurant_id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age_group: String,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub num_ratings: Option<u32>,
    #[serde(default, deserialize_with = "labels")]
    pub available_times: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Menu {
    pub fn has_id(&self, id: EntityId) -> bool {
        self.id == Some(id)
    }

    pub fn category(&self, category_id: EntityId) -> Option<&Category> {
        self.categories.iter().find(|c| c.has_id(category_id))
    }

    pub fn category_mut(&mut self, category_id: EntityId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.has_id(category_id))
    }

    /// Position for a category appended after every existing one.
    pub fn next_category_position(&self) -> i32 {
        self.categories
            .iter()
            .map(|c| c.position)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Admin form input for a new menu
#[derive(Debug, Clone, Default, Validate)]
pub struct MenuDraft {
    #[validate(length(max = 100, message = "Menu name must be at most 100 characters"))]
    pub name: String,

    #[validate(length(max = 60, message = "Cuisine must be at most 60 characters"))]
    pub cuisine: String,

    pub age_group: AgeGroup,

    #[validate(length(max = 2048, message = "Image URL too long"))]
    pub image_url: Option<String>,

    pub available_times: BTreeSet<MealTime>,
}

impl MenuDraft {
    pub fn new(name: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            ..Self::default()
        }
    }

    pub fn check(&self) -> Result<(), DomainError> {
        if is_blank(&self.name) {
            return Err(DomainError::MissingName);
        }
        if is_blank(&self.cuisine) {
            return Err(DomainError::MissingCuisine);
        }
        self.validate()?;
        Ok(())
    }

    pub fn to_payload(&self, restaurant_id: EntityId) -> NewMenu {
        NewMenu {
            restaurant_id,
            name: self.name.trim().to_string(),
            cuisine: self.cuisine.trim().to_string(),
            age_group: self.age_group,
            image_url: self
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            available_times: self.available_times.clone(),
            rating: 0.0,
            num_ratings: 0,
        }
    }
}

/// Body of `POST /menus`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenu {
    pub restaurant_id: EntityId,
    pub name: String,
    pub cuisine: String,
    pub age_group: AgeGroup,
    pub image_url: Option<String>,
    pub available_times: BTreeSet<MealTime>,
    pub rating: f64,
    pub num_ratings: u32,
}
