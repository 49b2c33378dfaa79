//! Category entity

use menu_shared::{utils::is_blank, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient::null_as_default;
use super::Item;
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Ordering key within the parent menu.
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

impl Category {
    pub fn has_id(&self, id: EntityId) -> bool {
        self.id == Some(id)
    }

    pub fn item(&self, item_id: EntityId) -> Option<&Item> {
        self.items.iter().find(|i| i.has_id(item_id))
    }
}

/// Categories sorted by `position`; equal positions keep insertion order.
pub fn display_order(categories: &[Category]) -> Vec<&Category> {
    let mut ordered: Vec<&Category> = categories.iter().collect();
    ordered.sort_by_key(|c| c.position);
    ordered
}

#[derive(Debug, Clone, Default, Validate)]
pub struct CategoryDraft {
    #[validate(length(max = 100, message = "Category name must be at most 100 characters"))]
    pub name: String,

    /// Defaults to one past the highest position in the menu.
    pub position: Option<i32>,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
        }
    }

    pub fn at_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn check(&self) -> Result<(), DomainError> {
        if is_blank(&self.name) {
            return Err(DomainError::MissingName);
        }
        self.validate()?;
        Ok(())
    }

    pub fn to_payload(&self, default_position: i32) -> NewCategory {
        NewCategory {
            name: self.name.trim().to_string(),
            position: self.position.unwrap_or(default_position),
        }
    }
}

/// Body of `POST /menus/{menuId}/categories`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: EntityId, position: i32) -> Category {
        Category {
            id: Some(id),
            name: format!("Category {}", id),
            position,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_display_order_is_stable() {
        let categories = vec![
            category(1, 2),
            category(2, 1),
            category(3, 2),
            category(4, 1),
            category(5, 0),
        ];

        let ids: Vec<Option<EntityId>> = display_order(&categories).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(5), Some(2), Some(4), Some(1), Some(3)]);
    }

    #[test]
    fn test_draft_position_defaults() {
        let payload = CategoryDraft::new(" Desserts ").to_payload(4);
        assert_eq!(payload, NewCategory { name: "Desserts".to_string(), position: 4 });

        let payload = CategoryDraft::new("Drinks").at_position(9).to_payload(4);
        assert_eq!(payload.position, 9);
    }

    #[test]
    fn test_draft_requires_name() {
        assert_eq!(CategoryDraft::new("   ").check(), Err(DomainError::MissingName));
    }
}
