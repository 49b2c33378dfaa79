// ============================================================================
// Menu Core - Item Entity
// File: crates/menu-core/src/domain/item.rs
// Description: Purchasable dish, its admin form and create payload
// ============================================================================

use std::collections::BTreeSet;

use menu_shared::{
    constants::{MAX_SPICE_LEVEL, MIN_SPICE_LEVEL},
    utils::{is_blank, split_comma_list},
    EntityId,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient::{known_meal_times, labels, null_as_default};
use super::{AgeGroup, MealTime};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "labels")]
    pub tags: BTreeSet<String>,
    /// Display order is preserved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub num_ratings: Option<u32>,
    pub spice_level: Option<u8>,
    pub calories: Option<u32>,
    #[serde(default, deserialize_with = "known_meal_times")]
    pub available_times: BTreeSet<MealTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age_group: AgeGroup,
}

impl Item {
    pub fn has_id(&self, id: EntityId) -> bool {
        self.id == Some(id)
    }

    pub fn is_available_at(&self, meal: MealTime) -> bool {
        self.available_times.contains(&meal)
    }

    pub fn ingredients_line(&self) -> Option<String> {
        if self.ingredients.is_empty() {
            None
        } else {
            Some(format!("Ingredients: {}", self.ingredients.join(", ")))
        }
    }
}

/// Admin form input for creating or editing an item. `price` and
/// `ingredients` hold the raw text fields.
#[derive(Debug, Clone, Default, Validate)]
pub struct ItemDraft {
    #[validate(length(max = 100, message = "Item name must be at most 100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: String,

    pub price: String,

    pub tags: BTreeSet<String>,

    pub ingredients: String,

    #[validate(length(max = 2048, message = "Image URL too long"))]
    pub image_url: Option<String>,

    #[validate(range(
        min = MIN_SPICE_LEVEL,
        max = MAX_SPICE_LEVEL,
        message = "Spice level must be between 1 and 5"
    ))]
    pub spice_level: Option<u8>,

    pub calories: Option<u32>,

    pub available_times: BTreeSet<MealTime>,

    pub age_group: AgeGroup,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    /// Pre-fills the edit form from an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            tags: item.tags.clone(),
            ingredients: item.ingredients.join(", "),
            image_url: item.image_url.clone(),
            spice_level: item.spice_level,
            calories: item.calories,
            available_times: item.available_times.clone(),
            age_group: item.age_group,
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    pub fn parsed_ingredients(&self) -> Vec<String> {
        split_comma_list(&self.ingredients)
    }

    pub fn parse_price(&self) -> Result<f64, DomainError> {
        let raw = self.price.trim();
        match raw.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
            _ => Err(DomainError::InvalidPrice(raw.to_string())),
        }
    }

    /// Returns the parsed price when the draft is acceptable.
    pub fn check(&self) -> Result<f64, DomainError> {
        if is_blank(&self.name) {
            return Err(DomainError::MissingName);
        }
        let price = self.parse_price()?;
        self.validate()?;
        Ok(price)
    }

    pub fn to_payload(&self, price: f64) -> NewItem {
        NewItem {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            tags: self.tags.clone(),
            ingredients: self.parsed_ingredients(),
            image_url: self.image_url.clone().filter(|url| !is_blank(url)),
            spice_level: self.spice_level,
            calories: self.calories,
            available_times: self.available_times.clone(),
            age_group: self.age_group,
            rating: 0.0,
            num_ratings: 0,
        }
    }

    /// Local edit: keeps the id and the server-side rating of `existing`.
    pub fn apply_to(&self, existing: &Item, price: f64) -> Item {
        let payload = self.to_payload(price);
        Item {
            id: existing.id,
            name: payload.name,
            description: payload.description,
            price,
            tags: payload.tags,
            ingredients: payload.ingredients,
            image_url: payload.image_url,
            rating: existing.rating,
            num_ratings: existing.num_ratings,
            spice_level: payload.spice_level,
            calories: payload.calories,
            available_times: payload.available_times,
            age_group: payload.age_group,
        }
    }
}

/// Body of `POST /categories/{categoryId}/items`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tags: BTreeSet<String>,
    pub ingredients: Vec<String>,
    pub image_url: Option<String>,
    pub spice_level: Option<u8>,
    pub calories: Option<u32>,
    pub available_times: BTreeSet<MealTime>,
    pub age_group: AgeGroup,
    pub rating: f64,
    pub num_ratings: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_non_numeric_and_negative() {
        for raw in ["", "abc", "-1", "-0.01", "NaN", "inf", "12,50", "1e400"] {
            let draft = ItemDraft::new("Soup", raw);
            assert_eq!(
                draft.check(),
                Err(DomainError::InvalidPrice(raw.trim().to_string())),
                "price {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_price_accepts_decimal() {
        assert_eq!(ItemDraft::new("Soup", " 12.99 ").check(), Ok(12.99));
        assert_eq!(ItemDraft::new("Water", "0").check(), Ok(0.0));
    }

    #[test]
    fn test_name_checked_before_price() {
        assert_eq!(ItemDraft::new(" ", "abc").check(), Err(DomainError::MissingName));
    }

    #[test]
    fn test_spice_level_range() {
        let mut draft = ItemDraft::new("Curry", "10");
        draft.spice_level = Some(6);
        assert!(matches!(draft.check(), Err(DomainError::Validation(_))));
        draft.spice_level = Some(5);
        assert!(draft.check().is_ok());
    }

    #[test]
    fn test_toggle_tag() {
        let mut draft = ItemDraft::default();
        draft.toggle_tag("Vegan");
        draft.toggle_tag("Spicy");
        draft.toggle_tag("Vegan");
        assert_eq!(draft.tags.iter().collect::<Vec<_>>(), vec!["Spicy"]);
    }

    #[test]
    fn test_payload_splits_ingredients() {
        let mut draft = ItemDraft::new("Avocado Toast", "12.99");
        draft.ingredients = "Avocado, Sourdough bread, , Cherry tomatoes ".to_string();

        let payload = draft.to_payload(12.99);
        assert_eq!(payload.ingredients, vec!["Avocado", "Sourdough bread", "Cherry tomatoes"]);
        assert_eq!(payload.rating, 0.0);
        assert_eq!(payload.num_ratings, 0);
    }

    #[test]
    fn test_from_item_round_trips_form_fields() {
        let item = Item {
            id: Some(1),
            name: "Avocado Toast".to_string(),
            description: "Fresh avocado on sourdough".to_string(),
            price: 12.5,
            tags: ["Vegetarian".to_string()].into_iter().collect(),
            ingredients: vec!["Avocado".to_string(), "Sourdough bread".to_string()],
            image_url: None,
            rating: Some(4.5),
            num_ratings: Some(12),
            spice_level: None,
            calories: Some(320),
            available_times: [MealTime::Breakfast].into_iter().collect(),
            age_group: AgeGroup::All,
        };

        let draft = ItemDraft::from_item(&item);
        assert_eq!(draft.price, "12.5");
        assert_eq!(draft.ingredients, "Avocado, Sourdough bread");

        let edited = draft.apply_to(&item, draft.check().unwrap());
        assert_eq!(edited, item);
        assert_eq!(
            edited.ingredients_line().as_deref(),
            Some("Ingredients: Avocado, Sourdough bread")
        );
    }

    #[test]
    fn test_decodes_nulls_and_unlisted_labels() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Garden Salad",
            "description": null,
            "price": 8.0,
            "tags": null,
            "ingredients": null,
            "availableTimes": ["lunch", "late night"],
            "ageGroup": "Family"
        }))
        .unwrap();

        assert_eq!(item.description, "");
        assert!(item.tags.is_empty());
        assert!(item.ingredients_line().is_none());
        assert!(item.is_available_at(MealTime::Lunch));
        assert_eq!(item.available_times.len(), 1);
        assert_eq!(item.age_group, AgeGroup::Other);
    }
}
