//! In-memory gateways for console tests

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use menu_core::domain::{
    Category, Item, Menu, NewCategory, NewItem, NewMenu, SuggestionReply, SuggestionRequest,
};
use menu_core::gateway::{CatalogGateway, SuggestionGateway};
use menu_core::GatewayError;
use menu_shared::EntityId;

/// Serves a fixed catalog and accepts every create with a fresh id.
pub struct FakeCatalog {
    pub menus: Vec<Menu>,
}

impl FakeCatalog {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus }
    }

    fn next_id() -> EntityId {
        static NEXT_ID: AtomicI64 = AtomicI64::new(1_000);
        NEXT_ID.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogGateway for FakeCatalog {
    async fn fetch_menus(&self) -> Vec<Menu> {
        self.menus.clone()
    }

    async fn create_menu(&self, menu: &NewMenu) -> Option<Menu> {
        Some(Menu {
            id: Some(Self::next_id()),
            restaurant_id: menu.restaurant_id,
            name: menu.name.clone(),
            cuisine: menu.cuisine.clone(),
            age_group: menu.age_group.as_str().to_string(),
            image_url: menu.image_url.clone(),
            rating: Some(menu.rating),
            num_ratings: Some(menu.num_ratings),
            available_times: menu.available_times.iter().map(|t| t.as_str().to_string()).collect(),
            categories: Vec::new(),
        })
    }

    async fn create_category(
        &self,
        _menu_id: EntityId,
        category: &NewCategory,
    ) -> Option<Category> {
        Some(Category {
            id: Some(Self::next_id()),
            name: category.name.clone(),
            position: category.position,
            items: Vec::new(),
        })
    }

    async fn create_item(&self, _category_id: EntityId, item: &NewItem) -> Option<Item> {
        Some(Item {
            id: Some(Self::next_id()),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            tags: item.tags.clone(),
            ingredients: item.ingredients.clone(),
            image_url: item.image_url.clone(),
            rating: Some(item.rating),
            num_ratings: Some(item.num_ratings),
            spice_level: item.spice_level,
            calories: item.calories,
            available_times: item.available_times.clone(),
            age_group: item.age_group,
        })
    }
}

/// Answers every prompt by echoing it.
pub struct EchoSuggestions;

#[async_trait]
impl SuggestionGateway for EchoSuggestions {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionReply, GatewayError> {
        Ok(SuggestionReply {
            suggestion: Some(format!("menu {}: {}", request.menu_id, request.prompt)),
            message: None,
        })
    }
}
