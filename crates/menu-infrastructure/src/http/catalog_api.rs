// ============================================================================
// Menu Infrastructure - HTTP Catalog Gateway
// File: crates/menu-infrastructure/src/http/catalog_api.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use menu_core::domain::{Category, Item, Menu, NewCategory, NewItem, NewMenu};
use menu_core::error::GatewayError;
use menu_core::gateway::CatalogGateway;
use menu_shared::EntityId;

use super::client::{endpoint, send_json};

pub struct HttpCatalogGateway {
    client: Client,
    base_url: String,
}

impl HttpCatalogGateway {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn try_fetch_menus(&self) -> Result<Vec<Menu>, GatewayError> {
        let url = endpoint(&self.base_url, "/menus");
        debug!("GET {}", url);
        send_json(self.client.get(&url)).await
    }

    pub async fn try_create_menu(&self, menu: &NewMenu) -> Result<Menu, GatewayError> {
        let url = endpoint(&self.base_url, "/menus");
        debug!("POST {}", url);
        send_json(self.client.post(&url).json(menu)).await
    }

    pub async fn try_create_category(
        &self,
        menu_id: EntityId,
        category: &NewCategory,
    ) -> Result<Category, GatewayError> {
        let url = endpoint(&self.base_url, &format!("/menus/{}/categories", menu_id));
        debug!("POST {}", url);
        send_json(self.client.post(&url).json(category)).await
    }

    pub async fn try_create_item(
        &self,
        category_id: EntityId,
        item: &NewItem,
    ) -> Result<Item, GatewayError> {
        let url = endpoint(&self.base_url, &format!("/categories/{}/items", category_id));
        debug!("POST {}", url);
        send_json(self.client.post(&url).json(item)).await
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn fetch_menus(&self) -> Vec<Menu> {
        self.try_fetch_menus().await.unwrap_or_else(|e| {
            error!("Error fetching menus: {}", e);
            Vec::new()
        })
    }

    async fn create_menu(&self, menu: &NewMenu) -> Option<Menu> {
        self.try_create_menu(menu)
            .await
            .map_err(|e| error!("Error creating menu {:?}: {}", menu.name, e))
            .ok()
    }

    async fn create_category(&self, menu_id: EntityId, category: &NewCategory) -> Option<Category> {
        self.try_create_category(menu_id, category)
            .await
            .map_err(|e| error!("Error creating category in menu {}: {}", menu_id, e))
            .ok()
    }

    async fn create_item(&self, category_id: EntityId, item: &NewItem) -> Option<Item> {
        self.try_create_item(category_id, item)
            .await
            .map_err(|e| error!("Error creating item in category {}: {}", category_id, e))
            .ok()
    }
}
