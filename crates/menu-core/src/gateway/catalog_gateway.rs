//! Catalog gateway trait (port)

use async_trait::async_trait;
use menu_shared::EntityId;

use crate::domain::{Category, Item, Menu, NewCategory, NewItem, NewMenu};

/// One HTTP round trip per call, no retry. Implementations log failures and
/// report them as an empty list or `None`; nothing is raised past this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch_menus(&self) -> Vec<Menu>;
    async fn create_menu(&self, menu: &NewMenu) -> Option<Menu>;
    async fn create_category(&self, menu_id: EntityId, category: &NewCategory) -> Option<Category>;
    async fn create_item(&self, category_id: EntityId, item: &NewItem) -> Option<Item>;
}
