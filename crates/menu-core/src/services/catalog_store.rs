// ============================================================================
// Menu Core - Catalog Store
// File: crates/menu-core/src/services/catalog_store.rs
// ============================================================================
//! In-memory menu → category → item tree mirrored from the remote catalog,
//! plus the current selection.
//!
//! Creates go through the gateway and adopt the server's copy. Item edits and
//! deletes have no remote endpoint and are applied locally only.

use std::sync::Arc;

use menu_shared::EntityId;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::events::{CatalogEvent, Observers};
use super::notification::Notification;
use crate::domain::{display_order, Category, CategoryDraft, Item, ItemDraft, Menu, MenuDraft};
use crate::error::DomainError;
use crate::gateway::CatalogGateway;

pub struct CatalogStore<G: CatalogGateway> {
    gateway: Arc<G>,
    restaurant_id: EntityId,
    menus: Vec<Menu>,
    selected_menu_id: Option<EntityId>,
    selected_category_id: Option<EntityId>,
    notifications: Vec<Notification>,
    observers: Observers<CatalogEvent>,
}

impl<G: CatalogGateway> CatalogStore<G> {
    pub fn new(gateway: Arc<G>, restaurant_id: EntityId) -> Self {
        Self {
            gateway,
            restaurant_id,
            menus: Vec::new(),
            selected_menu_id: None,
            selected_category_id: None,
            notifications: Vec::new(),
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CatalogEvent> {
        self.observers.subscribe()
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn menu(&self, menu_id: EntityId) -> Option<&Menu> {
        self.menus.iter().find(|m| m.has_id(menu_id))
    }

    pub fn selected_menu_id(&self) -> Option<EntityId> {
        self.selected_menu_id
    }

    pub fn selected_category_id(&self) -> Option<EntityId> {
        self.selected_category_id
    }

    pub fn selected_menu(&self) -> Option<&Menu> {
        self.selected_menu_id.and_then(|id| self.menu(id))
    }

    pub fn selected_category(&self) -> Option<&Category> {
        let category_id = self.selected_category_id?;
        self.selected_menu()?.category(category_id)
    }

    /// Locates a category anywhere in the tree together with its menu.
    pub fn find_category(&self, category_id: EntityId) -> Option<(&Menu, &Category)> {
        self.menus
            .iter()
            .find_map(|menu| menu.category(category_id).map(|category| (menu, category)))
    }

    pub fn categories_in_display_order(&self, menu_id: EntityId) -> Vec<&Category> {
        self.menu(menu_id)
            .map(|menu| display_order(&menu.categories))
            .unwrap_or_default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Replaces the whole tree with the remote catalog.
    ///
    /// Takes `&mut self`, so two loads on one store cannot interleave and a
    /// stale response can never overwrite a newer one.
    pub async fn load(&mut self) -> usize {
        debug!("Fetching menus for restaurant {}", self.restaurant_id);
        let menus = self.gateway.fetch_menus().await;
        let menu_count = menus.len();
        info!("Loaded {} menus", menu_count);

        self.menus = menus;
        self.reconcile_selection();
        if self.selected_menu_id.is_none() {
            self.selected_menu_id = self.menus.iter().find_map(|m| m.id);
        }

        self.observers.emit(CatalogEvent::Loaded { menu_count });
        self.emit_selection();
        menu_count
    }

    pub fn select_menu(&mut self, menu_id: EntityId) -> Result<(), DomainError> {
        if self.menu(menu_id).is_none() {
            warn!("Ignoring selection of unknown menu {}", menu_id);
            return Err(DomainError::MenuNotFound(menu_id));
        }

        self.selected_menu_id = Some(menu_id);
        self.reconcile_selection();
        self.emit_selection();
        Ok(())
    }

    /// Selects a category of the currently selected menu.
    pub fn select_category(&mut self, category_id: EntityId) -> Result<(), DomainError> {
        let in_selected_menu = self
            .selected_menu()
            .is_some_and(|menu| menu.category(category_id).is_some());
        if !in_selected_menu {
            warn!("Ignoring selection of unknown category {}", category_id);
            return Err(DomainError::CategoryNotFound(category_id));
        }

        self.selected_category_id = Some(category_id);
        self.emit_selection();
        Ok(())
    }

    pub async fn add_menu(&mut self, draft: &MenuDraft) -> Result<Menu, DomainError> {
        if let Err(e) = draft.check() {
            warn!("Rejected menu draft: {}", e);
            return Err(e);
        }

        let payload = draft.to_payload(self.restaurant_id);
        let created = self.gateway.create_menu(&payload).await;
        let Some(mut menu) = created else {
            self.notify(Notification::failure(
                "Failed to create menu",
                "The menu could not be saved. Please try again.",
            ));
            return Err(DomainError::RemoteFailure("create menu"));
        };

        menu.categories.clear();
        info!("Menu created: {:?} ({})", menu.id, menu.name);

        self.menus.push(menu.clone());
        self.selected_menu_id = menu.id;
        self.selected_category_id = None;

        self.observers.emit(CatalogEvent::MenuAdded { menu_id: menu.id });
        self.emit_selection();
        self.notify(Notification::info(
            "Menu created",
            format!("\"{}\" has been added successfully.", menu.name),
        ));
        Ok(menu)
    }

    pub async fn add_category(
        &mut self,
        menu_id: EntityId,
        draft: &CategoryDraft,
    ) -> Result<Category, DomainError> {
        if let Err(e) = draft.check() {
            warn!("Rejected category draft: {}", e);
            return Err(e);
        }

        let payload = match self.menu(menu_id) {
            Some(menu) => draft.to_payload(menu.next_category_position()),
            None => return Err(DomainError::MenuNotFound(menu_id)),
        };

        let created = self.gateway.create_category(menu_id, &payload).await;
        let Some(mut category) = created else {
            self.notify(Notification::failure(
                "Failed to add category",
                "The category could not be saved. Please try again.",
            ));
            return Err(DomainError::RemoteFailure("create category"));
        };

        category.items.clear();

        let Some(menu) = self.menus.iter_mut().find(|m| m.has_id(menu_id)) else {
            error!("Menu {} disappeared while creating a category", menu_id);
            return Err(DomainError::MenuNotFound(menu_id));
        };
        menu.categories.push(category.clone());
        let menu_name = menu.name.clone();
        info!("Category added: {:?} ({}) to menu {}", category.id, category.name, menu_id);

        self.observers.emit(CatalogEvent::CategoryAdded {
            menu_id,
            category_id: category.id,
        });
        self.notify(Notification::info(
            "Category added",
            format!("\"{}\" has been added to {}.", category.name, menu_name),
        ));
        Ok(category)
    }

    /// Creates an item through the gateway, or, with `editing_id`, replaces
    /// the matching item locally.
    pub async fn add_or_update_item(
        &mut self,
        category_id: EntityId,
        draft: &ItemDraft,
        editing_id: Option<EntityId>,
    ) -> Result<Item, DomainError> {
        let price = match draft.check() {
            Ok(price) => price,
            Err(e) => {
                warn!("Rejected item draft: {}", e);
                if let DomainError::InvalidPrice(_) = e {
                    self.notify(Notification::failure(
                        "Invalid price",
                        "Please enter a valid price.",
                    ));
                }
                return Err(e);
            }
        };

        if self.find_category(category_id).is_none() {
            return Err(DomainError::CategoryNotFound(category_id));
        }

        let (item, updated) = match editing_id {
            Some(item_id) => (self.replace_item(category_id, item_id, draft, price)?, true),
            None => (self.create_item(category_id, draft, price).await?, false),
        };

        self.observers.emit(CatalogEvent::ItemSaved {
            category_id,
            item_id: item.id,
            updated,
        });
        let (title, verb) = if updated {
            ("Item updated", "updated")
        } else {
            ("Item added", "added")
        };
        self.notify(Notification::info(
            title,
            format!("\"{}\" has been {} successfully.", item.name, verb),
        ));
        Ok(item)
    }

    /// Local removal only.
    pub fn delete_item(
        &mut self,
        category_id: EntityId,
        item_id: EntityId,
    ) -> Result<Item, DomainError> {
        let category = self
            .category_mut(category_id)
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        let position = category
            .items
            .iter()
            .position(|item| item.has_id(item_id))
            .ok_or(DomainError::ItemNotFound { category_id, item_id })?;
        let removed = category.items.remove(position);
        info!("Item {} deleted from category {}", item_id, category_id);

        self.observers.emit(CatalogEvent::ItemDeleted { category_id, item_id });
        self.notify(Notification::info("Item deleted", "The menu item has been removed."));
        Ok(removed)
    }

    async fn create_item(
        &mut self,
        category_id: EntityId,
        draft: &ItemDraft,
        price: f64,
    ) -> Result<Item, DomainError> {
        let payload = draft.to_payload(price);
        let created = self.gateway.create_item(category_id, &payload).await;
        let Some(item) = created else {
            self.notify(Notification::failure(
                "Failed to save item",
                "The item could not be saved. Please try again.",
            ));
            return Err(DomainError::RemoteFailure("create item"));
        };

        let category = self
            .category_mut(category_id)
            .ok_or(DomainError::CategoryNotFound(category_id))?;
        category.items.push(item.clone());
        info!("Item added: {:?} ({}) to category {}", item.id, item.name, category_id);
        Ok(item)
    }

    fn replace_item(
        &mut self,
        category_id: EntityId,
        item_id: EntityId,
        draft: &ItemDraft,
        price: f64,
    ) -> Result<Item, DomainError> {
        let category = self
            .category_mut(category_id)
            .ok_or(DomainError::CategoryNotFound(category_id))?;
        let slot = category
            .items
            .iter_mut()
            .find(|item| item.has_id(item_id))
            .ok_or(DomainError::ItemNotFound { category_id, item_id })?;

        *slot = draft.apply_to(slot, price);
        info!("Item {} updated locally in category {}", item_id, category_id);
        Ok(slot.clone())
    }

    fn category_mut(&mut self, category_id: EntityId) -> Option<&mut Category> {
        self.menus
            .iter_mut()
            .find_map(|menu| menu.category_mut(category_id))
    }

    /// Drops selections that no longer point into the tree.
    fn reconcile_selection(&mut self) {
        if self.selected_menu().is_none() {
            self.selected_menu_id = None;
        }
        if self.selected_category().is_none() {
            self.selected_category_id = None;
        }
    }

    fn emit_selection(&mut self) {
        self.observers.emit(CatalogEvent::SelectionChanged {
            menu_id: self.selected_menu_id,
            category_id: self.selected_category_id,
        });
    }

    fn notify(&mut self, notification: Notification) {
        if notification.is_failure() {
            error!("{}: {}", notification.title, notification.description);
        }
        self.observers.emit(CatalogEvent::Notified(notification.clone()));
        self.notifications.push(notification);
    }
}
