//! Console application state
//!
//! Owns the catalog store and the chat session, turns commands into store
//! intents, and keeps the chat bound to the selected menu by listening to
//! the store's change events.

use std::sync::Arc;

use menu_core::domain::{CategoryDraft, ItemDraft, MenuDraft};
use menu_core::gateway::{CatalogGateway, SuggestionGateway};
use menu_core::services::{CatalogEvent, CatalogStore, ChatSession};
use menu_core::DomainError;
use menu_shared::EntityId;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::command::{self, Command, CommandError, Fields};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    Home,
    #[default]
    Customer,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<C: CatalogGateway, S: SuggestionGateway> {
    catalog_gateway: Arc<C>,
    suggestion_gateway: Arc<S>,
    restaurant_id: EntityId,
    initial_view: View,
    view: View,
    store: CatalogStore<C>,
    chat: ChatSession<S>,
    events: mpsc::UnboundedReceiver<CatalogEvent>,
    status: Vec<String>,
}

impl<C: CatalogGateway, S: SuggestionGateway> App<C, S> {
    pub fn new(
        catalog_gateway: Arc<C>,
        suggestion_gateway: Arc<S>,
        restaurant_id: EntityId,
        view: View,
    ) -> Self {
        let mut store = CatalogStore::new(Arc::clone(&catalog_gateway), restaurant_id);
        let events = store.subscribe();
        let chat = ChatSession::new(Arc::clone(&suggestion_gateway), None, None);
        Self {
            catalog_gateway,
            suggestion_gateway,
            restaurant_id,
            initial_view: view,
            view,
            store,
            chat,
            events,
            status: Vec::new(),
        }
    }

    /// Loads the catalog and opens the chat on the selected menu.
    pub async fn start(&mut self) {
        self.store.load().await;
        let menu = self.store.selected_menu();
        self.chat = ChatSession::new(
            Arc::clone(&self.suggestion_gateway),
            menu.and_then(|m| m.id),
            menu.map(|m| m.name.as_str()),
        );
        self.drain_events();
    }

    /// Discards every piece of state and loads from scratch.
    pub async fn reload(&mut self) {
        info!("Reloading application state");
        *self = Self::new(
            Arc::clone(&self.catalog_gateway),
            Arc::clone(&self.suggestion_gateway),
            self.restaurant_id,
            self.initial_view,
        );
        self.start().await;
    }

    pub fn show(&mut self, view: View) {
        self.view = view;
    }

    /// Status lines produced since the last call.
    pub fn take_status(&mut self) -> Vec<String> {
        std::mem::take(&mut self.status)
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        debug!("Handling command {:?}", command);
        match command {
            Command::Quit => return Flow::Quit,
            Command::Help => {
                self.status.push(command::HELP.to_string());
                self.status.push(render::tag_hint());
            }
            Command::Show(view) => self.show(view),
            Command::Reload => self.reload().await,
            Command::SelectMenu(menu_id) => {
                let result = self.store.select_menu(menu_id);
                self.report(result);
            }
            Command::SelectCategory(category_id) => {
                let result = self.store.select_category(category_id);
                self.report(result);
            }
            Command::AddMenu(fields) => self.add_menu(&fields).await,
            Command::AddCategory(fields) => self.add_category(&fields).await,
            Command::AddItem(fields) => self.save_item(None, &fields).await,
            Command::EditItem(item_id, fields) => self.save_item(Some(item_id), &fields).await,
            Command::DeleteItem(item_id) => self.delete_item(item_id),
            Command::Ask(question) => self.ask(&question).await,
        }
        self.drain_events();
        Flow::Continue
    }

    pub fn render(&self, hour: u32) -> String {
        let body = match self.view {
            View::Home => render::home(),
            View::Customer => format!(
                "{}\n{}",
                render::customer(&self.store, hour),
                render::chat(&self.chat)
            ),
            View::Admin => render::admin(&self.store),
        };
        format!("{}\n\n{}", render::nav_bar(self.view), body)
    }

    async fn add_menu(&mut self, fields: &Fields) {
        let mut draft = MenuDraft::default();
        if let Err(e) = command::apply_menu_fields(&mut draft, fields) {
            return self.reject(e);
        }
        let result = self.store.add_menu(&draft).await;
        self.report(result);
    }

    async fn add_category(&mut self, fields: &Fields) {
        let Some(menu_id) = self.store.selected_menu_id() else {
            return self.status.push("Select a menu first with `menu <id>`.".to_string());
        };
        let mut draft = CategoryDraft::default();
        if let Err(e) = command::apply_category_fields(&mut draft, fields) {
            return self.reject(e);
        }
        let result = self.store.add_category(menu_id, &draft).await;
        self.report(result);
    }

    /// Creates an item, or with `item_id` edits the existing one starting
    /// from its current values.
    async fn save_item(&mut self, item_id: Option<EntityId>, fields: &Fields) {
        let Some(category_id) = self.store.selected_category_id() else {
            return self.status.push("Select a category first with `category <id>`.".to_string());
        };

        let mut draft = match item_id {
            None => ItemDraft::default(),
            Some(item_id) => {
                let existing = self
                    .store
                    .selected_category()
                    .and_then(|category| category.item(item_id));
                match existing {
                    Some(item) => ItemDraft::from_item(item),
                    None => {
                        let missing = DomainError::ItemNotFound { category_id, item_id };
                        return self.report::<()>(Err(missing));
                    }
                }
            }
        };
        if let Err(e) = command::apply_item_fields(&mut draft, fields) {
            return self.reject(e);
        }

        let result = self.store.add_or_update_item(category_id, &draft, item_id).await;
        self.report(result);
    }

    fn delete_item(&mut self, item_id: EntityId) {
        let Some(category_id) = self.store.selected_category_id() else {
            return self.status.push("Select a category first with `category <id>`.".to_string());
        };
        let result = self.store.delete_item(category_id, item_id);
        self.report(result);
    }

    async fn ask(&mut self, question: &str) {
        if self.chat.menu_id().is_none() {
            return self.status.push("Select a menu to ask the assistant about.".to_string());
        }
        if self.chat.send_message(question).await {
            if let Some(reply) = self.chat.messages().last() {
                self.status.push(format!("Assistant: {}", reply.content));
            }
        }
    }

    fn reject(&mut self, error: CommandError) {
        self.status.push(error.to_string());
    }

    /// Errors already surfaced as a notification are not repeated.
    fn report<T>(&mut self, result: Result<T, DomainError>) {
        match result {
            Ok(_) => {}
            Err(DomainError::RemoteFailure(_)) | Err(DomainError::InvalidPrice(_)) => {}
            Err(e) if e.is_validation() => self.status.push(format!("Not saved: {}", e)),
            Err(e) => self.status.push(e.to_string()),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                CatalogEvent::SelectionChanged { menu_id, .. }
                    if menu_id != self.chat.menu_id() =>
                {
                    debug!("Chat follows menu selection {:?}", menu_id);
                    self.chat.set_menu(menu_id);
                }
                CatalogEvent::Notified(notification) => {
                    self.status.push(render::notification(&notification));
                }
                _ => {}
            }
        }
    }
}
