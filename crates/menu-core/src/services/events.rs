//! Change notification for store observers
//!
//! Each subscriber owns an unbounded receiver; senders whose receiver was
//! dropped are pruned on the next emit.

use menu_shared::EntityId;
use tokio::sync::mpsc;

use super::notification::Notification;
use crate::domain::ChatMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// Whole tree replaced by a fetch
    Loaded { menu_count: usize },
    SelectionChanged {
        menu_id: Option<EntityId>,
        category_id: Option<EntityId>,
    },
    MenuAdded { menu_id: Option<EntityId> },
    CategoryAdded {
        menu_id: EntityId,
        category_id: Option<EntityId>,
    },
    ItemSaved {
        category_id: EntityId,
        item_id: Option<EntityId>,
        updated: bool,
    },
    ItemDeleted { category_id: EntityId, item_id: EntityId },
    Notified(Notification),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    MessageAppended(ChatMessage),
    LoadingChanged(bool),
}

pub struct Observers<E> {
    senders: Vec<mpsc::UnboundedSender<E>>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self { senders: Vec::new() }
    }
}

impl<E: Clone> Observers<E> {
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<E> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.push(tx);
        rx
    }

    pub fn emit(&mut self, event: E) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
