//! Recommendation chat tied to the selected menu
//!
//! State per message: `Idle → AwaitingResponse → Idle`. The loading flag is
//! held by a guard, so it is released on every exit path, including when the
//! pending send future is dropped.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::Utc;
use menu_shared::{
    constants::{DEFAULT_MENU_LABEL, SUGGESTION_ERROR_REPLY},
    EntityId, MessageId,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::events::{ChatEvent, Observers};
use crate::domain::{ChatMessage, SuggestionRequest};
use crate::gateway::SuggestionGateway;

const GREETING_MESSAGE_ID: MessageId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingResponse,
}

struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    fn engage(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag: Arc::clone(flag) }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

pub struct ChatSession<S: SuggestionGateway> {
    gateway: Arc<S>,
    menu_id: Option<EntityId>,
    messages: Vec<ChatMessage>,
    loading: Arc<AtomicBool>,
    observers: Observers<ChatEvent>,
}

impl<S: SuggestionGateway> ChatSession<S> {
    /// Starts a conversation with the assistant greeting.
    pub fn new(gateway: Arc<S>, menu_id: Option<EntityId>, menu_name: Option<&str>) -> Self {
        let greeting = ChatMessage::bot(GREETING_MESSAGE_ID, Self::greeting(menu_name), Utc::now());
        Self {
            gateway,
            menu_id,
            messages: vec![greeting],
            loading: Arc::new(AtomicBool::new(false)),
            observers: Observers::default(),
        }
    }

    pub fn greeting(menu_name: Option<&str>) -> String {
        format!(
            "Hi! I'm your menu assistant. I can help you find the perfect dish from {}. \
             Just ask me about what you're craving! 🍽️",
            menu_name.filter(|name| !name.trim().is_empty()).unwrap_or(DEFAULT_MENU_LABEL)
        )
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ChatEvent> {
        self.observers.subscribe()
    }

    /// Rebinds the conversation to another menu; the log is kept.
    pub fn set_menu(&mut self, menu_id: Option<EntityId>) {
        self.menu_id = menu_id;
    }

    pub fn menu_id(&self) -> Option<EntityId> {
        self.menu_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> ChatState {
        if self.is_loading() {
            ChatState::AwaitingResponse
        } else {
            ChatState::Idle
        }
    }

    /// Sends a prompt and appends the reply. Returns `false` without touching
    /// the log when the text is blank, no menu is bound, or a reply is
    /// already pending.
    pub async fn send_message(&mut self, text: &str) -> bool {
        let prompt = text.trim();
        if prompt.is_empty() {
            debug!("Ignoring empty chat message");
            return false;
        }
        let Some(menu_id) = self.menu_id else {
            debug!("Ignoring chat message: no menu selected");
            return false;
        };
        // `&mut self` rules out overlapping sends; the flag is only still set
        // when an earlier send future was leaked instead of dropped.
        if self.is_loading() {
            debug!("Ignoring chat message: awaiting previous reply");
            return false;
        }

        let user_message = ChatMessage::user(prompt, Utc::now());
        let trigger = user_message.id;
        self.append(user_message);

        let guard = LoadingGuard::engage(&self.loading);
        self.observers.emit(ChatEvent::LoadingChanged(true));

        let request = SuggestionRequest {
            prompt: prompt.to_string(),
            menu_id,
        };
        let content = match self.gateway.suggest(&request).await {
            Ok(reply) => {
                info!("Received menu suggestion for menu {}", menu_id);
                reply.into_text()
            }
            Err(e) => {
                error!("Error getting menu suggestion: {}", e);
                SUGGESTION_ERROR_REPLY.to_string()
            }
        };
        self.append(ChatMessage::bot_reply(trigger, content, Utc::now()));

        drop(guard);
        self.observers.emit(ChatEvent::LoadingChanged(false));
        true
    }

    fn append(&mut self, message: ChatMessage) {
        self.observers.emit(ChatEvent::MessageAppended(message.clone()));
        self.messages.push(message);
    }
}
