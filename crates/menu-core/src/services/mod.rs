//! Domain services (client-side state management)

pub mod events;
pub mod notification;
pub mod catalog_store;
pub mod chat_session;

pub use events::{CatalogEvent, ChatEvent, Observers};
pub use notification::{Notification, NotificationVariant};
pub use catalog_store::CatalogStore;
pub use chat_session::{ChatSession, ChatState};
