//! # Menu Core - Domain Module
//!
//! Catalog entities (menu → category → item), chat messages, and the drafts
//! and payloads exchanged with the remote API.

pub mod meal_time;
pub mod age_group;
pub mod menu;
pub mod category;
pub mod item;
pub mod chat_message;
mod lenient;

// Re-export all entities and enums
pub use meal_time::MealTime;
pub use age_group::AgeGroup;
pub use menu::{Menu, MenuDraft, NewMenu};
pub use category::{display_order, Category, CategoryDraft, NewCategory};
pub use item::{Item, ItemDraft, NewItem};
pub use chat_message::{ChatMessage, Sender, SuggestionReply, SuggestionRequest};
