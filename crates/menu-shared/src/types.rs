//! Common types

use chrono::{DateTime, Utc};

/// Server-assigned numeric identity of menus, categories and items.
pub type EntityId = i64;

/// Locally generated, time-based chat message identity.
pub type MessageId = i64;

/// Millisecond timestamp id for a locally created record.
pub fn timestamp_id(at: DateTime<Utc>) -> MessageId {
    at.timestamp_millis()
}
