//! User-visible notifications recorded by the catalog store

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_variant(title, description, NotificationVariant::Default)
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_variant(title, description, NotificationVariant::Destructive)
    }

    fn with_variant(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Utc::now(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
