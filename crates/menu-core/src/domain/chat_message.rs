//! Chat log entries and the recommendation endpoint payloads

use chrono::{DateTime, Utc};
use menu_shared::{constants::SUGGESTION_FALLBACK_REPLY, timestamp_id, EntityId, MessageId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    #[serde(rename = "type")]
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: timestamp_id(at),
            sender: Sender::User,
            content: content.into(),
            timestamp: at,
        }
    }

    /// Bot reply to `trigger`. The id is one past the later of the reply
    /// instant and the trigger id, so the two never collide.
    pub fn bot_reply(trigger: MessageId, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: timestamp_id(at).max(trigger) + 1,
            sender: Sender::Bot,
            content: content.into(),
            timestamp: at,
        }
    }

    pub fn bot(id: MessageId, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id,
            sender: Sender::Bot,
            content: content.into(),
            timestamp: at,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Body of `POST /menu-suggestion`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub prompt: String,
    pub menu_id: EntityId,
}

/// Reply of `POST /menu-suggestion`; either field may carry the text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuggestionReply {
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SuggestionReply {
    pub fn into_text(self) -> String {
        self.suggestion
            .filter(|text| !text.is_empty())
            .or(self.message.filter(|text| !text.is_empty()))
            .unwrap_or_else(|| SUGGESTION_FALLBACK_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(value: serde_json::Value) -> String {
        serde_json::from_value::<SuggestionReply>(value).unwrap().into_text()
    }

    #[test]
    fn test_reply_prefers_suggestion() {
        assert_eq!(
            reply(json!({"suggestion": "Try the ramen", "message": "ignored"})),
            "Try the ramen"
        );
        assert_eq!(reply(json!({"message": "Try the pho"})), "Try the pho");
        assert_eq!(reply(json!({"suggestion": "", "message": "Try the pho"})), "Try the pho");
        assert_eq!(reply(json!({})), SUGGESTION_FALLBACK_REPLY);
    }

    #[test]
    fn test_bot_reply_id_never_collides() {
        let now = Utc::now();
        let user = ChatMessage::user("hi", now);
        let bot = ChatMessage::bot_reply(user.id, "hello", now);
        assert_eq!(bot.id, user.id + 1);
        assert_eq!(bot.sender, Sender::Bot);
    }

    #[test]
    fn test_message_serializes_type_field() {
        let at = Utc::now();
        let value = serde_json::to_value(ChatMessage::user("spicy noodles", at)).unwrap();
        assert_eq!(value["type"], "user");
        assert_eq!(value["content"], "spicy noodles");
    }

    #[test]
    fn test_request_shape() {
        let request = SuggestionRequest { prompt: "spicy".into(), menu_id: 7 };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body, json!({"prompt": "spicy", "menuId": 7}));
    }
}
