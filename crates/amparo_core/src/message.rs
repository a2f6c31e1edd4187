use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message in a conversation transcript.
///
/// Immutable once created: messages are appended to the transcript and
/// never edited or deleted in-app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

impl ChatMessage {
    /// Create a user-authored message with a fresh `user-` id.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: format!("user-{}", Uuid::new_v4()),
            text: text.into(),
            is_user: true,
        }
    }

    /// Create a companion-authored message with a fresh `bot-` id.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: format!("bot-{}", Uuid::new_v4()),
            text: text.into(),
            is_user: false,
        }
    }

    /// Create a message with a fixed id (welcome seeding, tests).
    pub fn with_id(id: impl Into<String>, text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_id_prefix() {
        let msg = ChatMessage::user("oi");
        assert!(msg.id.starts_with("user-"));
        assert!(msg.is_user);
        assert_eq!(msg.text, "oi");
    }

    #[test]
    fn test_bot_message_id_prefix() {
        let msg = ChatMessage::bot("olá");
        assert!(msg.id.starts_with("bot-"));
        assert!(!msg.is_user);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ChatMessage::user("x");
        let b = ChatMessage::user("x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_field_name() {
        let msg = ChatMessage::with_id("welcome-1", "Olá!", false);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"isUser\":false"));
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
