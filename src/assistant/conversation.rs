//! Conversation Model
//!
//! Chat messages as the UI shows them, and their mapping onto the
//! completion API's history format.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::chart::CoinSnapshot;
use crate::nexra::NexraMessage;

/// Id of the greeting every conversation starts with
pub const WELCOME_ID: &str = "welcome";

pub const WELCOME_TEXT: &str =
    "Hello! I'm your Forza AI assistant. How can I help you with cryptocurrency today?";

/// Reply when the completion task never produced text
pub const INCOMPLETE_REPLY: &str = "Sorry, I couldn't process your request at the moment.";

/// Reply when the completion API could not be reached
pub const CONNECTION_REPLY: &str =
    "Sorry, I'm having trouble connecting to my knowledge base. Please try again later.";

/// Canned prompts offered in the chat sidebar
pub const TOPIC_SUGGESTIONS: [&str; 8] = [
    "What is Forza AI?",
    "How to buy Bitcoin?",
    "Explain DeFi to a beginner",
    "What are NFTs?",
    "Current market trends",
    "Crypto portfolio advice",
    "What are gas fees?",
    "How to stake crypto?",
];

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<CoinSnapshot>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content.into(), None)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Sender::Ai, content.into(), None)
    }

    /// AI message carrying a coin card
    pub fn chart(content: impl Into<String>, coin: CoinSnapshot) -> Self {
        Self::new(Sender::Ai, content.into(), Some(coin))
    }

    pub fn welcome() -> Self {
        Self {
            id: WELCOME_ID.to_string(),
            ..Self::ai(WELCOME_TEXT)
        }
    }

    fn new(sender: Sender, content: String, coin: Option<CoinSnapshot>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            content,
            timestamp: Utc::now(),
            coin,
        }
    }

    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_ID
    }

    /// Local time as shown under a bubble, e.g. `3:07 PM`
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%-I:%M %p").to_string()
    }
}

/// History handed to the completion API: the system instructions first,
/// then every prior message except the greeting.
pub fn completion_history(instructions: &str, history: &[ChatMessage]) -> Vec<NexraMessage> {
    std::iter::once(NexraMessage::assistant(instructions))
        .chain(
            history
                .iter()
                .filter(|msg| !msg.is_welcome())
                .map(|msg| match msg.sender {
                    Sender::Ai => NexraMessage::assistant(msg.content.clone()),
                    Sender::User => NexraMessage::user(msg.content.clone()),
                }),
        )
        .collect()
}
