//! Chat Model
//!
//! Browser-side copies of the server's chat message and coin card types.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub const WELCOME_ID: &str = "welcome";

const WELCOME_TEXT: &str =
    "Hello! I'm your Forza AI assistant. How can I help you with cryptocurrency today?";

/// How long a copy button shows its confirmation
pub const COPIED_RESET_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<CoinSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Price,
    Analysis,
}

impl ChartKind {
    pub fn footnote(&self) -> &'static str {
        match self {
            ChartKind::Analysis => {
                "Technical indicators suggest monitoring for potential entry points. Volatility remains high."
            }
            ChartKind::Price => "Data shown is from the last 24 hours. Chart updates every 15 minutes.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub height: f64,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    pub rsi: u32,
    pub rsi_positive: bool,
    pub macd: f64,
    pub macd_positive: bool,
    pub volume: f64,
    pub ma50: f64,
    pub ma200: f64,
    /// `BUY` or `HOLD`
    pub signal: String,
    pub signal_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshot {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub kind: ChartKind,
    pub bars: Vec<ChartBar>,
    pub indicators: TechnicalIndicators,
}

impl CoinSnapshot {
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }

    pub fn change_label(&self) -> String {
        let sign = if self.is_up() { "+" } else { "" };
        format!("{}{:.2}%", sign, self.change_24h)
    }
}

static NEXT_LOCAL_ID: AtomicU64 = AtomicU64::new(1);

impl ChatMessage {
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_ID.to_string(),
            sender: Sender::Ai,
            content: WELCOME_TEXT.to_string(),
            timestamp: Utc::now(),
            coin: None,
        }
    }

    /// A message typed in this browser
    pub fn user(content: impl Into<String>) -> Self {
        let seq = NEXT_LOCAL_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("local-{}-{}", Utc::now().timestamp_millis(), seq),
            sender: Sender::User,
            content: content.into(),
            timestamp: Utc::now(),
            coin: None,
        }
    }

    /// An AI bubble produced without the server, e.g. after a network error
    pub fn local_ai(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            ..Self::user(content)
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local time like `3:07 PM`
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%-I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ids_are_unique() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("b");
        assert_ne!(a.id, b.id);
        assert!(a.is_user());
        assert!(!ChatMessage::local_ai("x").is_user());
    }

    #[test]
    fn test_server_message_parses() {
        let json = r#"{
            "id": "3f1c",
            "sender": "ai",
            "content": "Here's the price chart for $BTC:",
            "timestamp": "2024-05-01T15:07:00Z",
            "coin": {
                "symbol": "BTC", "name": "BTC Coin", "price": 412.5, "change_24h": -3.2,
                "kind": "price",
                "bars": [{"height": 42.0, "positive": true}],
                "indicators": {
                    "rsi": 55, "rsi_positive": true, "macd": -0.4, "macd_positive": false,
                    "volume": 1200000.0, "ma50": 400.0, "ma200": 420.0,
                    "signal": "HOLD", "signal_positive": false
                }
            }
        }"#;

        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        let coin = msg.coin.unwrap();
        assert_eq!(coin.kind, ChartKind::Price);
        assert_eq!(coin.change_label(), "-3.20%");
        assert!(!coin.is_up());
    }

    #[test]
    fn test_welcome() {
        let msg = ChatMessage::welcome();
        assert_eq!(msg.id, WELCOME_ID);
        assert_eq!(msg.sender, Sender::Ai);
    }
}
