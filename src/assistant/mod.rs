//! Chat Assistant
//!
//! Everything between a user's text and the AI reply.
//!
//! ## Architecture
//!
//! - **intent**: regex classification of chart / analysis requests
//! - **chart**: random coin cards for those requests
//! - **conversation**: message model and completion history mapping
//! - **service**: the chat pipeline
//! - **explainer**: the code explanation pipeline

pub mod chart;
pub mod conversation;
mod error;
pub mod explainer;
pub mod instructions;
pub mod intent;
mod service;

pub use chart::{generate_snapshot, ChartBar, ChartKind, CoinSnapshot, Signal, TechnicalIndicators};
pub use conversation::{completion_history, ChatMessage, Sender, TOPIC_SUGGESTIONS, WELCOME_ID};
pub use error::{AssistantError, AssistantResult};
pub use explainer::{CodeExplainer, Language};
pub use intent::{detect_intent, Intent};
pub use service::{ChatOptions, ChatService};
