//! # Forza
//!
//! Forza AI - crypto assistant server. Serves the web UI and a JSON API
//! that answers chat messages and explains code through a hosted
//! completion API.
//!
//! ## Modules
//!
//! - [`assistant`]: Chat and code explanation pipelines
//! - [`nexra`]: Client for the hosted completion API
//! - [`market`]: Sample market data and number formatting
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forza::assistant::{ChatOptions, ChatService};
//! use forza::nexra::{NexraClient, NexraConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(NexraClient::new(NexraConfig::default())?);
//!     let chat = ChatService::new(client, ChatOptions::default());
//!
//!     let reply = chat.reply("show me $BTC chart", &[]).await?;
//!     println!("{}", reply.content);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod assistant;
pub mod config;
pub mod market;
pub mod nexra;

pub use assistant::{ChatMessage, ChatService, CodeExplainer, Language};
pub use config::Config;
pub use nexra::{CompletionBackend, NexraClient, NexraConfig};
