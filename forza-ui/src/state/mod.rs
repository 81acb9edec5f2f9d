//! State Management
//!
//! Global signals, the login flag and the chat model.

pub mod auth;
pub mod chat;
pub mod global;

