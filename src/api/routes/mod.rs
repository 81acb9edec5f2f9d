//! API Routes
//!
//! Route handlers organized by functionality.

pub mod chat;
pub mod explain;
pub mod health;
pub mod market;
