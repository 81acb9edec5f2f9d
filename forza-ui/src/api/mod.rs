//! API Layer

pub mod client;

pub use client::*;
