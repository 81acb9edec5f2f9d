//! Nexra Integration
//!
//! Client for the hosted chat completion API used by the chat assistant
//! and the code explainer.
//!
//! ## Flow
//!
//! 1. `POST /api/chat/gpt` submits the history and prompt, returning a task id
//! 2. `GET /api/chat/task/{id}` is polled until the task completes or fails
//! 3. The poll loop gives up after the policy's attempt budget

mod client;
mod error;
mod policy;
mod types;

pub use client::{NexraClient, NexraConfig};
pub use error::NexraError;
pub use policy::PollPolicy;
pub use types::{CompletionOutcome, CompletionRequest, NexraMessage, Role, TaskResponse, TaskState};

use async_trait::async_trait;

/// Something that can turn a history and prompt into completion text.
///
/// Implemented by [`NexraClient`]; the assistant services only see this
/// trait.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<NexraMessage>,
        prompt: String,
        policy: &PollPolicy,
    ) -> Result<CompletionOutcome, NexraError>;
}
