//! Assistant Error Types

use thiserror::Error;

/// Input the assistant refuses to process
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("code cannot be empty")]
    EmptyCode,

    #[error("unsupported language: {0}")]
    UnknownLanguage(String),
}

pub type AssistantResult<T> = Result<T, AssistantError>;
