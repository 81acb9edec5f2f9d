//! Nexra Wire Types
//!
//! Request and response bodies of the hosted chat completion API.

use serde::{Deserialize, Serialize};

/// Role of a message in the completion history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message of the completion history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NexraMessage {
    pub role: Role,
    pub content: String,
}

impl NexraMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat/gpt`
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<NexraMessage>,
    pub prompt: String,
    pub model: String,
    pub markdown: bool,
}

/// Reply to a task submission
#[derive(Debug, Deserialize)]
pub(crate) struct SubmitResponse {
    #[serde(default)]
    pub id: Option<String>,
}

/// Error body the API sometimes returns on non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /api/chat/task/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub gpt: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Interpreted state of a submitted task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    /// Still running (any status the API does not finish with)
    Pending,
    /// Finished; the text may be missing
    Completed(Option<String>),
    /// `error` or `not_found`
    Failed(String),
}

impl From<TaskResponse> for TaskState {
    fn from(resp: TaskResponse) -> Self {
        match resp.status.as_str() {
            "completed" => TaskState::Completed(resp.gpt),
            "error" | "not_found" => TaskState::Failed(resp.status),
            _ => TaskState::Pending,
        }
    }
}

/// Result of submitting and polling a task to the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Completed(Option<String>),
    Failed(String),
    TimedOut,
}

impl CompletionOutcome {
    /// Completed text, or `fallback` for every other outcome
    pub fn text_or(self, fallback: &str) -> String {
        match self {
            CompletionOutcome::Completed(Some(text)) => text,
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(json: &str) -> TaskState {
        serde_json::from_str::<TaskResponse>(json).unwrap().into()
    }

    #[test]
    fn test_task_states() {
        assert_eq!(
            task(r#"{"status":"completed","gpt":"hi"}"#),
            TaskState::Completed(Some("hi".to_string()))
        );
        assert_eq!(task(r#"{"status":"completed"}"#), TaskState::Completed(None));
        assert_eq!(
            task(r#"{"status":"not_found"}"#),
            TaskState::Failed("not_found".to_string())
        );
        assert_eq!(
            task(r#"{"status":"error","error":{"code":1}}"#),
            TaskState::Failed("error".to_string())
        );
        assert_eq!(task(r#"{"status":"pending"}"#), TaskState::Pending);
        assert_eq!(task(r#"{}"#), TaskState::Pending);
    }

    #[test]
    fn test_request_serialization() {
        let req = CompletionRequest {
            messages: vec![NexraMessage::assistant("sys"), NexraMessage::user("hi")],
            prompt: "hi".to_string(),
            model: "GPT-4".to_string(),
            markdown: false,
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["messages"][0]["role"], "assistant");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["model"], "GPT-4");
        assert_eq!(value["markdown"], false);
    }

    #[test]
    fn test_outcome_fallback() {
        assert_eq!(
            CompletionOutcome::Completed(Some("answer".into())).text_or("fallback"),
            "answer"
        );
        assert_eq!(CompletionOutcome::Completed(None).text_or("fallback"), "fallback");
        assert_eq!(CompletionOutcome::TimedOut.text_or("fallback"), "fallback");
    }
}
