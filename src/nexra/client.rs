//! Nexra REST API Client
//!
//! Submits a completion task and polls its status until it finishes,
//! fails, or the poll policy runs out of attempts.

use async_trait::async_trait;
use reqwest::Client;

use super::error::NexraError;
use super::policy::PollPolicy;
use super::types::{CompletionOutcome, CompletionRequest, ErrorBody, SubmitResponse, TaskResponse, TaskState};
use super::CompletionBackend;

/// Nexra REST API client
pub struct NexraClient {
    client: Client,
    config: NexraConfig,
}

/// Configuration for the Nexra client
#[derive(Debug, Clone)]
pub struct NexraConfig {
    /// Base URL (e.g., "https://nexra.aryahcr.cc")
    pub base_url: String,
    /// Model name sent with every request
    pub model: String,
    /// Ask the API for markdown output
    pub markdown: bool,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for NexraConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nexra.aryahcr.cc".to_string(),
            model: "GPT-4".to_string(),
            markdown: false,
            request_timeout_ms: 15_000,
        }
    }
}

impl NexraClient {
    /// Create a new client with the given configuration
    pub fn new(config: NexraConfig) -> Result<Self, NexraError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &NexraConfig {
        &self.config
    }

    fn submit_url(&self) -> String {
        format!("{}/api/chat/gpt", self.config.base_url.trim_end_matches('/'))
    }

    fn task_url(&self, task_id: &str) -> String {
        format!(
            "{}/api/chat/task/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(task_id)
        )
    }

    /// Build a request with the configured model and markdown flag
    pub fn request(&self, messages: Vec<super::NexraMessage>, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            messages,
            prompt: prompt.into(),
            model: self.config.model.clone(),
            markdown: self.config.markdown,
        }
    }

    /// Submit a completion task, returning its id
    pub async fn submit(&self, request: &CompletionRequest) -> Result<String, NexraError> {
        let response = self
            .client
            .post(self.submit_url())
            .json(request)
            .send()
            .await
            .map_err(NexraError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<ErrorBody> = response.json().await.ok();
            let message = body
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("status {}", status.as_u16()));
            tracing::error!(status = status.as_u16(), %message, "Nexra submit rejected");
            return Err(NexraError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let submitted: SubmitResponse = response.json().await?;
        match submitted.id {
            Some(id) if !id.is_empty() => {
                tracing::debug!(task_id = %id, "Nexra task submitted");
                Ok(id)
            }
            _ => {
                tracing::error!("Nexra submit response carried no task id");
                Err(NexraError::MissingTaskId)
            }
        }
    }

    /// Fetch the current state of a task
    pub async fn task_state(&self, task_id: &str) -> Result<TaskState, NexraError> {
        let response = self
            .client
            .get(self.task_url(task_id))
            .send()
            .await
            .map_err(NexraError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NexraError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let task: TaskResponse = response.json().await?;
        let error = task.error.clone();
        let state = TaskState::from(task);
        if let TaskState::Failed(ref reason) = state {
            tracing::warn!(task_id, %reason, ?error, "Nexra task ended without a result");
        }
        Ok(state)
    }

    /// Poll a submitted task according to `policy`.
    ///
    /// Non-2xx status responses are logged, followed by the policy's error
    /// backoff, and count as a used attempt. Transport errors abort.
    pub async fn poll(&self, task_id: &str, policy: &PollPolicy) -> Result<CompletionOutcome, NexraError> {
        for attempt in 1..=policy.max_attempts {
            tokio::time::sleep(policy.delay_before(attempt)).await;

            match self.task_state(task_id).await {
                Ok(TaskState::Pending) => continue,
                Ok(TaskState::Completed(text)) => {
                    tracing::debug!(task_id, attempt, "Nexra task completed");
                    return Ok(CompletionOutcome::Completed(text));
                }
                Ok(TaskState::Failed(reason)) => return Ok(CompletionOutcome::Failed(reason)),
                Err(NexraError::ApiError { status, message }) => {
                    tracing::error!(task_id, attempt, status, %message, "Nexra poll rejected");
                    tokio::time::sleep(policy.error_backoff).await;
                }
                Err(e) => return Err(e),
            }
        }

        if policy.final_check {
            match self.task_state(task_id).await {
                Ok(TaskState::Completed(Some(text))) => {
                    return Ok(CompletionOutcome::Completed(Some(text)));
                }
                Ok(_) => {}
                Err(e) => tracing::error!(task_id, error = %e, "Nexra final status check failed"),
            }
        }

        tracing::error!(task_id, attempts = policy.max_attempts, "Nexra task timed out");
        Ok(CompletionOutcome::TimedOut)
    }
}

#[async_trait]
impl CompletionBackend for NexraClient {
    async fn complete(
        &self,
        messages: Vec<super::NexraMessage>,
        prompt: String,
        policy: &PollPolicy,
    ) -> Result<CompletionOutcome, NexraError> {
        let request = self.request(messages, prompt);
        let task_id = self.submit(&request).await?;
        self.poll(&task_id, policy).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nexra::NexraMessage;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Polls needed before the stub reports completion
    #[derive(Clone)]
    struct Stub {
        polls: Arc<AtomicU32>,
        complete_after: u32,
        fail_first_poll: bool,
    }

    async fn submit_handler(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
        if body["prompt"] == "reject" {
            return (StatusCode::TOO_MANY_REQUESTS, Json(json!({"error": "slow down"})));
        }
        if body["prompt"] == "no-id" {
            return (StatusCode::OK, Json(json!({"status": "queued"})));
        }
        (StatusCode::OK, Json(json!({"id": "task 1", "status": "pending"})))
    }

    async fn task_handler(Path(id): Path<String>, State(stub): State<Stub>) -> impl IntoResponse {
        let n = stub.polls.fetch_add(1, Ordering::SeqCst) + 1;
        if id != "task 1" {
            return (StatusCode::OK, Json(json!({"status": "not_found"})));
        }
        if stub.fail_first_poll && n == 1 {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})));
        }
        if n >= stub.complete_after {
            (StatusCode::OK, Json(json!({"status": "completed", "gpt": "Bitcoin is a coin."})))
        } else {
            (StatusCode::OK, Json(json!({"status": "pending"})))
        }
    }

    async fn spawn_stub(stub: Stub) -> String {
        let router = Router::new()
            .route("/api/chat/gpt", post(submit_handler))
            .route("/api/chat/task/:id", get(task_handler))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> NexraClient {
        NexraClient::new(NexraConfig {
            base_url,
            ..Default::default()
        })
        .unwrap()
    }

    fn fast_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy {
            max_attempts,
            interval: Duration::from_millis(5),
            slow_interval: None,
            slow_after: 0,
            error_backoff: Duration::from_millis(5),
            final_check: false,
        }
    }

    fn stub(complete_after: u32) -> Stub {
        Stub {
            polls: Arc::new(AtomicU32::new(0)),
            complete_after,
            fail_first_poll: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = NexraConfig::default();
        assert_eq!(config.base_url, "https://nexra.aryahcr.cc");
        assert_eq!(config.model, "GPT-4");
        assert!(!config.markdown);
    }

    #[test]
    fn test_task_url_encodes_id() {
        let client = client_for("https://nexra.example/".to_string());
        assert_eq!(
            client.task_url("a b/c"),
            "https://nexra.example/api/chat/task/a%20b%2Fc"
        );
        assert_eq!(client.submit_url(), "https://nexra.example/api/chat/gpt");
    }

    #[tokio::test]
    async fn test_complete_after_pending_polls() {
        let stub = stub(3);
        let polls = Arc::clone(&stub.polls);
        let client = client_for(spawn_stub(stub).await);

        let outcome = client
            .complete(vec![NexraMessage::assistant("sys")], "hi".to_string(), &fast_policy(10))
            .await
            .unwrap();

        assert_eq!(outcome, CompletionOutcome::Completed(Some("Bitcoin is a coin.".into())));
        assert_eq!(polls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_times_out_when_attempts_run_out() {
        let stub = stub(100);
        let polls = Arc::clone(&stub.polls);
        let client = client_for(spawn_stub(stub).await);

        let outcome = client
            .complete(vec![], "hi".to_string(), &fast_policy(4))
            .await
            .unwrap();

        assert_eq!(outcome, CompletionOutcome::TimedOut);
        assert_eq!(polls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_final_check_rescues_late_completion() {
        let stub = stub(4);
        let client = client_for(spawn_stub(stub).await);

        let mut policy = fast_policy(3);
        policy.final_check = true;

        let outcome = client.complete(vec![], "hi".to_string(), &policy).await.unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed(Some("Bitcoin is a coin.".into())));
    }

    #[tokio::test]
    async fn test_poll_error_status_keeps_polling() {
        let mut stub = stub(2);
        stub.fail_first_poll = true;
        let client = client_for(spawn_stub(stub).await);

        let outcome = client
            .complete(vec![], "hi".to_string(), &fast_policy(5))
            .await
            .unwrap();

        assert_eq!(outcome, CompletionOutcome::Completed(Some("Bitcoin is a coin.".into())));
    }

    #[tokio::test]
    async fn test_unknown_task_fails() {
        let client = client_for(spawn_stub(stub(1)).await);

        let outcome = client.poll("other", &fast_policy(5)).await.unwrap();
        assert_eq!(outcome, CompletionOutcome::Failed("not_found".into()));
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let client = client_for(spawn_stub(stub(1)).await);
        let request = client.request(vec![], "reject");

        match client.submit(&request).await {
            Err(NexraError::ApiError { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_without_id() {
        let client = client_for(spawn_stub(stub(1)).await);
        let request = client.request(vec![], "no-id");

        assert!(matches!(client.submit(&request).await, Err(NexraError::MissingTaskId)));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let result = client.complete(vec![], "hi".to_string(), &fast_policy(1)).await;
        assert!(result.is_err());
    }
}
