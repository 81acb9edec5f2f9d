//! Chat Service
//!
//! The chat message pipeline: validate, detect intent, then either
//! synthesize a coin card or ask the completion API.

use std::sync::Arc;
use std::time::Duration;

use super::chart::{generate_snapshot, ChartKind};
use super::conversation::{completion_history, ChatMessage, CONNECTION_REPLY, INCOMPLETE_REPLY};
use super::error::{AssistantError, AssistantResult};
use super::instructions::CRYPTO_BOT_INSTRUCTIONS;
use super::intent::{detect_intent, Intent};
use crate::nexra::{CompletionBackend, PollPolicy};

/// Tunables for [`ChatService`]
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Poll policy for completion tasks
    pub policy: PollPolicy,
    /// Pause before a coin card is returned
    pub chart_delay: Duration,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            policy: PollPolicy::chat(),
            chart_delay: Duration::from_millis(1500),
        }
    }
}

/// Chat assistant
pub struct ChatService {
    backend: Arc<dyn CompletionBackend>,
    options: ChatOptions,
}

impl ChatService {
    pub fn new(backend: Arc<dyn CompletionBackend>, options: ChatOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    /// Produce the AI reply to `text`.
    ///
    /// `history` holds the messages shown before `text` was sent; it may
    /// include the greeting, which is never forwarded.
    pub async fn reply(&self, text: &str, history: &[ChatMessage]) -> AssistantResult<ChatMessage> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        match detect_intent(text) {
            Intent::Chart { symbol } => Ok(self.chart_reply(&symbol, ChartKind::Price).await),
            Intent::Analysis { symbol } => Ok(self.chart_reply(&symbol, ChartKind::Analysis).await),
            Intent::Conversation => Ok(self.completion_reply(text, history).await),
        }
    }

    async fn chart_reply(&self, symbol: &str, kind: ChartKind) -> ChatMessage {
        // ThreadRng is !Send, so it must be gone before the await
        let coin = {
            let mut rng = rand::rng();
            generate_snapshot(symbol, kind, &mut rng)
        };

        tracing::info!(symbol, ?kind, "Serving mock chart");
        tokio::time::sleep(self.options.chart_delay).await;

        ChatMessage::chart(kind.caption(symbol), coin)
    }

    async fn completion_reply(&self, text: &str, history: &[ChatMessage]) -> ChatMessage {
        let messages = completion_history(CRYPTO_BOT_INSTRUCTIONS, history);

        tracing::info!(history_len = messages.len(), "Forwarding chat message to completion API");

        let content = match self
            .backend
            .complete(messages, text.to_string(), &self.options.policy)
            .await
        {
            Ok(outcome) => outcome.text_or(INCOMPLETE_REPLY),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching AI response");
                CONNECTION_REPLY.to_string()
            }
        };

        ChatMessage::ai(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::conversation::Sender;
    use crate::nexra::{CompletionOutcome, NexraError, NexraMessage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        outcome: Option<CompletionOutcome>,
        calls: Mutex<Vec<(Vec<NexraMessage>, String)>>,
    }

    #[async_trait]
    impl CompletionBackend for Scripted {
        async fn complete(
            &self,
            messages: Vec<NexraMessage>,
            prompt: String,
            _policy: &PollPolicy,
        ) -> Result<CompletionOutcome, NexraError> {
            self.calls.lock().unwrap().push((messages, prompt));
            self.outcome.clone().ok_or(NexraError::Timeout)
        }
    }

    fn service(outcome: Option<CompletionOutcome>) -> (ChatService, Arc<Scripted>) {
        let backend = Arc::new(Scripted {
            outcome,
            calls: Mutex::new(Vec::new()),
        });
        let options = ChatOptions {
            chart_delay: Duration::from_millis(1),
            ..Default::default()
        };
        (ChatService::new(backend.clone(), options), backend)
    }

    #[tokio::test]
    async fn test_chart_request_skips_backend() {
        let (svc, backend) = service(None);

        let reply = svc.reply("show me $btc chart", &[]).await.unwrap();

        assert_eq!(reply.sender, Sender::Ai);
        assert_eq!(reply.content, "Here's the price chart for $BTC:");
        let coin = reply.coin.expect("coin card");
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.kind, ChartKind::Price);
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analysis_request() {
        let (svc, _) = service(None);

        let reply = svc.reply("display $sol technical analysis", &[]).await.unwrap();
        assert_eq!(reply.content, "Here's the technical analysis for $SOL:");
        assert_eq!(reply.coin.unwrap().kind, ChartKind::Analysis);
    }

    #[tokio::test]
    async fn test_conversation_uses_backend() {
        let (svc, backend) = service(Some(CompletionOutcome::Completed(Some("Use an exchange.".into()))));
        let history = vec![ChatMessage::welcome(), ChatMessage::user("hi"), ChatMessage::ai("hello")];

        let reply = svc.reply("How to buy Bitcoin?", &history).await.unwrap();
        assert_eq!(reply.content, "Use an exchange.");
        assert!(reply.coin.is_none());

        let calls = backend.calls.lock().unwrap();
        let (messages, prompt) = &calls[0];
        assert_eq!(prompt, "How to buy Bitcoin?");
        // instructions + two prior messages, greeting dropped
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, CRYPTO_BOT_INSTRUCTIONS);
    }

    #[tokio::test]
    async fn test_incomplete_and_failed_replies() {
        let (timed_out, _) = service(Some(CompletionOutcome::TimedOut));
        assert_eq!(timed_out.reply("hi", &[]).await.unwrap().content, INCOMPLETE_REPLY);

        let (not_found, _) = service(Some(CompletionOutcome::Failed("not_found".into())));
        assert_eq!(not_found.reply("hi", &[]).await.unwrap().content, INCOMPLETE_REPLY);

        let (down, _) = service(None);
        assert_eq!(down.reply("hi", &[]).await.unwrap().content, CONNECTION_REPLY);
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let (svc, _) = service(None);
        assert_eq!(svc.reply("  ", &[]).await, Err(AssistantError::EmptyMessage));
    }
}
