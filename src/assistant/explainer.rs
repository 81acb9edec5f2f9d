//! Code Explainer
//!
//! Sends a snippet to the completion API with an explanation instruction
//! and returns plain-language text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use super::error::{AssistantError, AssistantResult};
use super::instructions::{code_explainer_instruction, explain_prompt};
use crate::nexra::{CompletionBackend, NexraMessage, PollPolicy};

/// Reply when the task never produced an explanation
pub const INCOMPLETE_EXPLANATION: &str = "Sorry, I couldn't analyze your code. Please try again.";

/// Reply when the completion API could not be reached
pub const FAILED_EXPLANATION: &str =
    "Sorry, there was an error analyzing your code. Please try again later.";

/// Languages offered in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Typescript,
    Python,
    Java,
    Csharp,
    Cpp,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Solidity,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::Javascript,
        Language::Typescript,
        Language::Python,
        Language::Java,
        Language::Csharp,
        Language::Cpp,
        Language::Php,
        Language::Ruby,
        Language::Go,
        Language::Rust,
        Language::Swift,
        Language::Kotlin,
        Language::Solidity,
    ];

    /// Identifier used in prompts and on the wire
    pub fn value(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Csharp => "csharp",
            Language::Cpp => "cpp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Solidity => "solidity",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Csharp => "C#",
            Language::Cpp => "C++",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Solidity => "Solidity",
        }
    }
}

impl FromStr for Language {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.value() == needle || lang.label().to_lowercase() == needle)
            .ok_or_else(|| AssistantError::UnknownLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// Code explanation service
pub struct CodeExplainer {
    backend: Arc<dyn CompletionBackend>,
    policy: PollPolicy,
}

impl CodeExplainer {
    pub fn new(backend: Arc<dyn CompletionBackend>, policy: PollPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Explain `code` written in `language`.
    ///
    /// Only empty input is an error; API trouble turns into one of the
    /// canned explanation texts.
    pub async fn explain(&self, code: &str, language: Language) -> AssistantResult<String> {
        if code.trim().is_empty() {
            return Err(AssistantError::EmptyCode);
        }

        let messages = vec![NexraMessage::assistant(code_explainer_instruction(language.value()))];
        let prompt = explain_prompt(language.value(), code);

        tracing::info!(language = %language, bytes = code.len(), "Explaining code");

        match self.backend.complete(messages, prompt, &self.policy).await {
            Ok(outcome) => Ok(outcome.text_or(INCOMPLETE_EXPLANATION)),
            Err(e) => {
                tracing::error!(error = %e, "Error explaining code");
                Ok(FAILED_EXPLANATION.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nexra::{CompletionOutcome, NexraError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recording {
        outcome: Option<CompletionOutcome>,
        seen: Mutex<Vec<(Vec<NexraMessage>, String)>>,
    }

    #[async_trait]
    impl CompletionBackend for Recording {
        async fn complete(
            &self,
            messages: Vec<NexraMessage>,
            prompt: String,
            _policy: &PollPolicy,
        ) -> Result<CompletionOutcome, NexraError> {
            self.seen.lock().unwrap().push((messages, prompt));
            self.outcome.clone().ok_or(NexraError::Unavailable)
        }
    }

    fn explainer(outcome: Option<CompletionOutcome>) -> (CodeExplainer, Arc<Recording>) {
        let backend = Arc::new(Recording {
            outcome,
            seen: Mutex::new(Vec::new()),
        });
        (CodeExplainer::new(backend.clone(), PollPolicy::explainer()), backend)
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("rust".parse::<Language>().unwrap(), Language::Rust);
        assert_eq!("C#".parse::<Language>().unwrap(), Language::Csharp);
        assert_eq!(" Solidity ".parse::<Language>().unwrap(), Language::Solidity);
        assert!("cobol".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Javascript);
        assert_eq!(Language::ALL.len(), 13);
    }

    #[tokio::test]
    async fn test_explain_sends_instruction_and_prompt() {
        let (explainer, backend) =
            explainer(Some(CompletionOutcome::Completed(Some("It prints one.".into()))));

        let text = explainer.explain("print(1)", Language::Python).await.unwrap();
        assert_eq!(text, "It prints one.");

        let seen = backend.seen.lock().unwrap();
        let (messages, prompt) = &seen[0];
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("(python)"));
        assert_eq!(prompt, "Please explain this python code:\n\nprint(1)");
    }

    #[tokio::test]
    async fn test_explain_rejects_blank_code() {
        let (explainer, backend) = explainer(None);
        assert_eq!(
            explainer.explain("   \n", Language::Rust).await,
            Err(AssistantError::EmptyCode)
        );
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_explain_fallbacks() {
        let (timed_out, _) = explainer(Some(CompletionOutcome::TimedOut));
        assert_eq!(
            timed_out.explain("x", Language::Go).await.unwrap(),
            INCOMPLETE_EXPLANATION
        );

        let (unreachable, _) = explainer(None);
        assert_eq!(
            unreachable.explain("x", Language::Go).await.unwrap(),
            FAILED_EXPLANATION
        );
    }
}
