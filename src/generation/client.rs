//! Generation client trait definition.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Options for a single generation request.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Request timeout, covering connect and body read.
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

/// Errors that can occur when talking to a generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key is configured")]
    MissingCredential,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

/// Trait for text generation backends.
///
/// Exactly one model call per handler invocation goes through here: the
/// caller builds the full instruction string, the backend returns the
/// model's raw text. Conversation state, retries and streaming live with
/// the caller, not the backend.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// The backend's name (e.g. "gemini").
    fn name(&self) -> &str;

    /// The model being used.
    fn model(&self) -> &str;

    /// Generate text for a single self-contained instruction.
    async fn generate(
        &self,
        instruction: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError>;
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mocked_client_scripts_calls_per_instruction() {
        let mut mock = MockGenerationClient::new();
        mock.expect_model().return_const("mocked-1".to_string());
        mock.expect_generate()
            .withf(|instruction, _| instruction.contains("seed line"))
            .returning(|_, _| Ok("generated text".to_string()));

        assert_eq!(mock.model(), "mocked-1");
        let text = mock
            .generate("prompt around a seed line", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "generated text");
    }

    #[tokio::test]
    async fn mocked_client_can_fail() {
        let mut mock = MockGenerationClient::new();
        mock.expect_generate()
            .returning(|_, _| Err(GenerationError::Timeout));

        let err = mock
            .generate("anything", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Timeout));
    }
}
