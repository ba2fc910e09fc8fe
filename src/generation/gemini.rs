//! Gemini generation backend.
//!
//! Talks to the `generateContent` endpoint of the Google Generative
//! Language API. The API key is resolved per request, so env changes and
//! rotating command-sourced tokens are picked up without a restart.

use super::client::{GenerationClient, GenerationError, GenerationOptions};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Timeout for api_key_command execution.
const API_KEY_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the API key for authentication.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    /// Read from an environment variable on every request.
    Env(String),
    /// Static API key from configuration.
    Static(String),
    /// Shell command that outputs the API key (for rotating tokens).
    Command(String),
}

impl ApiKeySource {
    /// Get the current API key, executing the command if necessary.
    async fn get_key(&self) -> Result<String, GenerationError> {
        match self {
            ApiKeySource::Env(var) => match std::env::var(var) {
                Ok(key) if !key.trim().is_empty() => Ok(key),
                _ => Err(GenerationError::MissingCredential),
            },
            ApiKeySource::Static(key) => Ok(key.clone()),
            ApiKeySource::Command(cmd) => {
                debug!(command = %cmd, "Fetching API key via command");

                let result = tokio::time::timeout(
                    API_KEY_COMMAND_TIMEOUT,
                    Command::new("sh").arg("-c").arg(cmd).output(),
                )
                .await;

                let output = match result {
                    Ok(Ok(output)) => output,
                    Ok(Err(e)) => {
                        warn!(command = %cmd, error = %e, "api_key_command failed to execute");
                        return Err(GenerationError::Connection(format!(
                            "Failed to execute api_key_command: {}",
                            e
                        )));
                    }
                    Err(_) => {
                        warn!(command = %cmd, "api_key_command timed out");
                        return Err(GenerationError::Timeout);
                    }
                };

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    warn!(command = %cmd, stderr = %stderr, "api_key_command failed");
                    return Err(GenerationError::Connection(format!(
                        "api_key_command failed with status {}: {}",
                        output.status, stderr
                    )));
                }

                let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if key.is_empty() {
                    warn!(command = %cmd, "api_key_command returned empty key");
                    return Err(GenerationError::MissingCredential);
                }

                Ok(key)
            }
        }
    }
}

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key_source: ApiKeySource,
}

impl GeminiClient {
    /// Create a client against the public Google endpoint with the
    /// default model, keyed from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            DEFAULT_MODEL,
            ApiKeySource::Env("GEMINI_API_KEY".to_string()),
        )
    }

    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key_source: ApiKeySource,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key_source,
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        instruction: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: instruction.to_string(),
                }],
            }],
        };

        debug!(
            model = %self.model,
            instruction_len = instruction.len(),
            "Sending generateContent request to Gemini"
        );

        let api_key = self.api_key_source.get_key().await?;

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let gemini_response: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })?;

        let candidate = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| {
                GenerationError::InvalidResponse("No candidates in Gemini response".to_string())
            })?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "Candidate contains no text parts".to_string(),
            ));
        }

        debug!(response_len = text.len(), "Received Gemini response");

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
