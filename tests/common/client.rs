//! HTTP client for end-to-end tests
//!
//! High-level wrapper around reqwest with one method per endpoint.
//! When routes or request formats change, update only this file.

use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 5;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }

    pub async fn analyze_emotions(&self, body: Value) -> Response {
        self.post("/emotion-analyzer", body).await
    }

    pub async fn song_structure(&self, body: Value) -> Response {
        self.post("/song-structure", body).await
    }

    pub async fn poetry_companion(&self, body: Value) -> Response {
        self.post("/poetry-companion", body).await
    }

    pub async fn rhyme_scheme(&self, body: Value) -> Response {
        self.post("/rhyme-scheme", body).await
    }

    async fn post(&self, path: &str, body: Value) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .unwrap_or_else(|e| panic!("POST {path} failed: {e}"))
    }
}
