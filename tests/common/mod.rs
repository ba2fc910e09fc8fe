//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{ScriptedGenerationClient, TestClient, TestServer};
//! use reqwest::StatusCode;
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn test_rhyme_scheme() {
//!     let server = TestServer::spawn(ScriptedGenerationClient::new()).await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.rhyme_scheme(json!({"lyrics": "a\nb"})).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod generation;
mod server;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use generation::ScriptedGenerationClient;
#[allow(unused_imports)]
pub use server::TestServer;
