//! Text generation backends.
//!
//! One trait, one production implementation (Gemini). Handlers depend on
//! the trait only, so tests can swap in a scripted double.

pub mod client;
pub mod gemini;

pub use client::{GenerationClient, GenerationError, GenerationOptions};
pub use gemini::{ApiKeySource, GeminiClient};

#[cfg(feature = "mock")]
pub use client::MockGenerationClient;
