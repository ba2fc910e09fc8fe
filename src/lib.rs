//! Nagma Songwriting Assistant Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod analysis;
pub mod config;
pub mod error;
pub mod generation;
pub mod lyrics;
pub mod prompt;
pub mod server;
pub mod voice;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use generation::{GeminiClient, GenerationClient, GenerationError};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
