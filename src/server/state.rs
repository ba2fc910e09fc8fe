use axum::extract::FromRef;

use std::sync::Arc;
use std::time::Instant;

use crate::generation::GenerationClient;

use super::ServerConfig;

pub type GuardedGenerationClient = Arc<dyn GenerationClient>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub generation: GuardedGenerationClient,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, generation: GuardedGenerationClient) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            generation,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for GuardedGenerationClient {
    fn from_ref(input: &ServerState) -> Self {
        input.generation.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
