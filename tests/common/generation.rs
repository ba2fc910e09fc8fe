//! Scripted generation backend for end-to-end tests.
//!
//! Responses are queued up front; each `generate` call pops the next one.
//! Every received instruction is recorded so tests can assert on prompt
//! content without any network involved.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nagma_server::generation::{GenerationClient, GenerationError, GenerationOptions};

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<String, GenerationError>>,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub struct ScriptedGenerationClient {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn push_ok(&self, text: impl Into<String>) -> &Self {
        self.script
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn push_err(&self, err: GenerationError) -> &Self {
        self.script.lock().unwrap().responses.push_back(Err(err));
        self
    }

    /// Instructions received so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.script.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedGenerationClient {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-1"
    }

    async fn generate(
        &self,
        instruction: &str,
        _options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(instruction.to_string());
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for: {instruction}"))
    }
}
