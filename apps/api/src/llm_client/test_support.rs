//! Test doubles for the model transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::extract::FirstLastBrace;
use crate::llm_client::invoker::{ModelConfig, StructuredPromptInvoker};
use crate::llm_client::{LlmError, ModelRequest, TextModel};

/// Replies with a fixed text and records every prompt it receives.
#[derive(Clone)]
pub struct ScriptedModel {
    reply: Arc<str>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedModel {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Arc::from(reply),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, request: ModelRequest<'_>) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(request.prompt.to_string());
        Ok(self.reply.to_string())
    }
}

/// Always fails like an overloaded upstream.
#[derive(Clone, Default)]
pub struct FailingModel {
    calls: Arc<Mutex<usize>>,
}

impl FailingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextModel for FailingModel {
    async fn generate(&self, _request: ModelRequest<'_>) -> Result<String, LlmError> {
        *self.calls.lock().unwrap() += 1;
        Err(LlmError::Api {
            status: 503,
            message: "The model is overloaded".to_string(),
        })
    }
}

/// Fails the test if any call reaches the transport.
pub struct UnreachableModel;

#[async_trait]
impl TextModel for UnreachableModel {
    async fn generate(&self, request: ModelRequest<'_>) -> Result<String, LlmError> {
        panic!("model must not be called (prompt: {})", request.prompt);
    }
}

pub fn invoker_with(
    model: impl TextModel + 'static,
    api_key: Option<&str>,
) -> StructuredPromptInvoker {
    StructuredPromptInvoker::new(
        Arc::new(model),
        ModelConfig {
            model: "test-model".to_string(),
            api_key: api_key.map(str::to_string),
        },
        Arc::new(FirstLastBrace),
    )
}
