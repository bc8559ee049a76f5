//! Prompt → structured result protocol shared by every AI endpoint.
//!
//! `invoke` performs exactly one model call, extracts the JSON span from the
//! raw text, checks required top-level fields and decodes into the caller's
//! type. Every failure is an [`InvocationError`]; call sites turn those into
//! their static fallback payloads with [`resolve`].

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::llm_client::extract::JsonExtractor;
use crate::llm_client::{LlmError, ModelRequest, TextModel};

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("model credential is not configured")]
    CredentialMissing,

    #[error("model call failed: {0}")]
    ModelCallFailed(#[from] LlmError),

    #[error("model response contained no JSON object")]
    NoJsonFound,

    #[error("model response JSON is malformed: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("model response is missing required fields: {}", .0.join(", "))]
    ShapeMismatch(Vec<String>),
}

/// Required top-level fields of an expected result. Presence check only:
/// nested types and enum values are not re-validated here.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedShape {
    pub name: &'static str,
    pub required: &'static [&'static str],
}

impl ExpectedShape {
    /// Lists required fields that are absent or `null`.
    pub fn missing_fields(&self, value: &Value) -> Vec<String> {
        let object = value.as_object();
        self.required
            .iter()
            .filter(|field| {
                object
                    .and_then(|o| o.get(**field))
                    .map_or(true, Value::is_null)
            })
            .map(|field| field.to_string())
            .collect()
    }
}

/// Which hosted model to call and the credential to call it with.
#[derive(Clone)]
pub struct ModelConfig {
    pub model: String,
    pub api_key: Option<String>,
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Clone)]
pub struct StructuredPromptInvoker {
    model: Arc<dyn TextModel>,
    config: ModelConfig,
    extractor: Arc<dyn JsonExtractor>,
}

impl StructuredPromptInvoker {
    pub fn new(
        model: Arc<dyn TextModel>,
        config: ModelConfig,
        extractor: Arc<dyn JsonExtractor>,
    ) -> Self {
        Self {
            model,
            config,
            extractor,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.api_key().is_some()
    }

    pub async fn invoke<T: DeserializeOwned>(
        &self,
        prompt: &str,
        shape: &ExpectedShape,
    ) -> Result<T, InvocationError> {
        debug_assert!(!prompt.trim().is_empty(), "prompt must not be empty");

        let api_key = self.api_key().ok_or(InvocationError::CredentialMissing)?;

        debug!(
            "Invoking {} for {} (prompt {} chars)",
            self.config.model,
            shape.name,
            prompt.len()
        );
        let text = self
            .model
            .generate(ModelRequest {
                model: &self.config.model,
                api_key,
                prompt,
            })
            .await?;
        debug!(
            "Model returned {} chars for {}: {}",
            text.len(),
            shape.name,
            text.chars().take(200).collect::<String>()
        );

        let span = self
            .extractor
            .extract(&text)
            .filter(|s| !s.is_empty())
            .ok_or(InvocationError::NoJsonFound)?;

        let value: Value = serde_json::from_str(span).map_err(InvocationError::MalformedJson)?;

        let missing = shape.missing_fields(&value);
        if !missing.is_empty() {
            return Err(InvocationError::ShapeMismatch(missing));
        }

        serde_json::from_value(value).map_err(InvocationError::MalformedJson)
    }
}

/// A call-site result: either the model's answer or the substituted fallback.
#[derive(Debug)]
pub struct Resolved<T> {
    pub value: T,
    pub used_fallback: bool,
}

/// Applies the fail-open policy: any invocation error becomes the fallback.
pub fn resolve<T>(
    call_site: &str,
    result: Result<T, InvocationError>,
    fallback: impl FnOnce(&InvocationError) -> T,
) -> Resolved<T> {
    match result {
        Ok(value) => {
            info!("{call_site}: model result accepted");
            Resolved {
                value,
                used_fallback: false,
            }
        }
        Err(e) => {
            match &e {
                InvocationError::CredentialMissing => {
                    warn!("{call_site}: no model credential configured, using fallback")
                }
                other => warn!("{call_site}: {other}, using fallback"),
            }
            Resolved {
                value: fallback(&e),
                used_fallback: true,
            }
        }
    }
}
