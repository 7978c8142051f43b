//! Backend-agnostic text generation contract
//!
//! The core only needs `generate(system instruction, user prompt) -> raw text`.
//! The raw text may embed a fenced JSON block; parsing is the caller's job.

use super::script_runner::CliGenerator;
use crate::error::GenerationError;
use crate::models::{BackendKind, GeneratorConfig};
use async_trait::async_trait;
use std::sync::Arc;

/// One generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System instruction (role and output discipline)
    pub system: String,
    /// User prompt
    pub prompt: String,
    /// Completion token budget
    pub max_tokens: u32,
}

impl GenerationRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// External text-generation backend
#[async_trait]
pub trait Generator: Send + Sync {
    /// Short backend name for logs and health output
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Backend used when generation is switched off; every call fails fast so the
/// fallback chain takes over.
#[derive(Debug, Default, Clone)]
pub struct DisabledGenerator;

#[async_trait]
impl Generator for DisabledGenerator {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

/// Build the configured backend
pub fn build_generator(config: &GeneratorConfig) -> anyhow::Result<Arc<dyn Generator>> {
    match config.backend {
        BackendKind::Disabled => Ok(Arc::new(DisabledGenerator)),
        BackendKind::Cli => Ok(Arc::new(CliGenerator::from_config(config))),
        #[cfg(feature = "api-direct")]
        BackendKind::Http => Ok(Arc::new(super::http_client::HttpGenerator::from_config(config)?)),
        #[cfg(not(feature = "api-direct"))]
        BackendKind::Http => anyhow::bail!(
            "HTTP generation backend requires the `api-direct` feature; use backend = \"cli\" or \"disabled\""
        ),
    }
}
