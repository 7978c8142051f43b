//! Failure modes of the generation backend
//!
//! None of these ever escapes a public navigator operation: the reasoning
//! adapter and the paragraph completer recover from every variant.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation backend is disabled")]
    Disabled,

    #[error("Generation backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Failed to reach generation backend: {0}")]
    Transport(String),

    #[error("Generation backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generation command failed: {0}")]
    Process(String),

    #[error("Generation backend returned an empty response")]
    EmptyResponse,

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("Backend response contained no mapping candidates")]
    NoCandidates,
}

impl GenerationError {
    /// The backend answered, but with nothing usable. Recovery may re-run the
    /// rule matcher instead of reporting an error.
    pub fn is_soft(&self) -> bool {
        matches!(self, GenerationError::EmptyResponse | GenerationError::NoCandidates)
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(e: serde_json::Error) -> Self {
        GenerationError::MalformedResponse(e.to_string())
    }
}
