//! Generative-model boundary.
//!
//! The delegated generation path talks to a model only through
//! [`GenerativeModel`], so tests can substitute a deterministic stub.

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use gemini::GeminiClient;
pub use prompt::{strip_code_fences, SYSTEM_INSTRUCTION};

/// Errors from a generative model call
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("API key is not configured")]
    MissingCredential,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// A text-generating model: system instruction and user prompt in, text out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model identifier, used in logs
    fn name(&self) -> &str;

    async fn generate(&self, system_instruction: &str, prompt: &str) -> ModelResult<String>;
}
