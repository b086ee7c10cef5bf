//! Generation strategies and the dispatcher that selects between them.
//!
//! Every strategy answers with text. Failures on the delegated path are
//! rendered as diagnostic comments so a request never ends without a body.

use crate::codegen::synthesize;
use crate::config::GeminiConfig;
use crate::entity::GenerationRequest;
use crate::extraction::{analyze_fields, extract_class_name};
use crate::model::{strip_code_fences, GeminiClient, GenerativeModel, ModelError, SYSTEM_INSTRUCTION};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

/// Payload returned when the delegated path is requested without a key
pub const MISSING_CREDENTIAL_DIAGNOSTIC: &str =
    "// CHYBA: Chybí API klíč! Nastavte GEMINI_API_KEY nebo gemini.api_key v konfiguraci.";

/// Prefix of the payload returned when the model call fails
pub const EXTERNAL_FAILURE_PREFIX: &str = "// Chyba při volání google-genai API: ";

/// Failures of the delegated path
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API key is not configured")]
    MissingCredential,

    #[error("external service failure: {0}")]
    ExternalServiceFailure(String),
}

impl GenerationError {
    /// Render the error as the in-band text returned to the caller
    pub fn to_diagnostic(&self) -> String {
        match self {
            GenerationError::MissingCredential => MISSING_CREDENTIAL_DIAGNOSTIC.to_string(),
            GenerationError::ExternalServiceFailure(message) => {
                format!("{}{}", EXTERNAL_FAILURE_PREFIX, message)
            }
        }
    }
}

impl From<ModelError> for GenerationError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::MissingCredential => GenerationError::MissingCredential,
            other => GenerationError::ExternalServiceFailure(other.to_string()),
        }
    }
}

/// A way of turning a request into entity source text
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produce source text or an in-band diagnostic; never fails
    async fn generate(&self, request: &GenerationRequest) -> String;
}

/// Keyword-driven generation with no external calls
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn generate_source(&self, request: &GenerationRequest) -> String {
        let class_name = extract_class_name(&request.prompt);
        let fields = analyze_fields(&request.prompt);

        tracing::debug!(
            "Heuristic generation: class {} with fields [{}]",
            class_name,
            fields.names().join(", ")
        );

        synthesize(&class_name, &fields, request.generate_accessors)
    }
}

#[async_trait]
impl GenerationStrategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn generate(&self, request: &GenerationRequest) -> String {
        self.generate_source(request)
    }
}

/// Forwards the prompt to a generative model
#[derive(Clone)]
pub struct DelegatedStrategy {
    model: Option<Arc<dyn GenerativeModel>>,
    timeout: Duration,
}

impl DelegatedStrategy {
    /// `model` is `None` when no credential is configured
    pub fn new(model: Option<Arc<dyn GenerativeModel>>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Call the model once, without retrying, and clean up its answer
    pub async fn try_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let model = self.model.as_ref().ok_or(GenerationError::MissingCredential)?;

        tracing::info!("Delegating generation to model {}", model.name());

        let text = tokio::time::timeout(self.timeout, model.generate(SYSTEM_INSTRUCTION, prompt))
            .await
            .map_err(|_| ModelError::Timeout(self.timeout))??;

        Ok(strip_code_fences(&text))
    }
}

#[async_trait]
impl GenerationStrategy for DelegatedStrategy {
    fn name(&self) -> &'static str {
        "delegated"
    }

    async fn generate(&self, request: &GenerationRequest) -> String {
        match self.try_generate(&request.prompt).await {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Delegated generation failed: {}", e);
                e.to_diagnostic()
            }
        }
    }
}

/// Entry point: picks a strategy per request from its `use_ai` flag
#[derive(Clone)]
pub struct EntityGenerator {
    heuristic: HeuristicStrategy,
    delegated: DelegatedStrategy,
}

impl EntityGenerator {
    /// Build from configuration. A missing API key is not an error; the
    /// delegated path then answers with [`MISSING_CREDENTIAL_DIAGNOSTIC`].
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ModelError> {
        let model: Option<Arc<dyn GenerativeModel>> = if config.has_credential() {
            Some(Arc::new(GeminiClient::new(config)?))
        } else {
            tracing::info!("No Gemini API key configured; AI generation disabled");
            None
        };

        Ok(Self::with_model(model, Duration::from_secs(config.timeout_seconds)))
    }

    /// Build around an explicit model (or none)
    pub fn with_model(model: Option<Arc<dyn GenerativeModel>>, timeout: Duration) -> Self {
        Self {
            heuristic: HeuristicStrategy,
            delegated: DelegatedStrategy::new(model, timeout),
        }
    }

    /// Heuristic-only generator
    pub fn heuristic_only() -> Self {
        Self::with_model(None, Duration::from_secs(30))
    }

    pub fn ai_configured(&self) -> bool {
        self.delegated.is_configured()
    }

    pub fn strategy_for(&self, request: &GenerationRequest) -> &dyn GenerationStrategy {
        if request.use_ai {
            &self.delegated
        } else {
            &self.heuristic
        }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> String {
        let strategy = self.strategy_for(request);
        let span = tracing::info_span!(
            "generate",
            request_id = %Uuid::new_v4(),
            strategy = strategy.name()
        );

        async move {
            tracing::info!(
                "Generating entity (accessors: {}, prompt: {} chars)",
                request.generate_accessors,
                request.prompt.chars().count()
            );
            strategy.generate(request).await
        }
        .instrument(span)
        .await
    }
}
