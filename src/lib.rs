//! # entitygen: JPA entity generation from Czech prompts
//!
//! Turns a free-text description such as *"Vytvoř entitu Uzivatel se jménem a
//! emailem"* into the source of a Jakarta Persistence entity class.
//!
//! ## Strategies
//!
//! - **Heuristic**: the class name is taken from the word after "třída",
//!   "entita" or "pro"; fields come from a fixed Czech keyword table. Pure and
//!   deterministic.
//! - **Delegated**: the prompt is sent to a Gemini model and the answer is
//!   returned with Markdown fences removed.
//!
//! ## Example
//!
//! ```
//! use entitygen::{analyze_fields, extract_class_name, synthesize};
//!
//! let prompt = "Vytvoř entitu Uzivatel se jménem a emailem";
//! let class_name = extract_class_name(prompt);
//! let fields = analyze_fields(prompt);
//! let source = synthesize(&class_name, &fields, false);
//!
//! assert!(source.contains("public class Uzivatel {"));
//! assert!(source.contains("private String email;"));
//! ```

// Core modules
pub mod entity;
pub mod extraction;

// Source generation
pub mod codegen;

// Generative model boundary and strategies
pub mod model;
pub mod strategy;

pub mod config;
pub mod server;

// Re-export key types
pub use entity::{EntityField, FieldSet, GenerationRequest, SemanticType};
pub use extraction::{analyze_fields, extract_class_name};
pub use codegen::{emit_accessors, synthesize, AccessorPair};
pub use model::{GeminiClient, GenerativeModel, ModelError};
pub use strategy::{
    DelegatedStrategy, EntityGenerator, GenerationError, GenerationStrategy, HeuristicStrategy,
};
pub use config::{AppConfig, ConfigError, GeminiConfig, ServerConfig};
