//! Application configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables (a `.env` file is loaded first by the binaries).
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 9090
//! gemini:
//!   model: gemini-2.5-flash-lite
//!   timeout_seconds: 20
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Settings for the delegated generation path.
///
/// `api_key` is absent by default; that is a normal state in which the
/// delegated path answers with a diagnostic instead of calling out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl GeminiConfig {
    /// True when a non-blank API key is configured
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Defaults, overlaid by `path` when given, overlaid by the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => Self::load_from_file(p)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (normally the environment).
    ///
    /// Recognized keys: `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`,
    /// `GEMINI_TIMEOUT_SECS`, `HOST`, `PORT`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(url) = lookup("GEMINI_BASE_URL") {
            self.gemini.base_url = url;
        }
        if let Some(secs) = lookup("GEMINI_TIMEOUT_SECS") {
            self.gemini.timeout_seconds = parse_value("GEMINI_TIMEOUT_SECS", &secs)?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_value("PORT", &port)?;
        }

        // Blank keys count as absent
        if !self.gemini.has_credential() {
            self.gemini.api_key = None;
        }

        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_have_no_credential() {
        let config = AppConfig::default();
        assert_eq!(config.gemini.api_key, None);
        assert!(!config.gemini.has_credential());
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("server:\n  port: 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gemini.timeout_seconds, 30);
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = AppConfig::from_yaml("gemini:\n  model: from-file\n  timeout_seconds: 5\n")
            .unwrap()
            .with_overrides(env(&[
                ("GEMINI_API_KEY", "secret"),
                ("GEMINI_TIMEOUT_SECS", "12"),
                ("PORT", "3000"),
            ]))
            .unwrap();

        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.model, "from-file");
        assert_eq!(config.gemini.timeout_seconds, 12);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = AppConfig::default()
            .with_overrides(env(&[("GEMINI_API_KEY", "  ")]))
            .unwrap();
        assert_eq!(config.gemini.api_key, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::default()
            .with_overrides(env(&[("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entitygen.yaml");
        fs::write(&path, "gemini:\n  api_key: abc\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert!(config.gemini.has_credential());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load_from_file("/nonexistent/entitygen.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/entitygen.yaml"));
    }
}
