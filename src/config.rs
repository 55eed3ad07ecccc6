//! Loading and validation of the intent repository
//!
//! The repository is checked once, when it is loaded. After that the matcher
//! can rely on every intent having at least one response and no empty pattern.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::types::ChatbotConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid intent repository JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the `default` message is missing or blank")]
    MissingDefault,

    #[error("intent #{index} ({label}) has no responses")]
    EmptyResponses { index: usize, label: String },

    #[error("intent #{index} ({label}) has a blank pattern")]
    EmptyPattern { index: usize, label: String },
}

impl ChatbotConfig {
    /// Parse and validate a repository from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ChatbotConfig = serde_json::from_str(json)?;
        config.validate()?;
        info!(
            intents = config.intents.len(),
            fallback = config.fallback_responses().map_or(0, |r| r.len()),
            "intent repository loaded"
        );
        Ok(config)
    }

    /// Read, parse and validate a repository file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check the structural contract the matcher depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default.trim().is_empty() {
            return Err(ConfigError::MissingDefault);
        }

        for (index, intent) in self.intents.iter().enumerate() {
            if intent.responses.is_empty() {
                return Err(ConfigError::EmptyResponses {
                    index,
                    label: intent.label(),
                });
            }
            // A blank pattern is a substring of every input.
            if intent.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::EmptyPattern {
                    index,
                    label: intent.label(),
                });
            }
            if intent.patterns.is_empty() {
                warn!(index, label = %intent.label(), "intent has no patterns and can never match");
            }
        }

        if let Some(fallback) = &self.fallback {
            if fallback.responses.is_empty() && !fallback.quick_replies.is_empty() {
                warn!("fallback has quick replies but no responses; the default message will be used");
            }
        }

        Ok(())
    }
}
