//! Configuration of the shingle rewriter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShinglerError};
use crate::rewrite::r#trait::{QueryRewriter, RewriterFactory};
use crate::rewrite::shingle::ShingleRewriter;

/// Configuration for [`ShingleRewriter`].
///
/// Read from JSON as `{ "acceptGeneratedTerms": true }`. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShingleRewriterConfig {
    /// Whether terms generated by earlier rewriters may be shingled.
    #[serde(default)]
    pub accept_generated_terms: bool,
}

impl ShingleRewriterConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether generated terms may be shingled.
    pub fn accept_generated_terms(mut self, accept: bool) -> Self {
        self.accept_generated_terms = accept;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ShinglerError::config(format!("Failed to parse shingle rewriter config: {e}"))
        })
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShinglerError::config(format!(
                "Failed to read shingle rewriter config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }
}

/// Creates [`ShingleRewriter`]s for a rewrite chain.
#[derive(Debug, Clone)]
pub struct ShingleRewriterFactory {
    id: String,
    config: ShingleRewriterConfig,
}

impl ShingleRewriterFactory {
    pub fn new<S: Into<String>>(id: S, config: ShingleRewriterConfig) -> Self {
        ShingleRewriterFactory {
            id: id.into(),
            config,
        }
    }

    pub fn config(&self) -> &ShingleRewriterConfig {
        &self.config
    }
}

impl RewriterFactory for ShingleRewriterFactory {
    fn id(&self) -> &str {
        &self.id
    }

    fn create_rewriter(&self) -> Box<dyn QueryRewriter> {
        Box::new(ShingleRewriter::from_config(&self.config))
    }
}
