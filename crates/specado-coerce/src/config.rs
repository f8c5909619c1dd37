//! Validation configuration
//!
//! Settings are resolved in layers, later ones winning:
//! - Default values
//! - A configuration file (YAML/JSON), see [`ValidationConfig::from_file`]
//! - Environment variables, see [`ValidationConfig::apply_env`]
//!
//! [`ValidationConfig::load`] applies all three.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`ValidationConfig::max_depth`]
pub const MAX_DEPTH_ENV: &str = "SPECADO_COERCE_MAX_DEPTH";

/// Environment variable overriding [`ValidationConfig::union_errors`]
pub const UNION_ERRORS_ENV: &str = "SPECADO_COERCE_UNION_ERRORS";

/// Default bound on nesting depth of validated input
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How a union reports that none of its alternatives matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnionErrorReporting {
    /// Generic "no union variant matched" message
    Summary,
    /// Generic message followed by every alternative's own error
    #[default]
    Detailed,
}

impl std::str::FromStr for UnionErrorReporting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(UnionErrorReporting::Summary),
            "detailed" => Ok(UnionErrorReporting::Detailed),
            other => Err(Error::configuration(format!(
                "unknown union error reporting '{}', expected 'summary' or 'detailed'",
                other
            ))),
        }
    }
}

/// Settings shared by every validator in one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum number of nested descents (fields, extras, elements)
    pub max_depth: usize,

    /// Union failure reporting style
    pub union_errors: UnionErrorReporting,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            union_errors: UnionErrorReporting::default(),
        }
    }
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the union failure reporting style
    pub fn with_union_errors(mut self, union_errors: UnionErrorReporting) -> Self {
        self.union_errors = union_errors;
        self
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config = if matches!(extension, Some("yaml") | Some("yml")) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        log::debug!("Loaded validation config from {:?}", path);
        Ok(config)
    }

    /// File settings overridden by environment variables
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            self.max_depth = raw.trim().parse::<usize>().map_err(|e| Error::Configuration {
                message: format!("invalid {} value '{}'", MAX_DEPTH_ENV, raw),
                source: Some(anyhow::Error::new(e)),
            })?;
        }

        if let Some(raw) = lookup(UNION_ERRORS_ENV) {
            self.union_errors = raw.parse()?;
        }

        Ok(())
    }
}
