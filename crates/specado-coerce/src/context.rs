//! Per-descent validation state
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::ValidationConfig;
use crate::error::{ValidationError, ValidationResult};

/// Validation context threaded through recursive calls
///
/// Contexts are never mutated; each descent builds a new child with an
/// extended path and an incremented depth.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    /// Current location, e.g. `.people[0].name`
    pub path: String,
    /// Number of descents from the root
    pub depth: usize,
    /// Settings for this invocation
    pub config: &'a ValidationConfig,
}

impl<'a> ValidationContext<'a> {
    /// Create a root context at the caller-supplied path
    pub fn new<P: Into<String>>(path: P, config: &'a ValidationConfig) -> Self {
        Self {
            path: path.into(),
            depth: 0,
            config,
        }
    }

    /// Path of a mapping key below this context
    pub fn key_path<S: AsRef<str>>(&self, key: S) -> String {
        format!("{}.{}", self.path, key.as_ref())
    }

    /// Path of a sequence index below this context
    pub fn index_path(&self, index: usize) -> String {
        format!("{}[{}]", self.path, index)
    }

    /// Create a child context for a mapping key
    pub fn child<S: AsRef<str>>(&self, key: S) -> ValidationResult<Self> {
        self.descend(self.key_path(key))
    }

    /// Create a child context for a sequence index
    pub fn child_index(&self, index: usize) -> ValidationResult<Self> {
        self.descend(self.index_path(index))
    }

    fn descend(&self, path: String) -> ValidationResult<Self> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            return Err(ValidationError::depth_exceeded(path, self.config.max_depth));
        }

        Ok(Self {
            path,
            depth,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_child_paths() {
        let config = ValidationConfig::default();
        let root = ValidationContext::new("", &config);
        let child = root.child("people").unwrap();
        assert_eq!(child.path, ".people");

        let indexed = child.child_index(2).unwrap().child("name").unwrap();
        assert_eq!(indexed.path, ".people[2].name");
        assert_eq!(indexed.depth, 3);
    }

    #[test]
    fn test_root_path_is_kept() {
        let config = ValidationConfig::default();
        let root = ValidationContext::new("$", &config);
        assert_eq!(root.child("a").unwrap().path, "$.a");
        assert_eq!(root.child_index(0).unwrap().path, "$[0]");
    }

    #[test]
    fn test_depth_limit() {
        let config = ValidationConfig::default().with_max_depth(1);
        let root = ValidationContext::new("", &config);
        let child = root.child("a").unwrap();
        let err = child.child_index(0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DepthExceeded);
        assert_eq!(err.path, ".a[0]");
    }
}
