//! Configuration for the diff engine.
//!
//! [`DiffConfig`] is plain data: serde-friendly, cheap to clone, and checked
//! once by [`DiffConfig::validate`] (which [`DiffEngine::new`](crate::DiffEngine::new)
//! calls). It can also be loaded from YAML:
//!
//! ```yaml
//! version: 1
//! normalize_unicode: true
//! max_table_cells: 4000000
//! use_parallel: false
//! ```
//!
//! Omitted fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DiffError;

/// Errors that can occur when loading a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(#[from] DiffError),
}

/// Settings for a [`DiffEngine`](crate::DiffEngine).
///
/// The default configuration reproduces the plain
/// [`compute_segments`](crate::compute_segments) /
/// [`compute_difference_rate`](crate::compute_difference_rate) behaviour
/// exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiffConfig {
    /// Configuration schema version. Must be >= 1.
    pub version: u32,

    /// Compare tokens by their NFKC form.
    ///
    /// Tokens that differ only by compatibility form, such as full-width
    /// brackets (`"（"` / `"("`), the ideographic space, or half-width
    /// katakana, then align as `Same`. Tokenization still runs on the
    /// original text and segments carry it unchanged; only the equality test
    /// changes.
    pub normalize_unicode: bool,

    /// Upper bound on LCS table cells, `(|A|+1) * (|B|+1)`.
    ///
    /// `None` disables the guard. When set, oversized comparisons fail with
    /// [`DiffError::InputTooLarge`] before anything is allocated.
    pub max_table_cells: Option<usize>,

    /// Compute the pairs of a multi-variant comparison on the rayon pool.
    pub use_parallel: bool,
}

impl DiffConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC comparison of tokens.
    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// Bound the LCS table size. `None` removes the bound.
    pub fn with_max_table_cells(mut self, max_table_cells: Option<usize>) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    /// Enable or disable parallel variant comparison.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), DiffError> {
        if self.version < 1 {
            return Err(DiffError::InvalidConfig(format!(
                "version must be >= 1 (got {})",
                self.version
            )));
        }
        if self.max_table_cells == Some(0) {
            return Err(DiffError::InvalidConfig(
                "max_table_cells must be >= 1 when set".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML configuration string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DiffConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            max_table_cells: None,
            use_parallel: false,
        }
    }
}
