//! Per-square configuration.
//!
//! [`SquareConfig`] derives serde so a host can embed it in its own
//! configuration file; missing fields fall back to the defaults below.
//!
//! | Field | Default |
//! |-------|---------|
//! | `max_width` | `None` (no cap) |
//! | `hash_family` | `None` (any hasher) |
//! | `parallel_roots` | `true` (only effective with the `parallel` feature) |

use serde::{Deserialize, Serialize};

use crate::hash::HashFamily;
use crate::merkle::MerkleHasher;

/// Errors raised while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_width must be at least 1")]
    ZeroMaxWidth,
}

/// Limits and hashing knobs applied to a single [`DataSquare`](crate::DataSquare).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareConfig {
    /// Optional upper bound on the width, checked at construction and on
    /// extension.
    pub max_width: Option<usize>,
    /// Hash family pinned by a host configuration file. When set, a square
    /// built with a hasher of another family is rejected.
    pub hash_family: Option<HashFamily>,
    /// Compute per-axis roots on the rayon pool.
    pub parallel_roots: bool,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            max_width: None,
            hash_family: None,
            parallel_roots: true,
        }
    }
}

impl SquareConfig {
    /// Returns a builder initialised with the defaults.
    pub fn builder() -> SquareConfigBuilder {
        SquareConfigBuilder::new()
    }

    /// Default configuration pinned to the hash family of `H`.
    pub fn for_hasher<H: MerkleHasher>() -> Self {
        Self {
            hash_family: Some(H::hash_family()),
            ..Self::default()
        }
    }

    /// Largest width a square may reach; `usize::MAX` when uncapped.
    pub fn width_limit(&self) -> usize {
        self.max_width.unwrap_or(usize::MAX)
    }

    /// Checks the configuration for values no square could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == Some(0) {
            return Err(ConfigError::ZeroMaxWidth);
        }
        Ok(())
    }
}

/// Builder used to assemble a validated [`SquareConfig`].
#[derive(Debug, Clone, Default)]
pub struct SquareConfigBuilder {
    config: SquareConfig,
}

impl SquareConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_width(mut self, max_width: usize) -> Self {
        self.config.max_width = Some(max_width);
        self
    }

    pub fn hash_family(mut self, family: HashFamily) -> Self {
        self.config.hash_family = Some(family);
        self
    }

    pub fn parallel_roots(mut self, enabled: bool) -> Self {
        self.config.parallel_roots = enabled;
        self
    }

    pub fn build(self) -> Result<SquareConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
