//! Run configuration for sift
//!
//! Loaded from an optional TOML file; CLI flags override file values.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{ScoreCache, DEFAULT_CAPACITY, DEFAULT_TTL};
use crate::cluster::DEFAULT_THRESHOLD;
use crate::error::{Result, SiftError};

/// Default maximum number of curated notes
pub const DEFAULT_LIMIT: usize = 20;

/// Curation run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurateConfig {
    /// Similarity threshold for grouping (0.0 to 1.0)
    pub threshold: f64,
    /// Maximum number of curated notes to emit
    pub limit: usize,
    /// Score cache settings
    pub cache: CacheConfig,
}

/// Score cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
    /// Maximum number of live entries
    pub max_entries: usize,
}

impl Default for CurateConfig {
    fn default() -> Self {
        CurateConfig {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            cache: CacheConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_secs: DEFAULT_TTL.as_secs(),
            max_entries: DEFAULT_CAPACITY,
        }
    }
}

impl CurateConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SiftError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: CurateConfig =
            toml::from_str(&content).map_err(|e| SiftError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SiftError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject parameter values the pipeline cannot honor
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SiftError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Build a score cache per the cache settings
    pub fn build_cache(&self) -> ScoreCache {
        ScoreCache::new(
            Duration::from_secs(self.cache.ttl_secs),
            self.cache.max_entries,
        )
    }
}
