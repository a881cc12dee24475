//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/easel/config.json`.  Every section is optional.
//!
//! # Example
//!
//! ```json
//! {
//!   "curves": {
//!     "snappy": "cubic-bezier(0.2, 0.9, 0.3, 1)",
//!     "soft": [0.3, 0.0, 0.2, 1.0]
//!   },
//!   "sampler": {
//!     "timing": "snappy",
//!     "duration_ms": 250,
//!     "frame_rate": 60,
//!     "from": 0.0,
//!     "to": 1.0
//!   }
//! }
//! ```

use crate::timing::{ParseTimingError, TimingFunction};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level configuration.
///
/// A minimal `{}` file is valid and all sections fall back to their
/// compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User-defined timing functions by name.  These shadow the built-in
    /// preset names.
    #[serde(default)]
    pub curves: HashMap<String, TimingFunction>,

    /// What the `easel` binary samples when no flags are given.
    #[serde(default)]
    pub sampler: SamplerConfig,
}

/// Settings for sampling a transition frame by frame.
///
/// Durations are in **milliseconds**.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Timing function name, resolved through [`Config::resolve`].
    pub timing: String,
    /// Length of the sampled transition (ms).
    pub duration_ms: u64,
    /// Frames per second.
    pub frame_rate: u32,
    /// Start value.
    pub from: f32,
    /// End value.
    pub to: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            timing: TimingFunction::DEFAULT.to_string(),
            duration_ms: 300,
            frame_rate: 60,
            from: 0.0,
            to: 1.0,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        debug!("{} user curve(s) in {}", config.curves.len(), path.display());
        Ok(config)
    }

    /// Look up a timing function by name.
    ///
    /// User-defined curves win over presets; anything else is parsed as a
    /// preset name or a `cubic-bezier(...)` literal.
    pub fn resolve(&self, name: &str) -> Result<TimingFunction, ParseTimingError> {
        match self.curves.get(name.trim()) {
            Some(tf) => Ok(*tf),
            None => name.parse(),
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
