/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Rendering configuration loaded from TOML.
 */

//! Rendering configuration.
//!
//! ```toml
//! minify_max_frames = 3
//!
//! [report]
//! include_internal = false
//! max_frames = 20
//! ```
//!
//! Every key is optional; omitted keys keep the defaults of
//! [`FormatOptions`] and [`DEFAULT_MINIFY_FRAMES`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{DEFAULT_MINIFY_FRAMES, FormatOptions};

/// Errors from loading a [`TraceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is syntactically fine but unusable.
    #[error("Invalid value for `{key}`: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Options for all rendered forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Options for the human-readable report
    pub report: FormatOptions,
    /// Frames joined by the one-line form
    pub minify_max_frames: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            report: FormatOptions::default(),
            minify_max_frames: DEFAULT_MINIFY_FRAMES,
        }
    }
}

impl TraceConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: TraceConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded trace config");
        Self::from_toml_str(&text)
    }

    /// A one-line form with zero frames is always empty, which is never what
    /// a config author meant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minify_max_frames == 0 {
            return Err(ConfigError::InvalidValue {
                key: "minify_max_frames",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
