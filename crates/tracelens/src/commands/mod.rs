//! Command implementations for the tracelens CLI
//!
//! Each command module takes the input text already read and returns the
//! text to print; the analysis itself lives in tracelens-core.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracelens_core::TraceConfig;

pub mod components;
pub mod locate;
pub mod minify;
pub mod parse;
pub mod report;

/// Read the input file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// The config file's options, or the defaults when no file was given.
pub fn load_config(path: Option<&Path>) -> Result<TraceConfig> {
    match path {
        Some(path) => TraceConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(TraceConfig::default()),
    }
}
