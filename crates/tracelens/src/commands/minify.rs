/*
 * minify.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Minify command implementation
 */

use tracelens_core::{RawError, TraceConfig, minify};

/// Execute the minify command
pub fn execute(text: &str, max_frames: Option<usize>, config: &TraceConfig) -> String {
    let max_frames = max_frames.unwrap_or(config.minify_max_frames);
    minify(&RawError::from_stack(text), max_frames)
}
