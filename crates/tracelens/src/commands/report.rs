/*
 * report.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Report command implementation
 */

use tracelens_core::{FormatOptions, TraceConfig, format_trace, parse_stack_trace};

/// Arguments for the report command
#[derive(Debug, Default)]
pub struct ReportArgs {
    /// Keep internal and native frames
    pub include_internal: bool,
    /// Overrides the config's frame limit
    pub max_frames: Option<usize>,
    /// Overrides the message from the trace header
    pub message: Option<String>,
}

/// Execute the report command
pub fn execute(text: &str, args: ReportArgs, config: &TraceConfig) -> String {
    let options = FormatOptions {
        include_internal: args.include_internal || config.report.include_internal,
        max_frames: args.max_frames.unwrap_or(config.report.max_frames),
    };
    let trace = parse_stack_trace(text, args.message.as_deref());
    tracing::debug!(
        frames = trace.frames().len(),
        max_frames = options.max_frames,
        "Rendering report"
    );
    format_trace(&trace, &options)
}
