/*
 * format.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Rendering of parsed stack traces.
 */

//! Render stack traces for people and for logs.
//!
//! - [`format_trace`]: multi-line report, application frames only by default
//! - [`minify`]: one-line `fn@file:line -> ...` form for structured logs
//! - [`locate`]: short `fn(path:line)` pointer to where an error originated

use serde::{Deserialize, Serialize};

use crate::classify::filter_application_frames;
use crate::frame::StackFrame;
use crate::trace::{ParsedStackTrace, RawError, parse_error};

/// Default number of frames shown by [`format_trace`].
pub const DEFAULT_MAX_FRAMES: usize = 10;

/// Default number of frames joined by [`minify`].
pub const DEFAULT_MINIFY_FRAMES: usize = 5;

/// Returned by [`locate`] when no application frame exists.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Markers for the root of authored sources in a path, POSIX and Windows.
const SOURCE_ROOT_MARKERS: &[&str] = &["/src/", "\\src\\"];

const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

const MINIFY_SEPARATOR: &str = " -> ";

/// Options for [`format_trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Keep internal and native frames
    pub include_internal: bool,
    /// Upper bound on rendered frames
    pub max_frames: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_internal: false,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

/// Render a trace as a human-readable report.
///
/// ```text
/// Error: x is null
///     at f (a.js:1:1)
///     ... 1 more frames (filtered)
/// ```
///
/// The summary line counts frames removed by filtering. Truncation to
/// `max_frames` is silent, and nothing is announced when
/// `include_internal` is set.
pub fn format_trace(trace: &ParsedStackTrace, options: &FormatOptions) -> String {
    let frames = if options.include_internal {
        trace.frames().to_vec()
    } else {
        filter_application_frames(trace.frames())
    };
    let filtered = trace.frames().len() - frames.len();

    let mut lines = Vec::new();
    if !trace.message().is_empty() {
        lines.push(format!("Error: {}", trace.message()));
    }
    lines.extend(
        frames
            .iter()
            .take(options.max_frames)
            .map(|frame| format!("    {}", frame)),
    );
    if !options.include_internal && filtered > 0 {
        lines.push(format!("    ... {} more frames (filtered)", filtered));
    }

    lines.join("\n")
}

/// Render an error's application frames on a single line.
///
/// Each frame becomes `fn@file:line`, with the file reduced to its last path
/// segment, `anonymous` for a missing function and `?` for a missing line.
/// Returns an empty string when there are no application frames.
pub fn minify(error: &RawError, max_frames: usize) -> String {
    let trace = parse_error(error);
    trace
        .application_frames()
        .iter()
        .take(max_frames)
        .map(minify_frame)
        .collect::<Vec<_>>()
        .join(MINIFY_SEPARATOR)
}

fn minify_frame(frame: &StackFrame) -> String {
    let file = frame.file_name().map(file_basename).unwrap_or_default();
    format!(
        "{}@{}:{}",
        frame.function_name().unwrap_or("anonymous"),
        file,
        line_or_unknown(frame)
    )
}

/// Where an error originated: `fn(path:line)` for the first application
/// frame, or [`UNKNOWN_LOCATION`].
pub fn locate(error: &RawError) -> String {
    let trace = parse_error(error);
    match trace.first_application_frame() {
        Some(frame) => format!(
            "{}({}:{})",
            frame.function_name().unwrap_or("anonymous"),
            simplify_path(frame.file_name().unwrap_or_default()),
            line_or_unknown(frame)
        ),
        None => UNKNOWN_LOCATION.to_string(),
    }
}

/// Shorten a file locator for display: drop everything through the last
/// `/src/` (or `\src\`) marker and any `?query` suffix.
pub fn simplify_path(path: &str) -> &str {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    SOURCE_ROOT_MARKERS
        .iter()
        .filter_map(|marker| path.rfind(marker).map(|index| index + marker.len()))
        .max()
        .map_or(path, |start| &path[start..])
}

fn file_basename(path: &str) -> &str {
    path.rsplit(PATH_SEPARATORS).next().unwrap_or(path)
}

fn line_or_unknown(frame: &StackFrame) -> String {
    frame
        .line_number()
        .map_or_else(|| "?".to_string(), |line| line.to_string())
}
