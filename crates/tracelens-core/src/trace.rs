/*
 * trace.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Whole-trace parsing.
 */

//! Turn a raw trace into a [`ParsedStackTrace`].
//!
//! Every line is handed to [`parse_frame`]; lines it rejects (blank lines,
//! message headers, anything unrecognized) are skipped. Partial traces are
//! still useful, so nothing here fails.

use serde::Serialize;

use crate::classify::{filter_application_frames, first_application_frame};
use crate::frame::StackFrame;
use crate::grammar::{is_message_header, parse_frame};

/// A parsed stack trace.
///
/// `frames` keeps engine order: index 0 is the throw site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStackTrace {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_name: Option<String>,
    frames: Vec<StackFrame>,
    raw: String,
}

impl ParsedStackTrace {
    /// The error message, empty when unavailable.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error kind from the header line (`TypeError`, ...), when one was seen.
    pub fn error_name(&self) -> Option<&str> {
        self.error_name.as_deref()
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// The untouched input text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn application_frames(&self) -> Vec<StackFrame> {
        filter_application_frames(&self.frames)
    }

    pub fn first_application_frame(&self) -> Option<&StackFrame> {
        first_application_frame(&self.frames)
    }
}

/// An error as handed over by a capture hook: a message and, if the engine
/// produced one, its stack text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawError {
    pub message: String,
    pub stack: Option<String>,
}

impl RawError {
    pub fn new(message: impl Into<String>, stack: Option<String>) -> Self {
        Self {
            message: message.into(),
            stack,
        }
    }

    /// An error known only by its stack text. The message is recovered from
    /// the stack's header line when parsed.
    pub fn from_stack(stack: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            stack: Some(stack.into()),
        }
    }
}

/// Parse a raw stack trace.
///
/// When `message` is `None`, the message is taken from the first non-blank
/// line if it is an `ErrorKind: message` header, otherwise it is empty.
///
/// # Examples
///
/// ```
/// use tracelens_core::parse_stack_trace;
///
/// let trace = parse_stack_trace("TypeError: x is null\n  at f (a.js:1:1)", None);
/// assert_eq!(trace.message(), "x is null");
/// assert_eq!(trace.frames().len(), 1);
/// ```
pub fn parse_stack_trace(raw: &str, message: Option<&str>) -> ParsedStackTrace {
    let header = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| is_message_header(line))
        .map(split_header);

    let error_name = header.as_ref().and_then(|(name, _)| name.clone());
    let message = match message {
        Some(message) => message.to_string(),
        None => header.map(|(_, message)| message).unwrap_or_default(),
    };

    let mut skipped = 0usize;
    let frames: Vec<StackFrame> = raw
        .lines()
        .filter_map(|line| {
            let frame = parse_frame(line);
            if frame.is_none() && !line.trim().is_empty() {
                tracing::trace!(line = line.trim(), "Skipping unparseable stack line");
                skipped += 1;
            }
            frame
        })
        .collect();

    tracing::debug!(
        frames = frames.len(),
        skipped,
        "Parsed stack trace"
    );

    ParsedStackTrace {
        message,
        error_name,
        frames,
        raw: raw.to_string(),
    }
}

/// Parse the stack of a [`RawError`]. A missing stack yields no frames.
///
/// A non-empty `message` on the error wins over the stack's header.
pub fn parse_error(error: &RawError) -> ParsedStackTrace {
    let message = Some(error.message.as_str()).filter(|message| !message.is_empty());
    match &error.stack {
        Some(stack) => parse_stack_trace(stack, message),
        None => ParsedStackTrace {
            message: error.message.clone(),
            error_name: None,
            frames: Vec::new(),
            raw: String::new(),
        },
    }
}

/// Split `Kind: message` into its parts. A header without a colon is a bare
/// kind with an empty message.
fn split_header(line: &str) -> (Option<String>, String) {
    let line = strip_word(strip_word(line, "Uncaught"), "(in promise)");
    match line.split_once(':') {
        Some((name, message)) => (Some(name.trim().to_string()), message.trim().to_string()),
        None => (Some(line.to_string()), String::new()),
    }
}

/// `line` without a leading `word` and the whitespace after it.
fn strip_word<'l>(line: &'l str, word: &str) -> &'l str {
    line.strip_prefix(word)
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map_or(line, str::trim_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED_TRACE: &str = "TypeError: x is null
    at f (a.js:1:1)

    not a frame at all
    at g (node_modules/x.js:2:2)";

    // === Trace Parsing Tests ===

    #[test]
    fn test_parse_keeps_frames_in_order() {
        let trace = parse_stack_trace(MIXED_TRACE, None);
        let names: Vec<_> = trace
            .frames()
            .iter()
            .filter_map(|f| f.function_name())
            .collect();
        assert_eq!(names, vec!["f", "g"]);
    }

    #[test]
    fn test_message_from_header() {
        let trace = parse_stack_trace(MIXED_TRACE, None);
        assert_eq!(trace.message(), "x is null");
        assert_eq!(trace.error_name(), Some("TypeError"));
    }

    #[test]
    fn test_explicit_message_wins() {
        let trace = parse_stack_trace(MIXED_TRACE, Some("custom"));
        assert_eq!(trace.message(), "custom");
        assert_eq!(trace.error_name(), Some("TypeError"));
    }

    #[test]
    fn test_uncaught_header() {
        let trace = parse_stack_trace("Uncaught ReferenceError: y is not defined\n    at h (b.js:3:3)", None);
        assert_eq!(trace.message(), "y is not defined");
        assert_eq!(trace.error_name(), Some("ReferenceError"));
        assert_eq!(trace.frames().len(), 1);
    }

    #[test]
    fn test_uncaught_in_promise_header() {
        let trace = parse_stack_trace(
            "Uncaught (in promise) TypeError: x is null\n    at load (src/data.js:3:14)",
            None,
        );
        assert_eq!(trace.message(), "x is null");
        assert_eq!(trace.error_name(), Some("TypeError"));
        assert_eq!(trace.frames().len(), 1);
    }

    #[test]
    fn test_no_header_means_empty_message() {
        let trace = parse_stack_trace("foo@app.js:1:1\nbar@app.js:2:2", None);
        assert_eq!(trace.message(), "");
        assert_eq!(trace.error_name(), None);
        assert_eq!(trace.frames().len(), 2);
    }

    #[test]
    fn test_raw_is_preserved() {
        let trace = parse_stack_trace(MIXED_TRACE, None);
        assert_eq!(trace.raw(), MIXED_TRACE);
    }

    #[test]
    fn test_empty_input() {
        let trace = parse_stack_trace("", None);
        assert!(trace.is_empty());
        assert_eq!(trace.message(), "");
        assert_eq!(trace.raw(), "");
    }

    #[test]
    fn test_windows_line_endings() {
        let trace = parse_stack_trace("Error: boom\r\n    at f (a.js:1:1)\r\n", None);
        assert_eq!(trace.message(), "boom");
        assert_eq!(trace.frames()[0].file_name(), Some("a.js"));
    }

    #[test]
    fn test_application_helpers() {
        let trace = parse_stack_trace(MIXED_TRACE, None);
        assert_eq!(trace.application_frames().len(), 1);
        assert_eq!(
            trace.first_application_frame().and_then(|f| f.function_name()),
            Some("f")
        );
    }

    // === RawError Tests ===

    #[test]
    fn test_parse_error_without_stack() {
        let trace = parse_error(&RawError::new("boom", None));
        assert_eq!(trace.message(), "boom");
        assert!(trace.is_empty());
    }

    #[test]
    fn test_parse_error_from_stack() {
        let trace = parse_error(&RawError::from_stack(MIXED_TRACE));
        assert_eq!(trace.message(), "x is null");
        assert_eq!(trace.frames().len(), 2);
    }

    #[test]
    fn test_split_header_bare_kind() {
        assert_eq!(split_header("Error"), (Some("Error".to_string()), String::new()));
        assert_eq!(
            split_header("UncaughtError: boom"),
            (Some("UncaughtError".to_string()), "boom".to_string())
        );
    }

    #[test]
    fn test_serializes_record_shape() {
        let trace = parse_stack_trace(MIXED_TRACE, None);
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["message"], "x is null");
        assert_eq!(json["errorName"], "TypeError");
        assert_eq!(json["frames"][0]["fileName"], "a.js");
        assert_eq!(json["frames"][1]["isInternal"], true);
    }
}
