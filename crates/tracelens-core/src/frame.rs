/*
 * frame.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * A single call-site entry of a JavaScript stack trace.
 */

//! The [`StackFrame`] record.
//!
//! Frames are built once by the frame parser and never change afterwards.
//! The `is_internal` flag is derived from the file name at construction time,
//! which is why the fields are only reachable through accessors.

use std::fmt;

use serde::Serialize;

use crate::classify::is_internal_frame;

/// One call-site entry in a stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    function_name: Option<String>,
    file_name: Option<String>,
    line_number: Option<u32>,
    column_number: Option<u32>,
    source: String,
    is_native: bool,
    is_eval: bool,
    is_internal: bool,
}

impl StackFrame {
    /// Create a frame from its parsed parts.
    ///
    /// Empty function or file names are normalized to `None` so that absent
    /// fields are never represented as empty strings.
    pub fn new(
        source: impl Into<String>,
        function_name: Option<String>,
        file_name: Option<String>,
        line_number: Option<u32>,
        column_number: Option<u32>,
        is_native: bool,
        is_eval: bool,
    ) -> Self {
        let function_name = function_name.filter(|name| !name.is_empty());
        let file_name = file_name.filter(|name| !name.is_empty());
        let is_internal = is_internal_frame(file_name.as_deref());

        Self {
            function_name,
            file_name,
            line_number,
            column_number,
            source: source.into(),
            is_native,
            is_eval,
            is_internal,
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    pub fn column_number(&self) -> Option<u32> {
        self.column_number
    }

    /// The raw line this frame was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_native(&self) -> bool {
        self.is_native
    }

    pub fn is_eval(&self) -> bool {
        self.is_eval
    }

    pub fn is_internal(&self) -> bool {
        self.is_internal
    }

    /// True for frames attributed to the application's own code: neither
    /// internal nor native.
    pub fn is_application(&self) -> bool {
        !self.is_internal && !self.is_native
    }

    /// `file[:line[:column]]`, or `<unknown>` when the frame has no file.
    ///
    /// A column is only shown when a line is present.
    pub fn location(&self) -> String {
        let mut location = self
            .file_name
            .clone()
            .unwrap_or_else(|| "<unknown>".to_string());
        if let Some(line) = self.line_number {
            location.push_str(&format!(":{}", line));
            if let Some(column) = self.column_number {
                location.push_str(&format!(":{}", column));
            }
        }
        location
    }
}

/// Renders the frame the way V8 prints it: `at fn (file:line:col)`.
impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at {} ({})",
            self.function_name().unwrap_or("<anonymous>"),
            self.location()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(
        function: Option<&str>,
        file: Option<&str>,
        line: Option<u32>,
        col: Option<u32>,
    ) -> StackFrame {
        StackFrame::new(
            "raw",
            function.map(String::from),
            file.map(String::from),
            line,
            col,
            false,
            false,
        )
    }

    #[test]
    fn test_empty_names_become_none() {
        let f = frame(Some(""), Some(""), None, None);
        assert_eq!(f.function_name(), None);
        assert_eq!(f.file_name(), None);
    }

    #[test]
    fn test_missing_file_is_internal() {
        let f = frame(Some("foo"), None, Some(1), Some(2));
        assert!(f.is_internal());
        assert!(!f.is_application());
    }

    #[test]
    fn test_internal_flag_follows_file_name() {
        assert!(!frame(Some("foo"), Some("src/app.js"), None, None).is_internal());
        assert!(frame(Some("foo"), Some("node_modules/lib/index.js"), None, None).is_internal());
    }

    #[test]
    fn test_native_frame_is_not_application() {
        let f = StackFrame::new(
            "at Array.map (native)",
            Some("Array.map".to_string()),
            Some("native".to_string()),
            None,
            None,
            true,
            false,
        );
        assert!(!f.is_application());
    }

    #[test]
    fn test_display_full() {
        let f = frame(Some("foo"), Some("app.js"), Some(12), Some(5));
        assert_eq!(f.to_string(), "at foo (app.js:12:5)");
    }

    #[test]
    fn test_display_defaults() {
        let f = frame(None, None, None, Some(5));
        assert_eq!(f.to_string(), "at <anonymous> (<unknown>)");
    }

    #[test]
    fn test_location_without_column() {
        let f = frame(Some("foo"), Some("app.js"), Some(3), None);
        assert_eq!(f.location(), "app.js:3");
    }

    #[test]
    fn test_serializes_camel_case() {
        let f = frame(Some("foo"), Some("app.js"), Some(12), Some(5));
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["functionName"], "foo");
        assert_eq!(json["lineNumber"], 12);
        assert_eq!(json["isInternal"], false);
    }
}
