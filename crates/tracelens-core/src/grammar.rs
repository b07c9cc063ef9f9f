/*
 * grammar.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Line grammars of the JavaScript engines whose traces we parse.
 */

//! Parse a single stack trace line into a [`StackFrame`].
//!
//! Each JavaScript engine prints call sites in its own line grammar. The
//! grammars are tried in the fixed order of [`FRAME_GRAMMARS`]; the first one
//! that matches wins.
//!
//! # Grammars
//!
//! ## Chrome / V8 / Node
//! ```text
//!     at foo (http://localhost:3000/app.js:12:5)
//!     at http://localhost:3000/app.js:12:5
//!     at (app.js:12:5)
//!     at Array.forEach (native)
//!     at eval (eval at run (app.js:1:1), <anonymous>:2:3)
//! ```
//!
//! ## Firefox
//! ```text
//! foo@http://localhost:3000/app.js:12:5
//! @http://localhost:3000/app.js:12:5
//! ```
//!
//! ## Safari
//! ```text
//! foo@http://localhost:3000/app.js:12:5
//! forEach@[native code]
//! http://localhost:3000/app.js:12
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::frame::StackFrame;

/// File-slot values that mean "engine code, no source".
const NATIVE_FILE_MARKERS: &[&str] = &["native", "[native code]"];

/// Literal that marks a native frame anywhere in the line.
const NATIVE_CODE_MARKER: &str = "[native code]";

/// Substrings engines insert for frames inside `eval` or `new Function`.
const EVAL_MARKERS: &[&str] = &["eval at ", "> eval", "eval code", "(eval)"];

/// Chrome/V8 call sites with a parenthesized location.
///
/// Pattern breakdown:
/// - `at\s+` - every V8 frame starts with `at`
/// - `(?:(?P<func>.+?)\s+)?` - optional function name, shortest match
/// - `\((?P<file>.+?):(?P<line>\d+)(?::(?P<col>\d+))?\)` - file with line/column
/// - `|\((?P<loc>[^()]+)\)` - or a bare marker such as `native` or `<anonymous>`
static CHROME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^at\s+(?:(?P<func>.+?)\s+)?\((?:(?P<file>.+?):(?P<line>\d+)(?::(?P<col>\d+))?|(?P<loc>[^()]+))\)$",
    )
    .expect("Invalid regex pattern for Chrome stack frames")
});

/// Chrome/V8 anonymous call sites without parentheses: `at file:line:col`.
static CHROME_BARE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^at\s+(?P<file>.+?):(?P<line>\d+)(?::(?P<col>\d+))?$")
        .expect("Invalid regex pattern for Chrome stack frames")
});

/// Firefox call sites: `func@file:line:col`, function name optional.
static FIREFOX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<func>[^@]*)@(?P<file>.+?):(?P<line>\d+):(?P<col>\d+)$")
        .expect("Invalid regex pattern for Firefox stack frames")
});

/// Safari call sites. Same shape as Firefox, but the `func@` part and the
/// column are optional and the location may be `[native code]`.
static SAFARI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<func>[^@]*)@)?(?:(?P<native>\[native code\])|(?P<file>[^@\s]+?):(?P<line>\d+)(?::(?P<col>\d+))?)$",
    )
    .expect("Invalid regex pattern for Safari stack frames")
});

/// V8's slot for a `Promise.all` / `Promise.any` element: `(index 0)`.
/// It names no file.
static PROMISE_INDEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^index\s+\d+$").expect("Invalid regex pattern for promise index slots")
});

/// The `ErrorKind: message` header that precedes the frames, optionally
/// prefixed the way the browser console prints it
/// (`Uncaught (in promise) TypeError: ...`).
static MESSAGE_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Uncaught\s+(?:\(in promise\)\s+)?)?[A-Za-z_$][\w$.]*(?::(?:\s|$)|$)")
        .expect("Invalid regex pattern for message headers")
});

/// A known engine line grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameGrammar {
    Chrome,
    Firefox,
    Safari,
}

/// Grammars in priority order. Firefox and Safari lines are nearly
/// identical, so Safari must stay last.
pub const FRAME_GRAMMARS: &[FrameGrammar] = &[
    FrameGrammar::Chrome,
    FrameGrammar::Firefox,
    FrameGrammar::Safari,
];

impl FrameGrammar {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameGrammar::Chrome => "chrome",
            FrameGrammar::Firefox => "firefox",
            FrameGrammar::Safari => "safari",
        }
    }

    fn captures<'l>(&self, line: &'l str) -> Option<Captures<'l>> {
        match self {
            FrameGrammar::Chrome => CHROME_PATTERN
                .captures(line)
                .or_else(|| CHROME_BARE_PATTERN.captures(line)),
            FrameGrammar::Firefox => FIREFOX_PATTERN.captures(line),
            FrameGrammar::Safari => SAFARI_PATTERN.captures(line),
        }
    }
}

/// Whether a trimmed line is an `ErrorKind: message` header rather than a
/// call site.
pub fn is_message_header(line: &str) -> bool {
    MESSAGE_HEADER_PATTERN.is_match(line)
}

/// The first grammar that accepts `line`, if any.
pub fn detect_grammar(line: &str) -> Option<FrameGrammar> {
    let line = line.trim();
    if line.is_empty() || is_message_header(line) {
        return None;
    }
    FRAME_GRAMMARS
        .iter()
        .copied()
        .find(|grammar| grammar.captures(line).is_some())
}

/// Parse one line of a stack trace.
///
/// Returns `None` for blank lines, message headers and lines no grammar
/// accepts. The frame's `source` is `line` exactly as given.
///
/// # Examples
///
/// ```
/// use tracelens_core::parse_frame;
///
/// let frame = parse_frame("    at foo (app.js:12:5)").unwrap();
/// assert_eq!(frame.function_name(), Some("foo"));
/// assert_eq!(frame.line_number(), Some(12));
/// ```
pub fn parse_frame(line: &str) -> Option<StackFrame> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_message_header(trimmed) {
        return None;
    }

    let (grammar, caps) = FRAME_GRAMMARS
        .iter()
        .find_map(|grammar| grammar.captures(trimmed).map(|caps| (grammar, caps)))?;

    let function_name = capture(&caps, "func");
    let file_name = capture(&caps, "file")
        .or_else(|| {
            capture(&caps, "loc").filter(|loc| !PROMISE_INDEX_PATTERN.is_match(loc))
        })
        .or_else(|| capture(&caps, "native"));
    let line_number = capture_number(&caps, "line");
    let column_number = capture_number(&caps, "col");

    let is_native = file_name
        .as_deref()
        .is_some_and(|file| NATIVE_FILE_MARKERS.contains(&file))
        || trimmed.contains(NATIVE_CODE_MARKER);
    let is_eval = EVAL_MARKERS.iter().any(|marker| trimmed.contains(marker));

    tracing::trace!(grammar = grammar.as_str(), line = trimmed, "Parsed stack frame");

    Some(StackFrame::new(
        line,
        function_name,
        file_name,
        line_number,
        column_number,
        is_native,
        is_eval,
    ))
}

fn capture(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Line and column numbers that don't fit are treated as absent.
fn capture_number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}
