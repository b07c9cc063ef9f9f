//! Stack trace analysis for JavaScript runtime errors.
//!
//! Raw traces from V8, Firefox and Safari are normalized into
//! [`ParsedStackTrace`] values, frames are classified as application or
//! infrastructure code, and traces are rendered for people and for logs.
//!
//! # Pipeline
//!
//! 1. [`grammar`]: one line to one [`StackFrame`]
//! 2. [`trace`]: whole trace text to a [`ParsedStackTrace`]
//! 3. [`classify`]: internal vs. application frames
//! 4. [`format`]: report, one-line and location renderings
//!
//! [`component_stack`] handles UI framework owner stacks and is independent
//! of the pipeline.
//!
//! Every function here is total: malformed input produces empty or
//! "unknown" results, never an error or a panic.
//!
//! # Example
//!
//! ```rust
//! use tracelens_core::{FormatOptions, format_trace, parse_stack_trace};
//!
//! let raw = "TypeError: x is null\n  at f (a.js:1:1)\n  at g (node_modules/x.js:2:2)";
//! let trace = parse_stack_trace(raw, None);
//! let report = format_trace(&trace, &FormatOptions::default());
//!
//! assert!(report.starts_with("Error: x is null"));
//! assert!(report.ends_with("... 1 more frames (filtered)"));
//! ```

pub mod classify;
pub mod component_stack;
pub mod config;
pub mod format;
pub mod frame;
pub mod grammar;
pub mod trace;

pub use classify::{
    INTERNAL_PATH_PATTERNS, InternalKind, InternalPattern, classify_file,
    filter_application_frames, first_application_frame, is_internal_frame,
};
pub use component_stack::extract_component_stack;
pub use config::{ConfigError, TraceConfig};
pub use format::{
    DEFAULT_MAX_FRAMES, DEFAULT_MINIFY_FRAMES, FormatOptions, UNKNOWN_LOCATION, format_trace,
    locate, minify, simplify_path,
};
pub use frame::StackFrame;
pub use grammar::{FRAME_GRAMMARS, FrameGrammar, detect_grammar, is_message_header, parse_frame};
pub use trace::{ParsedStackTrace, RawError, parse_error, parse_stack_trace};
