/*
 * classify.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Application vs. infrastructure classification of stack frames.
 */

//! Frame classification.
//!
//! A frame is *internal* when its file belongs to infrastructure rather than
//! the application: installed dependencies, bundler or dev-server output,
//! UI framework runtime, scheduler/polyfill runtimes, host built-ins such as
//! Node's `node:internal` modules, or anonymous wrappers.
//! Frames without a file are always internal.
//!
//! The signatures live in [`INTERNAL_PATH_PATTERNS`]. New signatures are
//! appended there; parsing and formatting never need to change.

use serde::Serialize;

use crate::frame::StackFrame;

/// Category of infrastructure a path signature identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InternalKind {
    /// Package manager install directories
    DependencyDirectory,
    /// Bundler and dev-server generated code
    BundlerOutput,
    /// UI framework runtime internals
    FrameworkRuntime,
    /// Task scheduler and polyfill runtimes
    SchedulerRuntime,
    /// Built-in modules of the JavaScript host
    HostRuntime,
    /// Engine wrappers with no real location
    AnonymousWrapper,
}

impl InternalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternalKind::DependencyDirectory => "dependency-directory",
            InternalKind::BundlerOutput => "bundler-output",
            InternalKind::FrameworkRuntime => "framework-runtime",
            InternalKind::SchedulerRuntime => "scheduler-runtime",
            InternalKind::HostRuntime => "host-runtime",
            InternalKind::AnonymousWrapper => "anonymous-wrapper",
        }
    }
}

/// A path fragment that marks a file as infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalPattern {
    /// Substring looked for in the file name
    pub fragment: &'static str,
    pub kind: InternalKind,
}

const fn pattern(fragment: &'static str, kind: InternalKind) -> InternalPattern {
    InternalPattern { fragment, kind }
}

/// Known infrastructure signatures, checked in order.
pub const INTERNAL_PATH_PATTERNS: &[InternalPattern] = &[
    pattern("node_modules", InternalKind::DependencyDirectory),
    pattern("bower_components", InternalKind::DependencyDirectory),
    pattern("jspm_packages", InternalKind::DependencyDirectory),
    pattern("webpack-internal:", InternalKind::BundlerOutput),
    pattern("webpack/bootstrap", InternalKind::BundlerOutput),
    pattern("webpack/runtime", InternalKind::BundlerOutput),
    pattern("/@vite/", InternalKind::BundlerOutput),
    pattern("/.vite/deps/", InternalKind::BundlerOutput),
    pattern("__vite_ssr", InternalKind::BundlerOutput),
    pattern("/@react-refresh", InternalKind::BundlerOutput),
    pattern("turbopack", InternalKind::BundlerOutput),
    pattern("react-dom", InternalKind::FrameworkRuntime),
    pattern("react.development", InternalKind::FrameworkRuntime),
    pattern("react.production", InternalKind::FrameworkRuntime),
    pattern("react-reconciler", InternalKind::FrameworkRuntime),
    pattern("react-jsx-runtime", InternalKind::FrameworkRuntime),
    pattern("react-jsx-dev-runtime", InternalKind::FrameworkRuntime),
    pattern("scheduler", InternalKind::SchedulerRuntime),
    pattern("regenerator-runtime", InternalKind::SchedulerRuntime),
    pattern("core-js", InternalKind::SchedulerRuntime),
    pattern("zone.js", InternalKind::SchedulerRuntime),
    pattern("node:internal", InternalKind::HostRuntime),
    pattern("<anonymous>", InternalKind::AnonymousWrapper),
    pattern("[native code]", InternalKind::AnonymousWrapper),
];

/// The first infrastructure category `file_name` belongs to, if any.
pub fn classify_file(file_name: &str) -> Option<InternalKind> {
    INTERNAL_PATH_PATTERNS
        .iter()
        .find(|p| file_name.contains(p.fragment))
        .map(|p| p.kind)
}

/// Whether a frame with this file name is infrastructure code.
///
/// Absent and empty file names count as internal.
pub fn is_internal_frame(file_name: Option<&str>) -> bool {
    match file_name {
        None => true,
        Some(file) if file.is_empty() => true,
        Some(file) => classify_file(file).is_some(),
    }
}

/// Keep only application frames: drops internal and native frames.
pub fn filter_application_frames(frames: &[StackFrame]) -> Vec<StackFrame> {
    frames
        .iter()
        .filter(|frame| frame.is_application())
        .cloned()
        .collect()
}

/// The most likely origin of an error: the first application frame.
pub fn first_application_frame(frames: &[StackFrame]) -> Option<&StackFrame> {
    frames.iter().find(|frame| frame.is_application())
}
