/*
 * component_stack.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Component names from UI framework owner stacks.
 */

//! Extract component names from an owner stack.
//!
//! ```text
//!     in Button (created by Form)
//!     in Form
//!     at App (http://localhost:3000/src/App.tsx:12:3)
//! ```
//!
//! yields `["Button", "Form", "App"]`. Lines without an `in`/`at` prefix
//! are dropped. A prefixed line whose remainder doesn't start with a
//! capitalized identifier is kept verbatim, so nothing visible is lost.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix words; any whitespace may follow them.
const OWNER_PREFIXES: &[&str] = &["in", "at"];

/// A component name: capitalized identifier, optionally dotted
/// (`Context.Provider`).
static COMPONENT_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][\w$]*(?:\.[A-Za-z_$][\w$]*)*)")
        .expect("Invalid regex pattern for component names")
});

/// Ordered component names from an owner stack.
pub fn extract_component_stack(owner_stack: &str) -> Vec<String> {
    owner_stack
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let rest = OWNER_PREFIXES.iter().find_map(|prefix| {
                line.strip_prefix(prefix)
                    .filter(|rest| rest.starts_with(char::is_whitespace))
            })?;
            let name = COMPONENT_NAME_PATTERN
                .captures(rest.trim_start())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string());
            Some(name.unwrap_or_else(|| line.to_string()))
        })
        .collect()
}
