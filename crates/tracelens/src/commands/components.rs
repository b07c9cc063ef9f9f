/*
 * components.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Components command implementation
 */

use tracelens_core::extract_component_stack;

/// Execute the components command
pub fn execute(text: &str) -> String {
    extract_component_stack(text).join("\n")
}
