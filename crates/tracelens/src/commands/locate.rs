/*
 * locate.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Locate command implementation
 */

use tracelens_core::{RawError, locate};

/// Execute the locate command
pub fn execute(text: &str) -> String {
    locate(&RawError::from_stack(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate() {
        let trace = "Error: boom\n    at save (http://localhost:3000/src/store/save.ts?v=3:41:9)";
        assert_eq!(execute(trace), "save(store/save.ts:41)");
    }

    #[test]
    fn test_locate_garbage() {
        assert_eq!(execute("not a trace"), "Unknown location");
    }
}
