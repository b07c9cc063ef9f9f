/*
 * parse.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Parse command implementation
 */

use anyhow::{Context, Result};
use tracelens_core::parse_stack_trace;

/// Execute the parse command
pub fn execute(text: &str, pretty: bool) -> Result<String> {
    let trace = parse_stack_trace(text, None);
    let json = if pretty {
        serde_json::to_string_pretty(&trace)
    } else {
        serde_json::to_string(&trace)
    };
    json.context("Failed to serialize parsed trace")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let output = execute("RangeError: too deep\n    at recurse (src/r.js:3:9)", false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["message"], "too deep");
        assert_eq!(value["errorName"], "RangeError");
        assert_eq!(value["frames"][0]["functionName"], "recurse");
        assert_eq!(value["frames"][0]["columnNumber"], 9);
        assert_eq!(value["frames"][0]["isNative"], false);
    }

    #[test]
    fn test_parse_pretty() {
        let output = execute("at f (a.js:1:1)", true).unwrap();
        assert!(output.contains("\n  \"frames\""));
    }
}
