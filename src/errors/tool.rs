// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error type returned by individual tool transforms.
//!
//! Transforms never hand these to callers directly. The dispatcher renders every
//! `ToolError` as `"Error: <message>"` so the UI always has a string to show.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    /// Malformed input for a decode/parse rule, e.g. `Invalid Base64 input`.
    #[error("Invalid {0}")]
    InvalidInput(&'static str),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("Invalid date: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Required input was empty or missing a field.
    #[error("Please enter {0}")]
    MissingInput(&'static str),

    #[error("Daily limit of {limit} AI generations reached. Try again tomorrow.")]
    QuotaExceeded { limit: u32 },

    #[error("AI service error: {0}")]
    Relay(String),
}

pub type ToolResult = Result<String, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let error = ToolError::InvalidInput("Base64 input");
        assert_eq!(error.to_string(), "Invalid Base64 input");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error: ToolError = parse_error.into();
        assert!(error.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_quota_message_names_limit() {
        let error = ToolError::QuotaExceeded { limit: 10 };
        assert!(error.to_string().contains("10"));
    }
}
