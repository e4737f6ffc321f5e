// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Errors that can occur during catalog validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two catalog entries share the same tool ID
    DuplicateToolId {
        /// The duplicate tool ID
        tool_id: String,
    },
    /// A catalog entry has an empty ID
    EmptyToolId {
        /// Display name of the offending entry
        tool_name: String,
    },
    /// A catalog entry has an empty display name
    EmptyToolName {
        /// ID of the offending entry
        tool_id: String,
    },
    /// Two catalog entries share the same display name (case-insensitive)
    DuplicateToolName {
        /// The duplicate display name
        tool_name: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateToolId { tool_id } => {
                write!(f, "Duplicate tool ID: '{}'", tool_id)
            }
            ValidationError::EmptyToolId { tool_name } => {
                write!(f, "Tool '{}' has an empty ID", tool_name)
            }
            ValidationError::EmptyToolName { tool_id } => {
                write!(f, "Tool '{}' has an empty name", tool_id)
            }
            ValidationError::DuplicateToolName { tool_name } => {
                write!(
                    f,
                    "Duplicate tool name: '{}'. Name lookups would be ambiguous.",
                    tool_name
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a catalog/config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported config format: '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
