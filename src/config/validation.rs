// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;

/// Validate catalog entries.
///
/// Collects every problem instead of stopping at the first one so a broken
/// catalog can be fixed in a single pass.
pub fn validate_catalog(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for tool in &cfg.tools {
        if tool.id.trim().is_empty() {
            errors.push(ValidationError::EmptyToolId {
                tool_name: tool.name.clone(),
            });
        } else if !ids.insert(tool.id.to_lowercase()) {
            errors.push(ValidationError::DuplicateToolId {
                tool_id: tool.id.clone(),
            });
        }

        if tool.name.trim().is_empty() {
            errors.push(ValidationError::EmptyToolName {
                tool_id: tool.id.clone(),
            });
        } else if !names.insert(tool.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateToolName {
                tool_name: tool.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
