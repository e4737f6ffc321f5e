// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::catalog::{Catalog, Tool};
use crate::config::consts::{DEFAULT_DAILY_REMOTE_LIMIT, DEFAULT_FALLBACK_ECHO_CHARS};
use crate::errors::ConfigError;
use crate::observability::messages::catalog::{CatalogEntryRejected, CatalogLoaded};
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../configs/catalog.yaml");

/// Top-level configuration: runtime limits plus the tool catalog.
///
/// # Fields
/// * `limits` - Quotas and output limits (optional, built-in defaults apply)
/// * `tools` - Catalog entries in display order
///
/// # Example
/// ```yaml
/// limits:
///   daily_remote_limit: 10
///   fallback_echo_chars: 500
/// tools:
///   - id: word-counter
///     name: Word Counter
///     category: text
///   - id: caption-generator
///     name: Caption Generator
///     category: ai
///     kind: remote
///     relay_type: caption
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Runtime limits. Unset values fall back to the constants in `config::consts`.
#[derive(Debug, Default, Deserialize)]
pub struct Limits {
    pub daily_remote_limit: Option<u32>,
    pub fallback_echo_chars: Option<usize>,
}

impl Limits {
    pub fn get_daily_remote_limit(&self) -> u32 {
        self.daily_remote_limit.unwrap_or(DEFAULT_DAILY_REMOTE_LIMIT)
    }

    pub fn get_fallback_echo_chars(&self) -> usize {
        self.fallback_echo_chars.unwrap_or(DEFAULT_FALLBACK_ECHO_CHARS)
    }
}

impl Config {
    /// Parse and validate the built-in catalog.
    pub fn builtin() -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(BUILTIN_CATALOG)?;
        validate(cfg, "builtin")
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.tools.clone())
    }
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let cfg = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };
    Ok(cfg)
}

/// Load and validate a config file.
///
/// Validation rejects duplicate IDs and names and empty IDs or names, so that
/// every catalog lookup resolves to exactly one tool.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    validate(load_config(path)?, &path.display().to_string())
}

fn validate(cfg: Config, source: &str) -> Result<Config, ConfigError> {
    if let Err(errors) = crate::config::validate_catalog(&cfg) {
        for error in &errors {
            CatalogEntryRejected {
                reason: &error.to_string(),
            }
            .log();
        }
        return Err(ConfigError::Validation(errors));
    }
    CatalogLoaded {
        source,
        tool_count: cfg.tools.len(),
        remote_count: cfg.tools.iter().filter(|tool| tool.is_remote()).count(),
    }
    .log();
    Ok(cfg)
}
