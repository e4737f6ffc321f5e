// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod tool;

pub use config::{ConfigError, ValidationError};
pub use tool::{ToolError, ToolResult};
