// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod catalog;
mod loader;
mod validation;

pub mod consts;

pub use catalog::{Catalog, Tool, ToolKind};
pub use loader::{load_and_validate_config, load_config, Config, Limits};
pub use validation::validate_catalog;
