// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tool execution.
//!
//! * [`Dispatcher`] - rule selection and transform execution for local tools
//! * [`fallback`] - summary for tool names no rule recognises
//! * [`ToolHub`] - catalog lookup plus local/remote routing

pub mod dispatcher;
pub mod fallback;
pub mod hub;
#[cfg(test)]
mod integration_tests;

pub use dispatcher::Dispatcher;
pub use fallback::{fallback, fallback_with_limit};
pub use hub::ToolHub;
