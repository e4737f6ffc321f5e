// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! ToolForge: a catalog of small text tools behind one dispatcher.
//!
//! A tool is picked by display name (or ID), matched against an ordered rule
//! table, and applied to raw text. Everything comes back as a `String`; failures
//! are rendered as `Error: ...` instead of surfacing as Rust errors.
//!
//! ```rust
//! use toolforge::engine::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! assert_eq!(dispatcher.dispatch("Uppercase Converter", "uppercase", "hello"), "HELLO");
//! ```

/// Lazily compiled regex bound to the call site.
#[macro_export]
#[doc(hidden)]
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("static regex is valid"))
    }};
}

pub mod backends;   // rule table, transforms, relay + usage implementations
pub mod config;     // catalog + limits
pub mod engine;     // dispatcher, fallback, hub
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // injected collaborators
pub mod utils;      // report formatting
