// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic messages are structs with a `Display` implementation instead of
//! format strings scattered through the code. Each one also implements
//! [`messages::StructuredLog`] so it is emitted with typed `tracing` fields at a
//! fixed level.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::dispatch` - rule selection, fallback and transform failures
//! * `messages::catalog` - catalog loading and validation
//! * `messages::relay` - remote (AI) tool gating and relay outcomes
//!
//! # Usage
//!
//! ```rust
//! use toolforge::observability::messages::{dispatch::RuleMatched, StructuredLog};
//!
//! let msg = RuleMatched {
//!     tool_name: "Base64 Encode",
//!     rule: "base64_encode",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
