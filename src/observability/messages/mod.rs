// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `dispatch` - rule selection and transform lifecycle events
//! * `catalog` - catalog loading and validation events
//! * `relay` - remote tool quota and relay events

use tracing::Span;

pub mod catalog;
pub mod dispatch;
pub mod relay;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
