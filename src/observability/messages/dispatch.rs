// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the dispatcher.
//!
//! This module contains message types for logging events related to:
//! * Rule selection for a tool name
//! * Fallback handling of unrecognised tools
//! * Transform failures and caught panics
//! * Per-call sizes and durations

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Dispatch started for a tool.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct DispatchStarted<'a> {
    pub tool_name: &'a str,
    pub tool_id: &'a str,
    pub input_size: usize,
}

impl Display for DispatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching tool '{}' (id='{}'): input_size={} bytes",
            self.tool_name, self.tool_id, self.input_size
        )
    }
}

impl StructuredLog for DispatchStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            tool_name = self.tool_name,
            tool_id = self.tool_id,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "dispatch",
            span_name = name,
            tool_name = self.tool_name,
            tool_id = self.tool_id,
        )
    }
}

/// A rule matched the tool name.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct RuleMatched<'a> {
    pub tool_name: &'a str,
    pub rule: &'a str,
}

impl Display for RuleMatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tool '{}' matched rule '{}'", self.tool_name, self.rule)
    }
}

impl StructuredLog for RuleMatched<'_> {
    fn log(&self) {
        tracing::debug!(tool_name = self.tool_name, rule = self.rule, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("rule", span_name = name, rule = self.rule)
    }
}

/// No rule matched; the fallback summary is returned instead.
///
/// # Log Level
/// `info!` - Worth noticing when the catalog and rule table drift apart
pub struct FallbackUsed<'a> {
    pub tool_name: &'a str,
}

impl Display for FallbackUsed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No rule matched tool '{}', using generic fallback",
            self.tool_name
        )
    }
}

impl StructuredLog for FallbackUsed<'_> {
    fn log(&self) {
        tracing::info!(tool_name = self.tool_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("fallback", span_name = name, tool_name = self.tool_name)
    }
}

/// A rule rejected its input.
///
/// # Log Level
/// `warn!` - User input problem, reported inline
pub struct TransformFailed<'a> {
    pub rule: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TransformFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rule '{}' failed: {}", self.rule, self.error)
    }
}

impl StructuredLog for TransformFailed<'_> {
    fn log(&self) {
        tracing::warn!(rule = self.rule, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("transform_failed", span_name = name, rule = self.rule)
    }
}

/// A rule panicked and the panic was caught at the dispatcher boundary.
///
/// # Log Level
/// `error!` - Bug in a transform
pub struct TransformPanicked<'a> {
    pub rule: &'a str,
    pub message: &'a str,
}

impl Display for TransformPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rule '{}' panicked: {}", self.rule, self.message)
    }
}

impl StructuredLog for TransformPanicked<'_> {
    fn log(&self) {
        tracing::error!(rule = self.rule, panic_message = self.message, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("transform_panicked", span_name = name, rule = self.rule)
    }
}

/// Dispatch finished.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct DispatchCompleted<'a> {
    pub rule: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for DispatchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rule '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.rule, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for DispatchCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            rule = self.rule,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("dispatch_completed", span_name = name, rule = self.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matched_display() {
        let msg = RuleMatched {
            tool_name: "ROT13",
            rule: "rot13",
        };
        assert_eq!(msg.to_string(), "Tool 'ROT13' matched rule 'rot13'");
    }

    #[test]
    fn test_transform_failed_display() {
        let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad input");
        let msg = TransformFailed {
            rule: "hex_decode",
            error: &error,
        };
        assert_eq!(msg.to_string(), "Rule 'hex_decode' failed: bad input");
    }

    #[test]
    fn test_dispatch_completed_display() {
        let msg = DispatchCompleted {
            rule: "reverse_text",
            input_size: 5,
            output_size: 5,
            duration: Duration::from_millis(2),
        };
        assert!(msg.to_string().contains("input=5 bytes, output=5 bytes"));
    }
}
