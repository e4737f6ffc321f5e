// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for remote (AI) tools.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Remote tool call was refused because today's quota is spent.
///
/// # Log Level
/// `warn!` - Degraded behavior visible to the user
pub struct QuotaExhausted<'a> {
    pub tool_id: &'a str,
    pub limit: u32,
}

impl Display for QuotaExhausted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Daily AI quota of {} exhausted, refusing tool '{}'",
            self.limit, self.tool_id
        )
    }
}

impl StructuredLog for QuotaExhausted<'_> {
    fn log(&self) {
        tracing::warn!(tool_id = self.tool_id, limit = self.limit, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("quota", span_name = name, tool_id = self.tool_id)
    }
}

/// Relay returned an error payload.
///
/// # Log Level
/// `error!` - External service failure
pub struct RelayFailed<'a> {
    pub tool_id: &'a str,
    pub error: &'a str,
}

impl Display for RelayFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "AI relay failed for tool '{}': {}", self.tool_id, self.error)
    }
}

impl StructuredLog for RelayFailed<'_> {
    fn log(&self) {
        tracing::error!(tool_id = self.tool_id, error = self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("relay", span_name = name, tool_id = self.tool_id)
    }
}

/// Relay produced content.
///
/// # Log Level
/// `info!` - Quota-consuming operation
pub struct RelayCompleted<'a> {
    pub tool_id: &'a str,
    pub content_size: usize,
    pub remaining: u32,
}

impl Display for RelayCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "AI relay completed for tool '{}': {} bytes, {} generations left today",
            self.tool_id, self.content_size, self.remaining
        )
    }
}

impl StructuredLog for RelayCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            tool_id = self.tool_id,
            content_size = self.content_size,
            remaining = self.remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("relay", span_name = name, tool_id = self.tool_id)
    }
}
