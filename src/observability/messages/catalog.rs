// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for catalog loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Catalog loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use toolforge::observability::messages::catalog::CatalogLoaded;
///
/// let msg = CatalogLoaded {
///     source: "configs/catalog.yaml",
///     tool_count: 42,
///     remote_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CatalogLoaded<'a> {
    pub source: &'a str,
    pub tool_count: usize,
    pub remote_count: usize,
}

impl Display for CatalogLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded tool catalog from {}: {} tools ({} remote)",
            self.source, self.tool_count, self.remote_count
        )
    }
}

impl StructuredLog for CatalogLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            tool_count = self.tool_count,
            remote_count = self.remote_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("catalog", span_name = name, source = self.source)
    }
}

/// Catalog validation rejected an entry.
///
/// # Log Level
/// `error!` - Configuration must be fixed
pub struct CatalogEntryRejected<'a> {
    pub reason: &'a str,
}

impl Display for CatalogEntryRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Catalog validation error: {}", self.reason)
    }
}

impl StructuredLog for CatalogEntryRejected<'_> {
    fn log(&self) {
        tracing::error!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("catalog_validation", span_name = name, reason = self.reason)
    }
}

/// Key did not resolve to a catalog entry.
///
/// # Log Level
/// `debug!` - Expected for ad-hoc names; the fallback handles it
pub struct ToolNotInCatalog<'a> {
    pub key: &'a str,
}

impl Display for ToolNotInCatalog<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "'{}' is not in the catalog, dispatching by name", self.key)
    }
}

impl StructuredLog for ToolNotInCatalog<'_> {
    fn log(&self) {
        tracing::debug!(key = self.key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("catalog_lookup", span_name = name, key = self.key)
    }
}
