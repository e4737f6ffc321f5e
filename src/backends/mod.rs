// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Implementations behind the engine's seams.
//!
//! ## Local Backend
//! In-process transforms selected by the ordered rule table:
//! - **Rules**: keyword predicates over the tool name, first match wins
//! - **Transforms**: one module per tool family (case, encoding, ciphers,
//!   structured data, generators, calculators, date/time and more)
//!
//! ## Stub Backend
//! [`stub::OfflineRelay`] stands in for the AI gateway when none is
//! configured. Test builds also get a scripted relay for exercising the hub.
//!
//! ## Usage
//! [`usage::DailyUsageCounter`] keeps the per-day quota for remote tools in
//! memory.
//!
//! # Example
//! ```rust
//! use toolforge::backends::local::find_rule;
//!
//! let rule = find_rule("base64 encode", "base64-encode").unwrap();
//! assert_eq!(rule.tag, "base64_encode");
//! ```

pub mod local;
pub mod stub;
pub mod usage;
