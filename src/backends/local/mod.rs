// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod rules;
pub mod transforms;

pub use rules::{find_rule, rules, Apply, Keywords, MatchRule};
