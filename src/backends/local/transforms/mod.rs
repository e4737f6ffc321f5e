// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The transformation library, one module per tool family.
//!
//! Functions take the raw input and return either a `String` (cannot fail) or
//! a [`ToolResult`](crate::errors::ToolResult). Randomness and the clock are
//! passed in explicitly where a tool needs them.

pub mod analysis;
pub mod calculators;
pub mod case;
pub mod cipher;
pub mod cleaners;
pub mod datetime;
pub mod digest;
pub mod encoding;
pub mod generators;
pub mod lines;
pub mod minify;
pub mod radix;
pub mod reverse;
pub mod social;
pub mod structured;
pub mod units;
pub mod web;

/// Every decimal number in the input, in order of appearance.
pub fn numbers(input: &str) -> Vec<f64> {
    static_regex!(r"-?\d+(?:\.\d+)?")
        .find_iter(input)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(numbers("70 kg, 175.5cm and -3"), vec![70.0, 175.5, -3.0]);
        assert!(numbers("no digits").is_empty());
    }
}
