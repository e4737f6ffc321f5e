// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::errors::{ToolError, ToolResult};
use crate::traits::random::{shuffle, RandomSource};

/// Drop repeated lines, keeping the first occurrence and the original order.
pub fn dedupe(input: &str) -> String {
    let mut seen = HashSet::new();
    input
        .lines()
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lines that are empty or whitespace-only are removed.
pub fn remove_empty(input: &str) -> String {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sort_ascending(input: &str) -> String {
    let mut lines: Vec<&str> = input.lines().collect();
    lines.sort();
    lines.join("\n")
}

pub fn sort_descending(input: &str) -> String {
    let mut lines: Vec<&str> = input.lines().collect();
    lines.sort_by(|a, b| b.cmp(a));
    lines.join("\n")
}

pub fn shuffle_lines(input: &str, rng: &mut dyn RandomSource) -> String {
    let mut lines: Vec<&str> = input.lines().collect();
    shuffle(rng, &mut lines);
    lines.join("\n")
}

/// `1. first`, `2. second`, ...
pub fn number_lines(input: &str) -> String {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The last line is the literal; every preceding line gets it in front.
pub fn add_prefix(input: &str) -> ToolResult {
    let (lines, prefix) = split_affix(input, "text lines followed by the prefix on the last line")?;
    Ok(lines
        .iter()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// The last line is the literal; every preceding line gets it appended.
pub fn add_suffix(input: &str) -> ToolResult {
    let (lines, suffix) = split_affix(input, "text lines followed by the suffix on the last line")?;
    Ok(lines
        .iter()
        .map(|line| format!("{}{}", line, suffix))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn split_affix<'a>(input: &'a str, hint: &'static str) -> Result<(Vec<&'a str>, &'a str), ToolError> {
    let mut lines: Vec<&str> = input.lines().collect();
    if lines.len() < 2 {
        return Err(ToolError::MissingInput(hint));
    }
    let affix = lines.pop().unwrap_or_default();
    Ok((lines, affix))
}
