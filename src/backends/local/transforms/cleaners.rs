// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::transforms::encoding::html_decode;

/// Every whitespace run becomes one space; ends are trimmed.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn trim_lines(input: &str) -> String {
    input.lines().map(str::trim).collect::<Vec<_>>().join("\n")
}

pub fn remove_line_breaks(input: &str) -> String {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn tabs_to_spaces(input: &str) -> String {
    input.replace('\t', "    ")
}

pub fn spaces_to_tabs(input: &str) -> String {
    input.replace("    ", "\t")
}

/// ASCII punctuation only; letters, digits and whitespace survive.
pub fn remove_punctuation(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

pub fn strip_html(input: &str) -> String {
    let without_blocks = static_regex!(r"(?is)<(script|style)\b.*?</(script|style)>").replace_all(input, "");
    let without_tags = static_regex!(r"<[^>]*>").replace_all(&without_blocks, "");
    trim_lines(&html_decode(&without_tags))
}
