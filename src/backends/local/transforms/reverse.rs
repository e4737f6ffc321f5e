// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_REPEAT_COUNT, MAX_REPEAT_COUNT};

/// Reverse the whole string by characters.
pub fn reverse_text(input: &str) -> String {
    input.chars().rev().collect()
}

/// Reverse the order of space-delimited words.
pub fn reverse_words(input: &str) -> String {
    input.split(' ').rev().collect::<Vec<_>>().join(" ")
}

pub fn reverse_lines(input: &str) -> String {
    input.lines().rev().collect::<Vec<_>>().join("\n")
}

/// Mirror each line in place, keeping line order.
pub fn mirror(input: &str) -> String {
    input
        .lines()
        .map(reverse_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitute look-alike glyphs on the lower-cased text, then reverse it.
pub fn upside_down(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(flip_char)
        .rev()
        .collect()
}

fn flip_char(ch: char) -> char {
    match ch {
        'a' => 'ɐ',
        'b' => 'q',
        'c' => 'ɔ',
        'd' => 'p',
        'e' => 'ǝ',
        'f' => 'ɟ',
        'g' => 'ƃ',
        'h' => 'ɥ',
        'i' => 'ᴉ',
        'j' => 'ɾ',
        'k' => 'ʞ',
        'm' => 'ɯ',
        'n' => 'u',
        'p' => 'd',
        'q' => 'b',
        'r' => 'ɹ',
        't' => 'ʇ',
        'u' => 'n',
        'v' => 'ʌ',
        'w' => 'ʍ',
        'y' => 'ʎ',
        '1' => 'Ɩ',
        '2' => 'ᄅ',
        '3' => 'Ɛ',
        '4' => 'ㄣ',
        '5' => 'ϛ',
        '6' => '9',
        '7' => 'ㄥ',
        '9' => '6',
        '.' => '˙',
        ',' => '\'',
        '\'' => ',',
        '"' => '„',
        '?' => '¿',
        '!' => '¡',
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '_' => '‾',
        '&' => '⅋',
        other => other,
    }
}

/// Line 1 is the text, line 2 the repeat count.
///
/// A missing, zero or non-numeric count means 3; counts above 100 are capped.
pub fn repeat(input: &str) -> String {
    let mut lines = input.lines();
    let text = lines.next().unwrap_or_default();
    let count = lines
        .next()
        .and_then(|line| line.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_REPEAT_COUNT)
        .min(MAX_REPEAT_COUNT);

    vec![text; count].join("\n")
}
