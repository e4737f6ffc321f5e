// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Case conversions. A "word" starts after any whitespace character, so the
//! original spacing and line breaks survive every conversion.

use crate::utils::Report;

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

/// Capitalize the first letter of each word and lower-case the rest.
pub fn title(input: &str) -> String {
    map_words(input, |first, rest| {
        first.to_uppercase().collect::<String>() + &rest.to_lowercase()
    })
}

/// Capitalize the first letter of each word, leaving the rest untouched.
pub fn capitalize_words(input: &str) -> String {
    map_words(input, |first, rest| first.to_uppercase().collect::<String>() + rest)
}

/// Upper-case the first letter of the text, lower-case everything else.
pub fn sentence(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut chars = lowered.chars();
    let mut result = String::with_capacity(lowered.len());
    for ch in chars.by_ref() {
        if ch.is_alphabetic() {
            result.extend(ch.to_uppercase());
            break;
        }
        result.push(ch);
    }
    result.push_str(chars.as_str());
    result
}

/// Even character index upper, odd index lower (0-indexed over all characters).
pub fn alternating(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if i % 2 == 0 {
                ch.to_uppercase().collect::<String>()
            } else {
                ch.to_lowercase().collect::<String>()
            }
        })
        .collect()
}

/// Invert the case of every character.
pub fn toggle(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            if ch.is_uppercase() {
                ch.to_lowercase().collect::<String>()
            } else {
                ch.to_uppercase().collect::<String>()
            }
        })
        .collect()
}

/// Every variant at once, for the generic "Case Converter" tool.
pub fn all_cases(input: &str) -> String {
    Report::new("🔤", "Case Conversions")
        .field("UPPERCASE", upper(input))
        .field("lowercase", lower(input))
        .field("Title Case", title(input))
        .field("Sentence case", sentence(input))
        .field("aLtErNaTiNg", alternating(input))
        .field("tOGGLE cASE", toggle(input))
        .into()
}

fn map_words<F>(input: &str, mut convert: F) -> String
where
    F: FnMut(char, &str) -> String,
{
    let mut result = String::with_capacity(input.len());
    let mut word_start: Option<usize> = None;

    for (i, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                result.push_str(&convert_word(&input[start..i], &mut convert));
            }
            result.push(ch);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        result.push_str(&convert_word(&input[start..], &mut convert));
    }
    result
}

fn convert_word<F>(word: &str, convert: &mut F) -> String
where
    F: FnMut(char, &str) -> String,
{
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => convert(first, chars.as_str()),
        None => String::new(),
    }
}
