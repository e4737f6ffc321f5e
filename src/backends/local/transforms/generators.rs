// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Random generators. Every function takes the random source explicitly so
//! callers (and tests) decide where the entropy comes from.

use crate::backends::local::transforms::numbers;
use crate::config::consts::{DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::errors::{ToolError, ToolResult};
use crate::traits::random::{between, pick, shuffle, RandomSource};
use crate::utils::Report;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const PASSPHRASE_WORDS: &[&str] = &[
    "apple", "river", "stone", "cloud", "tiger", "maple", "ocean", "piano", "rocket", "garden",
    "silver", "forest", "candle", "window", "planet", "thunder", "violet", "harbor", "meadow",
    "falcon", "copper", "lantern", "orbit", "pepper", "summit", "velvet", "willow", "zebra",
    "glacier", "puzzle", "saddle", "compass",
];

fn first_number(input: &str) -> Option<f64> {
    numbers(input).into_iter().next()
}

fn pick_byte(rng: &mut dyn RandomSource, set: &[u8]) -> char {
    set[rng.below(set.len())] as char
}

/// Requested length, or the default when absent or not a number. Clamped to
/// the supported range.
pub fn password_length(input: &str) -> usize {
    match first_number(input) {
        Some(n) if n >= 1.0 => (n as usize).clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH),
        Some(_) => MIN_PASSWORD_LENGTH,
        None => DEFAULT_PASSWORD_LENGTH,
    }
}

/// Random password with at least one character from every class.
pub fn password(input: &str, rng: &mut dyn RandomSource) -> String {
    let length = password_length(input);
    let classes = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
    let pool: Vec<u8> = classes.concat();

    let mut chars: Vec<char> = classes.iter().map(|set| pick_byte(rng, set)).collect();
    while chars.len() < length {
        chars.push(pick_byte(rng, &pool));
    }
    shuffle(rng, &mut chars);
    chars.into_iter().collect()
}

pub fn password_strength(input: &str) -> ToolResult {
    let candidate = input.trim_end_matches(['\r', '\n']);
    if candidate.is_empty() {
        return Err(ToolError::MissingInput("a password to check"));
    }
    let length = candidate.chars().count();
    let has_lower = candidate.chars().any(|c| c.is_lowercase());
    let has_upper = candidate.chars().any(|c| c.is_uppercase());
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_symbol = candidate.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let checks = [
        (length >= 8, "Use at least 8 characters"),
        (length >= 12, "Use 12 or more characters"),
        (has_lower, "Add lowercase letters"),
        (has_upper, "Add uppercase letters"),
        (has_digit, "Add numbers"),
        (has_symbol, "Add symbols"),
    ];
    let score = checks.iter().filter(|(passed, _)| *passed).count();
    let verdict = match score {
        0..=2 => "Weak",
        3..=4 => "Moderate",
        5 => "Strong",
        _ => "Very Strong",
    };

    let mut report = Report::new("🔒", "Password Strength")
        .field("Length", length)
        .field("Score", format!("{}/{}", score, checks.len()))
        .field("Strength", verdict);
    let tips: Vec<String> = checks
        .iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, tip)| format!("• {}", tip))
        .collect();
    if !tips.is_empty() {
        report = report.section("Suggestions:").lines(tips);
    }
    Ok(report.into())
}

pub fn passphrase(_input: &str, rng: &mut dyn RandomSource) -> String {
    (0..4)
        .filter_map(|_| pick(rng, PASSPHRASE_WORDS).copied())
        .collect::<Vec<_>>()
        .join("-")
}

fn count_between(input: &str, default: usize, max: usize) -> usize {
    match first_number(input) {
        Some(n) if n >= 1.0 => (n as usize).min(max),
        _ => default,
    }
}

/// Version 4 UUIDs, one per line.
pub fn uuids(input: &str, rng: &mut dyn RandomSource) -> String {
    (0..count_between(input, 1, 50))
        .map(|_| {
            let mut bytes = [0u8; 16];
            rng.fill(&mut bytes);
            uuid::Builder::from_random_bytes(bytes)
                .into_uuid()
                .hyphenated()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn short_id(_input: &str, rng: &mut dyn RandomSource) -> String {
    (0..21).map(|_| pick_byte(rng, ALPHANUMERIC)).collect()
}

pub fn random_number(input: &str, rng: &mut dyn RandomSource) -> String {
    let bounds = numbers(input);
    let (mut low, mut high) = match bounds.as_slice() {
        [a, b, ..] => (*a as i64, *b as i64),
        [b] => (1, *b as i64),
        [] => (1, 100),
    };
    if low > high {
        std::mem::swap(&mut low, &mut high);
    }
    Report::new("🎲", "Random Number")
        .field("Result", between(rng, low, high))
        .field("Range", format!("{} - {}", low, high))
        .into()
}

pub fn dice(input: &str, rng: &mut dyn RandomSource) -> String {
    let (count, sides) = static_regex!(r"(?i)(\d+)?\s*d\s*(\d+)")
        .captures(input)
        .map(|caps| {
            let count = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(1usize);
            let sides = caps[2].parse().unwrap_or(6i64);
            (count, sides)
        })
        .unwrap_or((1, 6));
    let count = count.clamp(1, 100);
    let sides = sides.clamp(2, 1000);

    let rolls: Vec<i64> = (0..count).map(|_| between(rng, 1, sides)).collect();
    let total: i64 = rolls.iter().sum();
    Report::new("🎲", "Dice Roll")
        .field("Dice", format!("{}d{}", count, sides))
        .field(
            "Rolls",
            rolls.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", "),
        )
        .field("Total", total)
        .into()
}

pub fn coin_flip(input: &str, rng: &mut dyn RandomSource) -> String {
    let flips = count_between(input, 1, 100);
    let heads = (0..flips).filter(|_| rng.below(2) == 0).count();
    if flips == 1 {
        let side = if heads == 1 { "Heads" } else { "Tails" };
        return Report::new("🪙", "Coin Flip").field("Result", side).into();
    }
    Report::new("🪙", "Coin Flips")
        .field("Flips", flips)
        .field("Heads", heads)
        .field("Tails", flips - heads)
        .into()
}

/// One entry per line, or comma-separated on a single line.
pub fn name_picker(input: &str, rng: &mut dyn RandomSource) -> ToolResult {
    let separator = if input.trim().contains('\n') { '\n' } else { ',' };
    let names: Vec<&str> = input
        .split(separator)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    let winner = pick(rng, &names).ok_or(ToolError::MissingInput("at least one name"))?;
    Ok(Report::new("🎯", "Name Picker")
        .field("Winner", winner)
        .field("Entries", names.len())
        .into())
}

/// `count` unique numbers from 1..=`max`, sorted. Defaults to 6 of 49.
pub fn lottery(input: &str, rng: &mut dyn RandomSource) -> String {
    let values = numbers(input);
    let max = values.get(1).map_or(49, |m| (*m as usize).clamp(1, 1000));
    let count = values.first().map_or(6, |c| (*c as usize).clamp(1, max));

    let mut pool: Vec<usize> = (1..=max).collect();
    shuffle(rng, &mut pool);
    let mut drawn: Vec<usize> = pool.into_iter().take(count).collect();
    drawn.sort_unstable();

    Report::new("🎰", "Lottery Numbers")
        .field(
            "Numbers",
            drawn.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", "),
        )
        .field("Draw", format!("{} of {}", count, max))
        .into()
}

pub fn random_color(_input: &str, rng: &mut dyn RandomSource) -> String {
    let mut rgb = [0u8; 3];
    rng.fill(&mut rgb);
    Report::new("🎨", "Random Color")
        .field("HEX", format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2]))
        .field("RGB", format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2]))
        .into()
}

const LOREM_SENTENCES: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
];

/// Paragraph count from the input (default 3, max 20). Deterministic.
pub fn lorem_ipsum(input: &str) -> String {
    let paragraphs = count_between(input, 3, 20);
    (0..paragraphs)
        .map(|p| {
            (0..LOREM_SENTENCES.len())
                .map(|s| LOREM_SENTENCES[(p + s) % LOREM_SENTENCES.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
