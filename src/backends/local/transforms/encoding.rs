// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reversible text encodings.
//!
//! Every decoder reports malformed input as a [`ToolError::InvalidInput`]
//! instead of panicking. Byte-oriented encodings (binary, hex, octal) work on
//! the UTF-8 bytes of the input, so non-ASCII text round-trips as well.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::{ToolError, ToolResult};

pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

pub fn base64_decode(input: &str) -> ToolResult {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|_| ToolError::InvalidInput("Base64 input"))?;
    String::from_utf8(bytes).map_err(|_| ToolError::InvalidInput("Base64 input (not UTF-8 text)"))
}

/// Percent-encode everything except the `encodeURIComponent` unreserved set.
pub fn url_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

pub fn url_decode(input: &str) -> ToolResult {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input
                .get(i + 1..i + 3)
                .ok_or(ToolError::InvalidInput("URL-encoded input"))?;
            let byte = radix_digits(hex, 16)
                .then(|| u8::from_str_radix(hex, 16).ok())
                .flatten()
                .ok_or(ToolError::InvalidInput("URL-encoded input"))?;
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(decoded).map_err(|_| ToolError::InvalidInput("URL-encoded input"))
}

pub fn html_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#39;"),
            other => encoded.push(other),
        }
    }
    encoded
}

/// Single pass over the text so `&amp;lt;` decodes to `&lt;`, not `<`.
/// Unknown entities are left as written.
pub fn html_decode(input: &str) -> String {
    let mut decoded = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let entity_end = rest
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);

        match entity_end.and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end))) {
            Some((ch, end)) => {
                decoded.push(ch);
                rest = &rest[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

/// `\uXXXX` per UTF-16 code unit, lower-case hex.
pub fn unicode_escape(input: &str) -> String {
    input
        .encode_utf16()
        .map(|unit| format!("\\u{:04x}", unit))
        .collect()
}

/// Decode `\uXXXX` sequences (surrogate pairs included); other text passes through.
pub fn unicode_unescape(input: &str) -> ToolResult {
    let mut units: Vec<u16> = Vec::with_capacity(input.len());
    let mut rest = input;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("\\u") {
            let hex = after
                .get(..4)
                .ok_or(ToolError::InvalidInput("Unicode escape sequence"))?;
            let unit = radix_digits(hex, 16)
                .then(|| u16::from_str_radix(hex, 16).ok())
                .flatten()
                .ok_or(ToolError::InvalidInput("Unicode escape sequence"))?;
            units.push(unit);
            rest = &after[4..];
        } else {
            let ch = rest.chars().next().unwrap_or_default();
            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            rest = &rest[ch.len_utf8()..];
        }
    }

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| ToolError::InvalidInput("Unicode escape sequence (unpaired surrogate)"))
}

/// 8 bits per byte, space separated.
pub fn binary_encode(input: &str) -> String {
    join_bytes(input, |b| format!("{:08b}", b))
}

pub fn binary_decode(input: &str) -> ToolResult {
    decode_groups(input, 2, "binary input")
}

/// Two lower-case hex digits per byte, space separated.
pub fn hex_encode(input: &str) -> String {
    join_bytes(input, |b| format!("{:02x}", b))
}

/// Accepts space separated pairs or one run of hex digits, with optional `0x`.
pub fn hex_decode(input: &str) -> ToolResult {
    let cleaned = input.replace("0x", " ").replace("0X", " ");
    if cleaned.split_whitespace().count() == 1 {
        let run = cleaned.trim();
        if run.len() % 2 != 0 || !run.is_ascii() {
            return Err(ToolError::InvalidInput("hex input"));
        }
        let pairs: Vec<&str> = (0..run.len()).step_by(2).map(|i| &run[i..i + 2]).collect();
        return decode_groups(&pairs.join(" "), 16, "hex input");
    }
    decode_groups(&cleaned, 16, "hex input")
}

/// Three octal digits per byte, space separated.
pub fn octal_encode(input: &str) -> String {
    join_bytes(input, |b| format!("{:03o}", b))
}

pub fn octal_decode(input: &str) -> ToolResult {
    decode_groups(input, 8, "octal input")
}

fn join_bytes(input: &str, render: impl Fn(u8) -> String) -> String {
    input.bytes().map(render).collect::<Vec<_>>().join(" ")
}

/// True when `digits` is non-empty and made only of digits in `radix`;
/// `from_str_radix` alone also takes a leading `+`.
fn radix_digits(digits: &str, radix: u32) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

fn decode_groups(input: &str, radix: u32, what: &'static str) -> ToolResult {
    let bytes = input
        .split_whitespace()
        .map(|group| {
            radix_digits(group, radix)
                .then(|| u8::from_str_radix(group, radix).ok())
                .flatten()
        })
        .collect::<Option<Vec<u8>>>()
        .ok_or(ToolError::InvalidInput(what))?;
    String::from_utf8(bytes).map_err(|_| ToolError::InvalidInput(what))
}
