// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Integer base conversion. Each whitespace-separated number is converted on
//! its own line so a column of values can be pasted at once.

use crate::errors::{ToolError, ToolResult};
use crate::utils::Report;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hex => "0x",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        }
    }

    fn render(self, value: i128) -> String {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        let digits = match self {
            Radix::Binary => format!("{:b}", magnitude),
            Radix::Octal => format!("{:o}", magnitude),
            Radix::Decimal => magnitude.to_string(),
            Radix::Hex => format!("{:X}", magnitude),
        };
        format!("{}{}", sign, digits)
    }
}

fn parse(token: &str, from: Radix) -> Result<i128, ToolError> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let prefix = from.prefix();
    let body = if prefix.is_empty() {
        body
    } else {
        body.strip_prefix(prefix)
            .or_else(|| body.strip_prefix(&prefix.to_uppercase()))
            .unwrap_or(body)
    };
    let body = body.replace('_', "");

    let value = i128::from_str_radix(&body, from.base()).map_err(|_| match from {
        Radix::Binary => ToolError::InvalidInput("binary number"),
        Radix::Octal => ToolError::InvalidInput("octal number"),
        Radix::Decimal => ToolError::InvalidInput("decimal number"),
        Radix::Hex => ToolError::InvalidInput("hex number"),
    })?;
    Ok(if negative { -value } else { value })
}

/// Convert every number in `input` from one base to another.
pub fn convert(input: &str, from: Radix, to: Radix) -> ToolResult {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ToolError::MissingInput(match from {
            Radix::Binary => "a binary number",
            Radix::Octal => "an octal number",
            Radix::Decimal => "a decimal number",
            Radix::Hex => "a hex number",
        }));
    }

    let converted = tokens
        .iter()
        .map(|token| parse(token, from).map(|value| to.render(value)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(converted.join("\n"))
}

pub fn decimal_to_binary(input: &str) -> ToolResult {
    convert(input, Radix::Decimal, Radix::Binary)
}

pub fn binary_to_decimal(input: &str) -> ToolResult {
    convert(input, Radix::Binary, Radix::Decimal)
}

pub fn decimal_to_hex(input: &str) -> ToolResult {
    convert(input, Radix::Decimal, Radix::Hex)
}

pub fn hex_to_decimal(input: &str) -> ToolResult {
    convert(input, Radix::Hex, Radix::Decimal)
}

pub fn decimal_to_octal(input: &str) -> ToolResult {
    convert(input, Radix::Decimal, Radix::Octal)
}

pub fn octal_to_decimal(input: &str) -> ToolResult {
    convert(input, Radix::Octal, Radix::Decimal)
}

/// Show a number in every base. A `0b`, `0o` or `0x` prefix selects the input
/// base, otherwise decimal is assumed.
pub fn base_converter(input: &str) -> ToolResult {
    let token = input.trim();
    if token.is_empty() {
        return Err(ToolError::MissingInput("a number"));
    }
    let lower = token.trim_start_matches('-').to_lowercase();
    let from = if lower.starts_with("0b") {
        Radix::Binary
    } else if lower.starts_with("0o") {
        Radix::Octal
    } else if lower.starts_with("0x") {
        Radix::Hex
    } else {
        Radix::Decimal
    };
    let value = parse(token, from)?;

    let mut report = Report::new("🔢", "Number Base Conversion").field("Input", format!("{} ({})", token, from.label()));
    report = report.blank();
    for radix in [Radix::Decimal, Radix::Binary, Radix::Octal, Radix::Hex] {
        let mut label = radix.label().to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        report = report.field(&label, radix.render(value));
    }
    Ok(report.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_binary_round_trip() {
        assert_eq!(decimal_to_binary("10").unwrap(), "1010");
        assert_eq!(binary_to_decimal("1010").unwrap(), "10");
        assert_eq!(decimal_to_binary("0 1 -5").unwrap(), "0\n1\n-101");
        assert_eq!(binary_to_decimal("0b1111_0000").unwrap(), "240");
    }

    #[test]
    fn test_hex_and_octal() {
        assert_eq!(decimal_to_hex("255").unwrap(), "FF");
        assert_eq!(hex_to_decimal("0xff").unwrap(), "255");
        assert_eq!(decimal_to_octal("8").unwrap(), "10");
        assert_eq!(octal_to_decimal("777").unwrap(), "511");
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            binary_to_decimal("102").unwrap_err().to_string(),
            "Invalid binary number"
        );
        assert!(decimal_to_binary("").is_err());
        assert!(hex_to_decimal("xyz").is_err());
    }

    #[test]
    fn test_base_converter_detects_prefix() {
        let output = base_converter("0x1F").unwrap();
        assert!(output.contains("Decimal: 31"));
        assert!(output.contains("Binary: 11111"));
        assert!(output.contains("Octal: 37"));
        assert!(output.contains("Hex: 1F"));
    }
}
