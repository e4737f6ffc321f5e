// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Output templating shared by every tool family.
//!
//! Tool output is a plain string rendered verbatim in a pre-formatted block, so
//! the layout is part of the contract: a title line carrying an emoji marker, a
//! blank line, then `Label: value` fields and free-form lines in the order they
//! were added.

use std::fmt::{self, Display, Formatter};

/// Builder for the labeled multi-line reports most tools return.
///
/// ```
/// use toolforge::utils::Report;
///
/// let report = Report::new("📊", "Text Statistics")
///     .field("Words", 4)
///     .field("Characters", 19);
///
/// assert_eq!(report.to_string(), "📊 Text Statistics:\n\nWords: 4\nCharacters: 19");
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    lines: Vec<String>,
}

impl Report {
    pub fn new(marker: &str, title: &str) -> Self {
        Self {
            title: format!("{} {}:", marker, title),
            lines: Vec::new(),
        }
    }

    pub fn field(mut self, label: &str, value: impl Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Blank line followed by a section heading.
    pub fn section(self, heading: &str) -> Self {
        self.blank().line(heading)
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.lines.is_empty() {
            write!(f, "\n\n{}", self.lines.join("\n"))?;
        }
        Ok(())
    }
}

impl From<Report> for String {
    fn from(report: Report) -> Self {
        report.to_string()
    }
}

/// `value` with exactly `decimals` digits after the point.
pub fn fixed(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value);
    // -0.00 reads badly in calculator output
    if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Integer with `,` thousands separators: `1234567` -> `1,234,567`.
pub fn thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Two decimals plus thousands separators: `1234.5` -> `1,234.50`.
///
/// Non-finite values are rendered as-is (`inf`, `NaN`); callers that can
/// overflow reject those before formatting.
pub fn money(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = fixed(value, 2);
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{}{}.{}", sign, group_digits(whole), fraction)
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let report = Report::new("💰", "Tip")
            .field("Tip", "7.50")
            .section("Split:")
            .line("Per person: 28.75");

        assert_eq!(
            report.to_string(),
            "💰 Tip:\n\nTip: 7.50\n\nSplit:\nPer person: 28.75"
        );
    }

    #[test]
    fn test_report_without_lines() {
        assert_eq!(Report::new("✅", "Done").to_string(), "✅ Done:");
    }

    #[test]
    fn test_thousands() {
        let cases = vec![
            (0, "0"),
            (999, "999"),
            (1000, "1,000"),
            (1234567, "1,234,567"),
            (-98765, "-98,765"),
        ];
        for (input, expected) in cases {
            assert_eq!(thousands(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_money() {
        assert_eq!(money(1234.5), "1,234.50");
        assert_eq!(money(0.004), "0.00");
        assert_eq!(money(-1500.256), "-1,500.26");
        assert_eq!(money(999999.999), "1,000,000.00");
    }

    #[test]
    fn test_money_beyond_i64_range() {
        assert_eq!(money(1e20), "100,000,000,000,000,000,000.00");
        assert_eq!(money(-2.5e19), "-25,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_money_non_finite() {
        assert_eq!(money(f64::INFINITY), "inf");
        assert_eq!(money(f64::NAN), "NaN");
    }

    #[test]
    fn test_fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.0001, 2), "0.00");
        assert_eq!(fixed(2.345, 1), "2.3");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "day", "days"), "1 day");
        assert_eq!(plural(3, "day", "days"), "3 days");
    }
}
