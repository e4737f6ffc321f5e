// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_FALLBACK_ECHO_CHARS;

/// Generic summary for tools without a matching rule. Never fails.
pub fn fallback(tool_name: &str, input: &str) -> String {
    fallback_with_limit(tool_name, input, DEFAULT_FALLBACK_ECHO_CHARS)
}

/// Same as [`fallback`], echoing at most `echo_chars` characters of the input.
pub fn fallback_with_limit(tool_name: &str, input: &str, echo_chars: usize) -> String {
    let mut echo: String = input.chars().take(echo_chars).collect();
    if input.chars().nth(echo_chars).is_some() {
        echo.push_str("...");
    }
    format!(
        "✅ {} processed successfully!\n\nWords: {}\nCharacters: {}\nLines: {}\n\nContent:\n{}",
        tool_name,
        input.split_whitespace().count(),
        input.chars().count(),
        input.lines().count(),
        echo
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_summary() {
        let output = fallback("Totally Unknown Tool", "abc");
        assert_eq!(
            output,
            "✅ Totally Unknown Tool processed successfully!\n\nWords: 1\nCharacters: 3\nLines: 1\n\nContent:\nabc"
        );
    }

    #[test]
    fn test_fallback_truncates_echo() {
        let input = "x".repeat(501);
        let output = fallback("Tool", &input);
        assert!(output.ends_with(&format!("{}...", "x".repeat(500))));

        let exact = "y".repeat(500);
        assert!(!fallback("Tool", &exact).ends_with("..."));
    }

    #[test]
    fn test_fallback_empty_input() {
        let output = fallback_with_limit("Tool", "", 10);
        assert!(output.contains("Words: 0"));
        assert!(output.contains("Lines: 0"));
        assert!(output.ends_with("Content:\n"));
    }
}
