// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text statistics, readability and extraction tools.

use std::collections::{HashMap, HashSet};

use regex::RegexBuilder;

use crate::backends::local::transforms::calculators::minutes;
use crate::config::consts::READING_WPM;
use crate::errors::{ToolError, ToolResult};
use crate::utils::{fixed, Report};

const MAX_LISTED_MATCHES: usize = 50;

/// Lower-cased words with everything but letters and digits removed.
fn normalized_words(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Word counts ordered by frequency, ties broken by first appearance.
fn frequencies(words: &[String]) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in words.iter().enumerate() {
        counts.entry(word.as_str()).or_insert((0, position)).0 += 1;
    }
    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().map(|(word, count, _)| (word, count)).collect()
}

fn sentence_count(input: &str) -> usize {
    static_regex!(r"[.!?]+")
        .split(input)
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn word_count(input: &str) -> String {
    let words = input.split_whitespace().count();
    let paragraphs = static_regex!(r"\n\s*\n")
        .split(input)
        .filter(|p| !p.trim().is_empty())
        .count();
    Report::new("📊", "Text Statistics")
        .field("Words", words)
        .field("Characters", input.chars().count())
        .field(
            "Characters (no spaces)",
            input.chars().filter(|c| !c.is_whitespace()).count(),
        )
        .field("Sentences", sentence_count(input))
        .field("Paragraphs", paragraphs)
        .field("Lines", input.lines().count())
        .field("Reading Time", minutes(words, READING_WPM))
        .into()
}

pub fn keyword_density(input: &str) -> ToolResult {
    let words = normalized_words(input);
    if words.is_empty() {
        return Err(ToolError::MissingInput("some text to analyze"));
    }
    let total = words.len() as f64;
    let top: Vec<String> = frequencies(&words)
        .into_iter()
        .take(10)
        .enumerate()
        .map(|(i, (word, count))| {
            format!("{}. {}: {} ({}%)", i + 1, word, count, fixed(count as f64 / total * 100.0, 2))
        })
        .collect();
    Ok(Report::new("🔑", "Keyword Density")
        .field("Total words", words.len())
        .section("Top keywords:")
        .lines(top)
        .into())
}

pub fn word_frequency(input: &str) -> ToolResult {
    let words = normalized_words(input);
    if words.is_empty() {
        return Err(ToolError::MissingInput("some text to analyze"));
    }
    let mut ranked = frequencies(&words);
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    Ok(Report::new("📈", "Word Frequency")
        .field("Total words", words.len())
        .field("Unique words", ranked.len())
        .section("Frequency:")
        .lines(ranked.iter().map(|(word, count)| format!("{}: {}", word, count)))
        .into())
}

/// Vowel-group estimate; a trailing silent `e` is not counted.
fn syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.len() <= 3 {
        return 1;
    }
    let is_vowel = |c: char| "aeiouy".contains(c);
    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }
    let silent_e = letters.ends_with(&['e']) && !letters.ends_with(&['l', 'e']);
    if silent_e && groups > 1 {
        groups -= 1;
    }
    groups.max(1)
}

pub fn grade_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy (5th grade)"
    } else if score >= 80.0 {
        "Easy (6th grade)"
    } else if score >= 70.0 {
        "Fairly Easy (7th grade)"
    } else if score >= 60.0 {
        "Standard (8th-9th grade)"
    } else if score >= 50.0 {
        "Fairly Difficult (10th-12th grade)"
    } else {
        "Difficult (College)"
    }
}

pub fn flesch_score(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words = words.max(1) as f64;
    let sentences = sentences.max(1) as f64;
    206.835 - 1.015 * (words / sentences) - 84.6 * (syllables as f64 / words)
}

pub fn readability(input: &str) -> ToolResult {
    let words: Vec<&str> = input
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .collect();
    if words.is_empty() {
        return Err(ToolError::MissingInput("some text to analyze"));
    }
    let sentences = sentence_count(input).max(1);
    let syllable_total: usize = words.iter().map(|w| syllables(w)).sum();
    let score = flesch_score(words.len(), sentences, syllable_total);
    Ok(Report::new("📖", "Readability Analysis")
        .field("Flesch Reading Ease", fixed(score, 1))
        .field("Level", grade_label(score))
        .field("Words", words.len())
        .field("Sentences", sentences)
        .field("Syllables", syllable_total)
        .into())
}

/// Two texts separated by a `---` line, or by the first blank line.
fn split_texts(input: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = input.lines().collect();
    let divider = lines
        .iter()
        .position(|l| l.trim() == "---")
        .or_else(|| lines.iter().position(|l| l.trim().is_empty()))?;
    let first = lines[..divider].join("\n");
    let second = lines[divider + 1..].join("\n");
    if first.trim().is_empty() || second.trim().is_empty() {
        None
    } else {
        Some((first, second))
    }
}

fn word_set(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    normalized_words(text)
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

fn word_list(words: &[&String]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.iter().map(|w| w.as_str()).collect::<Vec<_>>().join(", ")
    }
}

pub fn compare(input: &str) -> ToolResult {
    let (first, second) =
        split_texts(input).ok_or(ToolError::MissingInput("two texts separated by a line with ---"))?;
    let a = word_set(&first);
    let b = word_set(&second);
    let a_lookup: HashSet<&String> = a.iter().collect();
    let b_lookup: HashSet<&String> = b.iter().collect();

    let common: Vec<&String> = a.iter().filter(|w| b_lookup.contains(w)).collect();
    let only_first: Vec<&String> = a.iter().filter(|w| !b_lookup.contains(w)).collect();
    let only_second: Vec<&String> = b.iter().filter(|w| !a_lookup.contains(w)).collect();
    let union = a.len() + only_second.len();
    let similarity = if union == 0 { 0.0 } else { common.len() as f64 / union as f64 * 100.0 };

    Ok(Report::new("🔍", "Text Comparison")
        .field("Unique words in text 1", a.len())
        .field("Unique words in text 2", b.len())
        .field("Common words", common.len())
        .field("Similarity", format!("{}%", fixed(similarity, 1)))
        .blank()
        .field("Common", word_list(&common))
        .field("Only in text 1", word_list(&only_first))
        .field("Only in text 2", word_list(&only_second))
        .into())
}

/// `/pattern/flags` or a bare pattern on line 1; the text to search below it.
pub fn regex_test(input: &str) -> ToolResult {
    let (first_line, text) = input.split_once('\n').unwrap_or((input, ""));
    let first_line = first_line.trim_end_matches('\r');
    if first_line.is_empty() {
        return Err(ToolError::MissingInput("a pattern on the first line and text below it"));
    }

    let (pattern, flags) = match first_line.strip_prefix('/').and_then(|rest| rest.rsplit_once('/')) {
        Some((pattern, flags)) if flags.chars().all(|c| "gimsuxy".contains(c)) => (pattern, flags),
        _ => (first_line, ""),
    };
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .ignore_whitespace(flags.contains('x'))
        .build()?;

    let matches: Vec<regex::Match> = regex.find_iter(text).filter(|m| !m.as_str().is_empty()).collect();
    let mut report = Report::new("🔍", "Regex Test")
        .field("Pattern", format!("/{}/{}", pattern, flags))
        .field("Matches", matches.len());
    if matches.is_empty() {
        return Ok(report.blank().line("No matches found").into());
    }
    report = report.section("Results:").lines(matches.iter().take(MAX_LISTED_MATCHES).enumerate().map(
        |(i, m)| format!("{}. \"{}\" at position {}", i + 1, m.as_str(), text[..m.start()].chars().count()),
    ));
    if matches.len() > MAX_LISTED_MATCHES {
        report = report.line(format!("... and {} more", matches.len() - MAX_LISTED_MATCHES));
    }
    Ok(report.into())
}

fn unique_matches<'t>(regex: &regex::Regex, text: &'t str) -> Vec<&'t str> {
    let mut seen = HashSet::new();
    regex
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|m| seen.insert(*m))
        .collect()
}

fn extraction_report(marker: &str, title: &str, found: Vec<&str>, none: &str) -> String {
    let report = Report::new(marker, title).field("Found", found.len()).blank();
    if found.is_empty() {
        report.line(none).into()
    } else {
        report.lines(found).into()
    }
}

pub fn extract_emails(input: &str) -> String {
    let found = unique_matches(
        static_regex!(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"),
        input,
    );
    extraction_report("📧", "Email Extraction", found, "No email addresses found")
}

pub fn extract_urls(input: &str) -> String {
    let found: Vec<&str> = unique_matches(static_regex!(r#"https?://[^\s<>"'()]+"#), input)
        .into_iter()
        .map(|url| url.trim_end_matches(['.', ',', ';', ':', '!', '?']))
        .collect();
    extraction_report("🔗", "URL Extraction", found, "No URLs found")
}

pub fn extract_numbers(input: &str) -> String {
    let found: Vec<&str> = static_regex!(r"-?\d+(?:\.\d+)?")
        .find_iter(input)
        .map(|m| m.as_str())
        .collect();
    let sum: f64 = found.iter().filter_map(|n| n.parse::<f64>().ok()).sum();
    let report = Report::new("🔢", "Number Extraction").field("Found", found.len());
    if found.is_empty() {
        return report.blank().line("No numbers found").into();
    }
    report
        .field("Sum", sum)
        .blank()
        .line(found.join(", "))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let output = word_count("The quick brown fox");
        assert!(output.starts_with("📊 Text Statistics:"));
        assert!(output.contains("Words: 4"));
        assert!(output.contains("Characters: 19"));
        assert!(output.contains("Characters (no spaces): 16"));
        assert!(output.contains("Sentences: 1"));
        assert!(output.contains("Reading Time: 1 min"));
    }

    #[test]
    fn test_word_count_structure() {
        let output = word_count("One. Two! Three?\n\nNew paragraph here.");
        assert!(output.contains("Sentences: 4"));
        assert!(output.contains("Paragraphs: 2"));
        assert!(output.contains("Lines: 3"));

        let empty = word_count("");
        assert!(empty.contains("Words: 0"));
        assert!(empty.contains("Lines: 0"));
    }

    #[test]
    fn test_keyword_density() {
        let output = keyword_density("Rust is fast. Rust is safe. Go rust!").unwrap();
        assert!(output.contains("Total words: 8"));
        assert!(output.contains("1. rust: 3 (37.50%)"));
        assert!(output.contains("2. is: 2 (25.00%)"));
        assert!(keyword_density("...").is_err());
    }

    #[test]
    fn test_keyword_density_caps_at_ten() {
        let text = (0..15).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let output = keyword_density(&text).unwrap();
        assert!(output.contains("10. w9: 1"));
        assert!(!output.contains("11. "));
    }

    #[test]
    fn test_word_frequency() {
        let output = word_frequency("b a b c a b").unwrap();
        assert!(output.contains("Unique words: 3"));
        assert!(output.ends_with("Frequency:\nb: 3\na: 2\nc: 1"));
    }

    #[test]
    fn test_grade_label_buckets() {
        let cases = [
            (95.0, "Very Easy (5th grade)"),
            (90.0, "Very Easy (5th grade)"),
            (89.9, "Easy (6th grade)"),
            (80.0, "Easy (6th grade)"),
            (70.0, "Fairly Easy (7th grade)"),
            (60.0, "Standard (8th-9th grade)"),
            (50.0, "Fairly Difficult (10th-12th grade)"),
            (49.9, "Difficult (College)"),
            (-10.0, "Difficult (College)"),
        ];
        for (score, expected) in cases {
            assert_eq!(grade_label(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_syllables() {
        let cases = [("cat", 1), ("table", 2), ("make", 1), ("banana", 3), ("readability", 5)];
        for (word, expected) in cases {
            assert_eq!(syllables(word), expected, "word {}", word);
        }
    }

    #[test]
    fn test_readability() {
        let easy = readability("The cat sat on the mat. The dog ran.").unwrap();
        assert!(easy.contains("Level: Very Easy (5th grade)"), "{}", easy);
        assert!(easy.contains("Sentences: 2"));
        assert!(readability("123 456").is_err());
    }

    #[test]
    fn test_compare() {
        let output = compare("the red fox\n---\nthe blue fox").unwrap();
        assert!(output.contains("Common words: 2"));
        assert!(output.contains("Common: the, fox"));
        assert!(output.contains("Only in text 1: red"));
        assert!(output.contains("Only in text 2: blue"));
        assert!(output.contains("Similarity: 50.0%"));

        let blank_line = compare("a b\n\nb c").unwrap();
        assert!(blank_line.contains("Common: b"));
        assert!(compare("just one text").is_err());
    }

    #[test]
    fn test_regex_test() {
        let output = regex_test("/\\d+/g\nabc 12 de 345").unwrap();
        assert!(output.contains("Pattern: /\\d+/g"));
        assert!(output.contains("Matches: 2"));
        assert!(output.contains("1. \"12\" at position 4"));
        assert!(output.contains("2. \"345\" at position 10"));

        let insensitive = regex_test("/hello/i\nHello HELLO").unwrap();
        assert!(insensitive.contains("Matches: 2"));

        let none = regex_test("xyz\nabc").unwrap();
        assert!(none.contains("No matches found"));
    }

    #[test]
    fn test_regex_test_errors() {
        let error = regex_test("(unclosed\ntext").unwrap_err();
        assert!(error.to_string().starts_with("Invalid regular expression"));
        assert!(regex_test("").is_err());
    }

    #[test]
    fn test_extract_emails() {
        let output = extract_emails("Mail ann@example.com or bob.smith@mail.co.uk, ann@example.com");
        assert!(output.contains("Found: 2"));
        assert!(output.ends_with("ann@example.com\nbob.smith@mail.co.uk"));
        assert!(extract_emails("nothing here").contains("No email addresses found"));
    }

    #[test]
    fn test_extract_urls() {
        let output = extract_urls("See https://a.com/x. And (http://b.org/path?q=1)!");
        assert!(output.contains("Found: 2"));
        assert!(output.contains("https://a.com/x\n"));
        assert!(output.ends_with("http://b.org/path?q=1"));
    }

    #[test]
    fn test_extract_numbers() {
        let output = extract_numbers("Paid 12.50 then -3 and 40");
        assert!(output.contains("Found: 3"));
        assert!(output.contains("Sum: 49.5"));
        assert!(output.ends_with("12.50, -3, 40"));
        assert!(extract_numbers("none").contains("No numbers found"));
    }
}
