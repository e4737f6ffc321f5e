// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Social media and SEO helpers.

use std::collections::HashSet;

use crate::backends::local::transforms::numbers;
use crate::config::consts::{META_DESCRIPTION_LIMIT, META_TITLE_LIMIT};
use crate::errors::{ToolError, ToolResult};
use crate::utils::{fixed, money, Report};

const TRENDING_TAGS: &str = "#trending #viral #fyp #explore";
const MAX_HASHTAGS: usize = 30;

/// Lower-cased alphanumeric words in order of appearance, without repeats.
fn unique_words(input: &str, min_len: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() >= min_len)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

pub fn hashtags(input: &str) -> ToolResult {
    let words = unique_words(input, 3);
    if words.is_empty() {
        return Err(ToolError::MissingInput("some text to build hashtags from"));
    }
    let tags: Vec<String> = words
        .iter()
        .take(MAX_HASHTAGS)
        .map(|word| format!("#{}", word))
        .collect();
    Ok(format!("{}\n\n{}", tags.join(" "), TRENDING_TAGS))
}

pub fn bio_ideas(input: &str) -> ToolResult {
    let topic = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if topic.is_empty() {
        return Err(ToolError::MissingInput("a few words about yourself"));
    }
    Ok(Report::new("✨", "Bio Ideas")
        .lines([
            format!("1. {} enthusiast | Sharing the journey one post at a time ✨", topic),
            format!("2. Passionate about {} 💡 | Learning, building, sharing", topic),
            format!("3. Your daily dose of {} 🚀", topic),
            format!("4. {} | Creator | Dreamer | Doer", topic),
            format!("5. Making {} simple, one tip at a time 📌", topic),
        ])
        .into())
}

pub fn username_ideas(input: &str) -> ToolResult {
    let base: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if base.is_empty() {
        return Err(ToolError::MissingInput("a name or keyword (letters or digits)"));
    }
    Ok(Report::new("👤", "Username Ideas")
        .lines(
            [
                base.clone(),
                format!("{}_official", base),
                format!("the.{}", base),
                format!("real{}", base),
                format!("{}hq", base),
                format!("iam{}", base),
                format!("{}_daily", base),
                format!("its.{}", base),
            ]
            .iter()
            .map(|name| format!("@{}", name)),
        )
        .into())
}

fn length_verdict(length: usize, limit: usize) -> String {
    if length == 0 {
        format!("0/{} ⚠️ Missing", limit)
    } else if length > limit {
        format!("{}/{} ⚠️ Too long (may be truncated)", length, limit)
    } else {
        format!("{}/{} ✅", length, limit)
    }
}

/// Line 1 is the title, the remaining lines the description.
pub fn meta_check(input: &str) -> ToolResult {
    let mut lines = input.lines();
    let title = lines.next().unwrap_or("").trim();
    if title.is_empty() {
        return Err(ToolError::MissingInput("a title on the first line and a description below"));
    }
    let description = lines.map(str::trim).collect::<Vec<_>>().join(" ");
    let description = description.trim();

    Ok(Report::new("🔍", "Meta Tag Check")
        .field("Title", length_verdict(title.chars().count(), META_TITLE_LIMIT))
        .field(
            "Description",
            length_verdict(description.chars().count(), META_DESCRIPTION_LIMIT),
        )
        .into())
}

fn pair(input: &str, hint: &'static str) -> Result<(f64, f64), ToolError> {
    match numbers(input).as_slice() {
        [a, b, ..] => Ok((*a, *b)),
        _ => Err(ToolError::MissingInput(hint)),
    }
}

/// Engagements (likes + comments + shares) and follower count.
pub fn engagement_rate(input: &str) -> ToolResult {
    let (engagements, followers) = pair(input, "engagements and followers, e.g. 250 10000")?;
    if followers <= 0.0 {
        return Err(ToolError::InvalidInput("follower count (must be positive)"));
    }
    let rate = engagements / followers * 100.0;
    let rating = if rate < 1.0 {
        "Low"
    } else if rate < 3.0 {
        "Average"
    } else if rate < 6.0 {
        "Good"
    } else {
        "Excellent"
    };
    Ok(Report::new("📈", "Engagement Rate")
        .field("Engagement Rate", format!("{}%", fixed(rate, 2)))
        .field("Rating", rating)
        .into())
}

/// Cost per thousand impressions.
pub fn cpm(input: &str) -> ToolResult {
    let (cost, impressions) = pair(input, "total cost and impressions, e.g. 50 20000")?;
    if impressions <= 0.0 {
        return Err(ToolError::InvalidInput("impression count (must be positive)"));
    }
    Ok(Report::new("💵", "CPM")
        .field("CPM", money(cost / impressions * 1000.0))
        .into())
}

/// Revenue per thousand views.
pub fn rpm(input: &str) -> ToolResult {
    let (revenue, views) = pair(input, "revenue and views, e.g. 120 40000")?;
    if views <= 0.0 {
        return Err(ToolError::InvalidInput("view count (must be positive)"));
    }
    Ok(Report::new("💵", "RPM")
        .field("RPM", money(revenue / views * 1000.0))
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtags() {
        let output = hashtags("Summer fun at the beach, summer vibes").unwrap();
        assert_eq!(
            output,
            "#summer #fun #the #beach #vibes\n\n#trending #viral #fyp #explore"
        );
        assert!(hashtags("a an").is_err());
    }

    #[test]
    fn test_bio_and_username_ideas() {
        let bio = bio_ideas("  travel   photography ").unwrap();
        assert!(bio.contains("Passionate about travel photography"));
        assert_eq!(bio.lines().filter(|l| l.starts_with(char::is_numeric)).count(), 5);

        let names = username_ideas("Jane Doe!").unwrap();
        assert!(names.contains("@janedoe_official"));
        assert!(names.contains("@the.janedoe"));
        assert!(username_ideas("!!!").is_err());
    }

    #[test]
    fn test_meta_check() {
        let long_title = "x".repeat(61);
        let output = meta_check(&format!("{}\nShort description", long_title)).unwrap();
        assert!(output.contains("Title: 61/60 ⚠️ Too long"));
        assert!(output.contains("Description: 17/160 ✅"));

        let missing = meta_check("Title only").unwrap();
        assert!(missing.contains("Description: 0/160 ⚠️ Missing"));
        assert!(meta_check("").is_err());
    }

    #[test]
    fn test_engagement_rate() {
        let output = engagement_rate("250 10000").unwrap();
        assert!(output.contains("Engagement Rate: 2.50%"));
        assert!(output.contains("Rating: Average"));
        assert!(engagement_rate("5 0").is_err());
    }

    #[test]
    fn test_cpm_and_rpm() {
        assert!(cpm("50 20000").unwrap().contains("CPM: 2.50"));
        assert!(rpm("120 40000").unwrap().contains("RPM: 3.00"));
        assert!(rpm("120").is_err());
    }
}
