// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Date and time tools. "Now" always comes from the injected [`Clock`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::errors::{ToolError, ToolResult};
use crate::traits::Clock;
use crate::utils::{fixed, plural, thousands, Report};

/// Magnitude above which a timestamp is read as milliseconds.
const MILLISECOND_THRESHOLD: i64 = 9_999_999_999;

/// Offsets are fixed; daylight saving time is not applied.
const WORLD_CLOCK_ZONES: &[(&str, i32)] = &[
    ("New York", -5),
    ("London", 0),
    ("Paris", 1),
    ("Dubai", 4),
    ("Tokyo", 9),
    ("Sydney", 10),
];

pub fn parse_date(text: &str) -> Result<NaiveDate, ToolError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| ToolError::InvalidDate(text.to_string()))
}

fn midnight_utc(date: NaiveDate) -> Result<DateTime<Utc>, ToolError> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| ToolError::InvalidDate(date.to_string()))
}

fn parse_datetime(text: &str) -> Result<DateTime<Utc>, ToolError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt.and_utc());
        }
    }
    midnight_utc(parse_date(text)?)
}

/// Unix seconds or milliseconds to calendar forms, or a date back to Unix time.
/// Empty input converts the current time.
pub fn timestamp(input: &str, clock: &dyn Clock) -> ToolResult {
    let text = input.trim();
    let moment = if text.is_empty() {
        clock.now()
    } else if let Ok(value) = text.parse::<i64>() {
        let converted = if value.unsigned_abs() > MILLISECOND_THRESHOLD as u64 {
            DateTime::from_timestamp_millis(value)
        } else {
            DateTime::from_timestamp(value, 0)
        };
        converted.ok_or(ToolError::InvalidInput("timestamp (out of range)"))?
    } else {
        parse_datetime(text)?
    };

    Ok(Report::new("🕐", "Timestamp Conversion")
        .field("Unix (seconds)", moment.timestamp())
        .field("Unix (milliseconds)", moment.timestamp_millis())
        .field("ISO 8601", moment.to_rfc3339_opts(SecondsFormat::Millis, true))
        .field("UTC", moment.format("%a, %d %b %Y %H:%M:%S GMT"))
        .field(
            "Local",
            moment.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %:z"),
        )
        .into())
}

fn dates_in(input: &str) -> Result<Vec<NaiveDate>, ToolError> {
    static_regex!(r"\d{4}-\d{1,2}-\d{1,2}")
        .find_iter(input)
        .map(|m| parse_date(m.as_str()))
        .collect()
}

pub fn date_diff(input: &str) -> ToolResult {
    let dates = dates_in(input)?;
    let (mut from, mut to) = match dates.as_slice() {
        [a, b, ..] => (*a, *b),
        _ => return Err(ToolError::MissingInput("two dates (YYYY-MM-DD), one per line")),
    };
    if from > to {
        std::mem::swap(&mut from, &mut to);
    }
    let days = (to - from).num_days();
    let d = days as f64;
    Ok(Report::new("📅", "Date Difference")
        .field("From", from)
        .field("To", to)
        .blank()
        .field("Days", thousands(days))
        .field("Weeks", fixed(d / 7.0, 1))
        .field("Months", fixed(d / 30.44, 1))
        .field("Years", fixed(d / 365.25, 2))
        .into())
}

pub fn countdown(input: &str, clock: &dyn Clock) -> ToolResult {
    let target = match dates_in(input)?.first() {
        Some(date) => *date,
        None => parse_date(input)?,
    };
    let now = clock.now();
    let today = now.date_naive();
    let report = Report::new("⏳", "Countdown").field("Target", target);

    if target == today {
        return Ok(report.field("Status", "Today! 🎉").into());
    }
    if target < today {
        let ago = (today - target).num_days() as usize;
        return Ok(report
            .field("Status", format!("This date has passed ({} ago)", plural(ago, "day", "days")))
            .into());
    }

    let remaining = midnight_utc(target)? - now;
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;
    Ok(report
        .field(
            "Time remaining",
            format!(
                "{}, {}, {}",
                plural(days as usize, "day", "days"),
                plural(hours as usize, "hour", "hours"),
                plural(minutes as usize, "minute", "minutes")
            ),
        )
        .field("Total hours", thousands(remaining.num_hours()))
        .into())
}

pub fn world_clock(_input: &str, clock: &dyn Clock) -> String {
    let now = clock.now();
    let mut report = Report::new("🌍", "World Clock").field("UTC", now.format("%Y-%m-%d %H:%M")).blank();
    for (city, hours) in WORLD_CLOCK_ZONES {
        if let Some(offset) = FixedOffset::east_opt(hours * 3600) {
            let local = now.with_timezone(&offset);
            report = report.field(
                city,
                format!("{} (UTC{})", local.format("%Y-%m-%d %H:%M"), local.format("%:z")),
            );
        }
    }
    report
        .blank()
        .line("Fixed offsets; daylight saving time is not applied")
        .into()
}
