// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Everyday calculators. Inputs are free text; the numbers are pulled out in
//! order of appearance.

use chrono::{Datelike, Months, NaiveDate};

use crate::backends::local::transforms::datetime::parse_date;
use crate::backends::local::transforms::numbers;
use crate::config::consts::{READING_WPM, SPEAKING_WPM};
use crate::errors::{ToolError, ToolResult};
use crate::traits::Clock;
use crate::utils::{fixed, money, plural, thousands, Report};

fn two_numbers(input: &str, hint: &'static str) -> Result<(f64, f64), ToolError> {
    match numbers(input).as_slice() {
        [a, b, ..] => Ok((*a, *b)),
        _ => Err(ToolError::MissingInput(hint)),
    }
}

/// `part / whole` as a percentage, or "undefined" for a zero divisor.
fn ratio(part: f64, whole: f64) -> String {
    if whole == 0.0 {
        "undefined".to_string()
    } else {
        format!("{}%", fixed(part / whole * 100.0, 2))
    }
}

pub fn percentage(input: &str) -> ToolResult {
    let (a, b) = two_numbers(input, "two numbers, e.g. 20 150")?;
    Ok(Report::new("📊", "Percentage Calculations")
        .field(&format!("{}% of {}", a, b), fixed(a / 100.0 * b, 2))
        .field(&format!("{} is what % of {}", a, b), ratio(a, b))
        .field(&format!("Change from {} to {}", a, b), ratio(b - a, a))
        .into())
}

pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

/// Weight in kilograms and height in centimetres.
pub fn bmi(input: &str) -> ToolResult {
    let (weight, height_cm) = two_numbers(input, "weight (kg) and height (cm), e.g. 70 175")?;
    if weight <= 0.0 || height_cm <= 0.0 {
        return Err(ToolError::InvalidInput("weight or height (both must be positive)"));
    }
    let meters = height_cm / 100.0;
    let bmi = weight / (meters * meters);
    Ok(Report::new("⚖️", "BMI Result")
        .field("BMI", fixed(bmi, 1))
        .field("Category", bmi_category(bmi))
        .blank()
        .line("Ranges: <18.5 Underweight | 18.5-24.9 Normal | 25-29.9 Overweight | 30+ Obese")
        .into())
}

pub fn age(input: &str, clock: &dyn Clock) -> ToolResult {
    let birth = parse_date(input.trim())?;
    let today = clock.today();
    if birth > today {
        return Err(ToolError::InvalidInput("birth date (it is in the future)"));
    }

    let mut months = (today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32;
    if today.day() < birth.day() {
        months -= 1;
    }
    let months = months.max(0) as u32;
    let anchor = birth.checked_add_months(Months::new(months)).unwrap_or(today);
    let days = (today - anchor).num_days().max(0);

    let birthday_in = |year: i32| {
        NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    };
    let next = match birthday_in(today.year()) {
        Some(date) if date >= today => Some(date),
        _ => birthday_in(today.year() + 1),
    };
    let next_label = match next.map(|date| (date - today).num_days()) {
        Some(0) => "Today! 🎉".to_string(),
        Some(n) => format!("in {}", plural(n as usize, "day", "days")),
        None => "unknown".to_string(),
    };

    Ok(Report::new("🎂", "Age Calculation")
        .field(
            "Age",
            format!(
                "{}, {}, {}",
                plural((months / 12) as usize, "year", "years"),
                plural((months % 12) as usize, "month", "months"),
                plural(days as usize, "day", "days")
            ),
        )
        .field("Total days", thousands((today - birth).num_days()))
        .field("Next birthday", next_label)
        .into())
}

/// Bill, optional tip percent (default 15) and optional head count.
pub fn tip(input: &str) -> ToolResult {
    let values = numbers(input);
    let bill = *values
        .first()
        .ok_or(ToolError::MissingInput("the bill amount, e.g. 50 15 2"))?;
    let percent = values.get(1).copied().unwrap_or(15.0);
    let people = values.get(2).map_or(1, |p| (*p as usize).max(1));

    let tip = bill * percent / 100.0;
    let total = bill + tip;
    let mut report = Report::new("💰", "Tip Calculation")
        .field("Bill", money(bill))
        .field(&format!("Tip ({}%)", percent), money(tip))
        .field("Total", money(total));
    if people > 1 {
        report = report
            .section(&format!("Split between {} people:", people))
            .field("Per person", money(total / people as f64));
    }
    Ok(report.into())
}

pub fn discount(input: &str) -> ToolResult {
    let (price, percent) = two_numbers(input, "a price and a discount percent, e.g. 80 25")?;
    let saved = price * percent / 100.0;
    Ok(Report::new("🏷️", "Discount Calculation")
        .field("Original Price", money(price))
        .field("Discount", format!("{}%", percent))
        .field("You Save", money(saved))
        .field("Final Price", money(price - saved))
        .into())
}

/// Monthly payment of an amortising loan: `P r (1+r)^n / ((1+r)^n - 1)`.
pub fn monthly_payment(principal: f64, annual_rate: f64, years: f64) -> f64 {
    let n = (years * 12.0).round();
    let r = annual_rate / 100.0 / 12.0;
    if n <= 0.0 {
        return principal;
    }
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

/// Principal, annual rate percent and term in years.
pub fn loan(input: &str) -> ToolResult {
    let values = numbers(input);
    let [principal, rate, years] = match values.as_slice() {
        [p, r, y, ..] => [*p, *r, *y],
        _ => return Err(ToolError::MissingInput("principal, annual rate and years, e.g. 200000 5 30")),
    };
    let payment = monthly_payment(principal, rate, years);
    let total = payment * (years * 12.0).round().max(1.0);
    if !total.is_finite() {
        return Err(ToolError::InvalidInput("loan terms (the payment is too large to compute)"));
    }
    Ok(Report::new("🏦", "Loan Payment")
        .field("Monthly Payment", money(payment))
        .field("Total Payment", money(total))
        .field("Total Interest", money(total - principal))
        .into())
}

/// Principal, annual rate percent, years and optional compounding periods per
/// year (default 12).
pub fn compound_interest(input: &str) -> ToolResult {
    let values = numbers(input);
    let (principal, rate, years) = match values.as_slice() {
        [p, r, y, ..] => (*p, *r, *y),
        _ => return Err(ToolError::MissingInput("principal, annual rate and years, e.g. 1000 5 10")),
    };
    let periods = values.get(3).map_or(12.0, |n| n.max(1.0).round());
    let amount = principal * (1.0 + rate / 100.0 / periods).powf(periods * years);
    if !amount.is_finite() {
        return Err(ToolError::InvalidInput("investment terms (the result is too large to compute)"));
    }
    Ok(Report::new("📈", "Compound Interest")
        .field("Principal", money(principal))
        .field("Final Amount", money(amount))
        .field("Interest Earned", money(amount - principal))
        .field("Compounded", format!("{} times per year", periods))
        .into())
}

/// Whole minutes, rounded up, for `words` at `wpm`.
pub fn minutes(words: usize, wpm: f64) -> String {
    format!("{} min", (words as f64 / wpm).ceil())
}

pub fn reading_time(input: &str) -> String {
    let words = input.split_whitespace().count();
    Report::new("⏱️", "Reading Time")
        .field("Words", thousands(words as i64))
        .field("Reading Time", minutes(words, READING_WPM))
        .field("Speaking Time", minutes(words, SPEAKING_WPM))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_percentage() {
        let output = percentage("20 150").unwrap();
        assert!(output.contains("20% of 150: 30.00"));
        assert!(output.contains("20 is what % of 150: 13.33%"));
        assert!(output.contains("Change from 20 to 150: 650.00%"));
        assert!(percentage("0 5").unwrap().contains("Change from 0 to 5: undefined"));
        assert!(percentage("5").is_err());
    }

    #[test]
    fn test_bmi() {
        let output = bmi("70 175").unwrap();
        assert!(output.contains("BMI: 22.9"));
        assert!(output.contains("Category: Normal weight"));
        assert!(bmi("70 0").is_err());
        assert!(bmi("").is_err());
    }

    #[test]
    fn test_bmi_categories() {
        let cases = [
            (18.4, "Underweight"),
            (18.5, "Normal weight"),
            (24.9, "Normal weight"),
            (25.0, "Overweight"),
            (30.0, "Obese"),
        ];
        for (value, expected) in cases {
            assert_eq!(bmi_category(value), expected, "bmi {}", value);
        }
    }

    #[test]
    fn test_age() {
        let output = age("1990-05-20", &clock(2024, 3, 10)).unwrap();
        assert!(output.contains("Age: 33 years, 9 months, 19 days"), "{}", output);
        assert!(output.contains("Next birthday: in 71 days"));

        let birthday = age("2000-03-10", &clock(2024, 3, 10)).unwrap();
        assert!(birthday.contains("Age: 24 years, 0 months, 0 days"));
        assert!(birthday.contains("Today!"));

        assert!(age("2030-01-01", &clock(2024, 3, 10)).is_err());
        assert!(age("yesterday", &clock(2024, 3, 10)).is_err());
    }

    #[test]
    fn test_tip() {
        let output = tip("50 20 2").unwrap();
        assert!(output.contains("Tip (20%): 10.00"));
        assert!(output.contains("Total: 60.00"));
        assert!(output.contains("Per person: 30.00"));
        assert!(tip("100").unwrap().contains("Tip (15%): 15.00"));
    }

    #[test]
    fn test_discount() {
        let output = discount("80 25").unwrap();
        assert!(output.contains("You Save: 20.00"));
        assert!(output.contains("Final Price: 60.00"));
    }

    #[test]
    fn test_loan() {
        let output = loan("200000 5 30").unwrap();
        assert!(output.contains("Monthly Payment: 1,073.64"), "{}", output);
        assert!(loan("0 0 1").unwrap().contains("Monthly Payment: 0.00"));
        assert!((monthly_payment(1200.0, 0.0, 1.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compound_interest() {
        let output = compound_interest("1000 5 10 1").unwrap();
        assert!(output.contains("Final Amount: 1,628.89"), "{}", output);
        assert!(compound_interest("1000").is_err());
    }

    #[test]
    fn test_compound_interest_overflow_is_rejected() {
        let error = compound_interest("1000 100 1000").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid investment terms (the result is too large to compute)"
        );
    }

    #[test]
    fn test_loan_with_huge_principal() {
        let output = loan("100000000000000000000 5 30").unwrap();
        assert!(output.contains("Total Payment: 193,"), "{}", output);
        assert!(!output.contains(": 0.00"), "{}", output);
        assert!(loan("1000 10000000 1000").is_err());
    }

    #[test]
    fn test_reading_time() {
        let words = vec!["word"; 450].join(" ");
        let output = reading_time(&words);
        assert!(output.contains("Words: 450"));
        assert!(output.contains("Reading Time: 3 min"));
        assert!(output.contains("Speaking Time: 3 min"));
        assert_eq!(minutes(0, READING_WPM), "0 min");
    }
}
