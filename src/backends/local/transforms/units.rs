// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unit, currency and colour conversion.

use crate::backends::local::transforms::numbers;
use crate::errors::{ToolError, ToolResult};
use crate::utils::{fixed, money, Report};

/// Units per US dollar. Reference values, not live rates.
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("INR", 83.12),
    ("JPY", 149.5),
    ("CAD", 1.36),
    ("AUD", 1.52),
    ("CNY", 7.24),
];

fn usd_rate(code: &str) -> Option<f64> {
    USD_RATES.iter().find(|(c, _)| *c == code).map(|(_, rate)| *rate)
}

/// Up to four decimals, trailing zeros dropped.
fn short(value: f64) -> String {
    let rendered = fixed(value, 4);
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}

/// `100 USD to EUR`. With one code, converts to every other currency; with none,
/// the amount is taken as USD.
pub fn currency(input: &str) -> ToolResult {
    let amount = *numbers(input)
        .first()
        .ok_or(ToolError::MissingInput("an amount, e.g. 100 USD to EUR"))?;
    let codes: Vec<String> = static_regex!(r"\b[A-Za-z]{3}\b")
        .find_iter(input)
        .map(|m| m.as_str().to_uppercase())
        .filter(|code| usd_rate(code).is_some())
        .collect();

    let from = codes.first().map_or("USD", String::as_str);
    let from_rate = usd_rate(from).unwrap_or(1.0);
    let targets: Vec<&str> = match codes.get(1) {
        Some(to) => vec![to.as_str()],
        None => USD_RATES.iter().map(|(c, _)| *c).filter(|c| *c != from).collect(),
    };

    let mut report = Report::new("💱", "Currency Conversion")
        .field("Amount", format!("{} {}", money(amount), from))
        .blank();
    for target in targets {
        let rate = usd_rate(target).unwrap_or(1.0);
        report = report.field(target, money(amount / from_rate * rate));
    }
    Ok(report
        .blank()
        .line("Rates are fixed reference values")
        .into())
}

struct Unit {
    label: &'static str,
    aliases: &'static [&'static str],
    factor: f64,
}

const LENGTH_UNITS: &[Unit] = &[
    Unit { label: "Millimeters", aliases: &["mm", "millimeter", "millimeters"], factor: 0.001 },
    Unit { label: "Centimeters", aliases: &["cm", "centimeter", "centimeters"], factor: 0.01 },
    Unit { label: "Meters", aliases: &["m", "meter", "meters", "metre", "metres"], factor: 1.0 },
    Unit { label: "Kilometers", aliases: &["km", "kilometer", "kilometers"], factor: 1000.0 },
    Unit { label: "Inches", aliases: &["in", "inch", "inches"], factor: 0.0254 },
    Unit { label: "Feet", aliases: &["ft", "foot", "feet"], factor: 0.3048 },
    Unit { label: "Yards", aliases: &["yd", "yard", "yards"], factor: 0.9144 },
    Unit { label: "Miles", aliases: &["mi", "mile", "miles"], factor: 1609.344 },
];

const WEIGHT_UNITS: &[Unit] = &[
    Unit { label: "Milligrams", aliases: &["mg", "milligram", "milligrams"], factor: 0.001 },
    Unit { label: "Grams", aliases: &["g", "gram", "grams"], factor: 1.0 },
    Unit { label: "Kilograms", aliases: &["kg", "kilogram", "kilograms", "kilo", "kilos"], factor: 1000.0 },
    Unit { label: "Ounces", aliases: &["oz", "ounce", "ounces"], factor: 28.349523125 },
    Unit { label: "Pounds", aliases: &["lb", "lbs", "pound", "pounds"], factor: 453.59237 },
    Unit { label: "Stone", aliases: &["st", "stone", "stones"], factor: 6350.29318 },
];

/// First number and the word following it (`"5.5 ft"` -> `(5.5, Some("ft"))`).
fn quantity(input: &str) -> Option<(f64, Option<String>)> {
    let caps = static_regex!(r"(-?\d+(?:\.\d+)?)\s*([A-Za-z°]+)?").captures(input)?;
    let value = caps[1].parse().ok()?;
    Some((value, caps.get(2).map(|m| m.as_str().to_lowercase())))
}

fn convert_table(input: &str, units: &[Unit], default: &str, marker: &str, title: &str) -> ToolResult {
    let (value, unit) = quantity(input).ok_or(ToolError::MissingInput("a value with a unit, e.g. 10 km"))?;
    let unit = unit.unwrap_or_else(|| default.to_string());
    let source = units
        .iter()
        .find(|u| u.aliases.contains(&unit.as_str()))
        .ok_or(ToolError::InvalidInput("unit"))?;

    let base = value * source.factor;
    let mut report = Report::new(marker, title).field("Input", format!("{} {}", short(value), source.label));
    report = report.blank();
    for target in units {
        report = report.field(target.label, short(base / target.factor));
    }
    Ok(report.into())
}

pub fn length(input: &str) -> ToolResult {
    convert_table(input, LENGTH_UNITS, "m", "📏", "Length Conversion")
}

pub fn weight(input: &str) -> ToolResult {
    convert_table(input, WEIGHT_UNITS, "kg", "⚖️", "Weight Conversion")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

fn to_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - 273.15,
    }
}

pub fn temperature(input: &str) -> ToolResult {
    let (value, unit) = quantity(input).ok_or(ToolError::MissingInput("a temperature, e.g. 100 C"))?;
    let scale = match unit.as_deref().map(|u| u.trim_start_matches('°')) {
        None | Some("c") | Some("celsius") => TemperatureScale::Celsius,
        Some("f") | Some("fahrenheit") => TemperatureScale::Fahrenheit,
        Some("k") | Some("kelvin") => TemperatureScale::Kelvin,
        Some(_) => return Err(ToolError::InvalidInput("temperature unit (use C, F or K)")),
    };
    let celsius = to_celsius(value, scale);
    Ok(Report::new("🌡️", "Temperature Conversion")
        .field("Celsius", format!("{}°C", fixed(celsius, 2)))
        .field("Fahrenheit", format!("{}°F", fixed(celsius * 9.0 / 5.0 + 32.0, 2)))
        .field("Kelvin", format!("{}K", fixed(celsius + 273.15, 2)))
        .into())
}

/// One value read as metres, kilograms and degrees Celsius.
pub fn all_units(input: &str) -> ToolResult {
    let value = *numbers(input)
        .first()
        .ok_or(ToolError::MissingInput("a number to convert"))?;
    let v = short(value);
    Ok(Report::new("🔄", "Unit Conversions")
        .line(format!("Length ({} m):", v))
        .field("  Feet", short(value / 0.3048))
        .field("  Inches", short(value / 0.0254))
        .field("  Kilometers", short(value / 1000.0))
        .field("  Miles", short(value / 1609.344))
        .blank()
        .line(format!("Weight ({} kg):", v))
        .field("  Pounds", short(value * 1000.0 / 453.59237))
        .field("  Ounces", short(value * 1000.0 / 28.349523125))
        .field("  Grams", short(value * 1000.0))
        .blank()
        .line(format!("Temperature ({} °C):", v))
        .field("  Fahrenheit", fixed(value * 9.0 / 5.0 + 32.0, 2))
        .field("  Kelvin", fixed(value + 273.15, 2))
        .into())
}

fn parse_hex_color(input: &str) -> Option<[u8; 3]> {
    let hex = input.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn color_report(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    Report::new("🎨", "Color Conversion")
        .field("HEX", format!("#{:02X}{:02X}{:02X}", r, g, b))
        .field("RGB", format!("rgb({}, {}, {})", r, g, b))
        .into()
}

pub fn hex_to_rgb(input: &str) -> ToolResult {
    parse_hex_color(input)
        .map(color_report)
        .ok_or(ToolError::InvalidInput("hex color, e.g. #FF5733"))
}

pub fn rgb_to_hex(input: &str) -> ToolResult {
    let error = ToolError::InvalidInput("RGB values (three numbers from 0 to 255)");
    match numbers(input).as_slice() {
        [r, g, b] if [r, g, b].iter().all(|c| (0.0..=255.0).contains(*c)) => {
            Ok(color_report([*r as u8, *g as u8, *b as u8]))
        }
        _ => Err(error),
    }
}
