// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::backends::local::rules;
use crate::backends::stub::ScriptedRelay;
use crate::backends::usage::DailyUsageCounter;
use crate::config::{Catalog, Config, Limits, Tool, ToolKind};
use crate::engine::{Dispatcher, ToolHub};
use crate::traits::{FixedClock, RelayResponse};

/// End-to-end tests through the dispatcher and the hub using the real rule table
#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::with_sources(Box::new(StdRng::seed_from_u64(2026)), Box::new(clock()))
    }

    fn remote_tool() -> Tool {
        Tool {
            kind: ToolKind::Remote,
            relay_type: Some("caption".to_string()),
            platform: Some("instagram".to_string()),
            ..Tool::local("caption-generator", "Caption Generator", "ai")
        }
    }

    fn hub(limit: u32, relay: ScriptedRelay) -> ToolHub {
        let config = Config {
            limits: Limits {
                daily_remote_limit: Some(limit),
                fallback_echo_chars: None,
            },
            tools: vec![
                Tool::local("word-counter", "Word Counter", "text"),
                Tool::local("base64-encode", "Base64 Encode", "encoding"),
                remote_tool(),
            ],
        };
        ToolHub::from_config(&config)
            .with_dispatcher(dispatcher())
            .with_relay(Box::new(relay))
            .with_usage_counter(Box::new(DailyUsageCounter::new(limit)))
            .with_clock(Box::new(clock()))
    }

    #[test]
    fn test_word_counter_scenario() {
        let output = dispatcher().dispatch("Word Counter", "word-counter", "The quick brown fox");
        assert!(output.contains("Words: 4"));
        assert!(output.contains("Characters: 19"));
    }

    #[test]
    fn test_base64_round_trip_scenario() {
        let mut dispatcher = dispatcher();
        let encoded = dispatcher.dispatch("Base64 Encode", "base64-encode", "hello");
        assert_eq!(encoded, "aGVsbG8=");
        assert_eq!(dispatcher.dispatch("Base64 Decode", "base64-decode", &encoded), "hello");
    }

    #[test]
    fn test_rot13_scenario() {
        assert_eq!(dispatcher().dispatch("ROT13", "rot13", "Hello"), "Uryyb");
    }

    #[test]
    fn test_slug_scenario() {
        let output = dispatcher().dispatch("Slug Generator", "slug-generator", "  Hello, World!! 2026  ");
        assert_eq!(output, "hello-world-2026");
    }

    #[test]
    fn test_bmi_scenario() {
        let output = dispatcher().dispatch("BMI Calculator", "bmi-calculator", "70 175");
        assert!(output.contains("BMI: 22.9"));
        assert!(output.contains("Normal"));
    }

    #[test]
    fn test_unknown_tool_scenario() {
        let output = dispatcher().dispatch("Totally Unknown Tool", "totally-unknown", "abc");
        assert!(output.contains("Words: 1"));
        assert!(output.contains("Characters: 3"));
        assert!(output.ends_with("abc"));
    }

    #[test]
    fn test_every_rule_survives_hostile_input() {
        let long = "ab".repeat(20_000);
        let inputs = [
            "",
            "   ",
            "null",
            "{not json",
            "\u{FFFD}\u{0000}\u{1F600}",
            "-99999999999999999999999 1e400",
            "/(/gi\n((",
            "<a><b></a>",
            long.as_str(),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let clock = clock();
        for rule in rules::rules() {
            for input in inputs {
                // Err is fine; a panic fails the test
                let _ = rule.apply.run(input, &mut rng, &clock);
            }
        }
    }

    #[test]
    fn test_dispatch_never_panics_to_caller() {
        let mut dispatcher = dispatcher();
        for name in ["JSON Formatter", "Regex Tester", "Loan Calculator", "", "   "] {
            for input in ["", "\u{0000}", "[[[[", "9999999999999999999999999"] {
                let _ = dispatcher.dispatch(name, "", input);
            }
        }
    }

    #[test]
    fn test_deterministic_rules_repeat_exactly() {
        let mut rng = StdRng::seed_from_u64(1);
        let clock = clock();
        let input = "Hello World 42\nsecond line";
        for rule in rules::rules().iter().filter(|rule| rule.apply.is_deterministic()) {
            let first = rule.apply.run(input, &mut rng, &clock).map_err(|e| e.to_string());
            let second = rule.apply.run(input, &mut rng, &clock).map_err(|e| e.to_string());
            assert_eq!(first, second, "rule {}", rule.tag);
        }
    }

    #[test]
    fn test_hub_resolves_catalog_names_and_ids() {
        let mut hub = hub(3, ScriptedRelay::answering("unused"));
        assert_eq!(hub.run("base64-encode", "hello"), "aGVsbG8=");
        assert_eq!(hub.run("base64 encode", "hello"), "aGVsbG8=");
        assert!(hub.run("Word Counter", "one two").contains("Words: 2"));
        assert!(hub.run("Mystery Box", "abc").starts_with("✅ Mystery Box processed successfully!"));
    }

    #[test]
    fn test_hub_forwards_remote_tools_and_counts_usage() {
        let mut hub = hub(2, ScriptedRelay::answering("A golden sunset ☀️"));
        assert_eq!(hub.remaining_generations(), 2);
        assert_eq!(hub.run("caption-generator", "  sunset  "), "A golden sunset ☀️");
        assert_eq!(hub.remaining_generations(), 1);
        hub.run("Caption Generator", "beach");
        assert_eq!(
            hub.run("caption-generator", "again"),
            "Error: Daily limit of 2 AI generations reached. Try again tomorrow."
        );
    }

    #[test]
    fn test_hub_relay_errors_do_not_consume_quota() {
        let relay = ScriptedRelay::new(vec![RelayResponse::Error {
            error: "gateway timeout".to_string(),
        }]);
        let mut hub = hub(1, relay);
        assert_eq!(hub.run("caption-generator", "x"), "Error: AI service error: gateway timeout");
        assert_eq!(hub.remaining_generations(), 1);
        assert_eq!(hub.run("caption-generator", "   "), "Error: Please enter a prompt");
    }

    #[test]
    fn test_builtin_catalog_tools_all_produce_output() {
        let config = Config::builtin().unwrap();
        let catalog: Catalog = config.catalog();
        let mut dispatcher = dispatcher();
        for tool in catalog.iter().filter(|tool| !tool.is_remote()) {
            assert!(
                rules::find_rule(&tool.name.to_lowercase(), &tool.id.to_lowercase()).is_some(),
                "catalog tool '{}' has no rule",
                tool.name
            );
            let output = dispatcher.dispatch(&tool.name, &tool.id, "Hello world 123");
            assert!(!output.is_empty(), "tool {}", tool.name);
        }
    }
}
