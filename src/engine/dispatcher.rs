// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use crate::backends::local::rules::find_rule;
use crate::config::consts::DEFAULT_FALLBACK_ECHO_CHARS;
use crate::engine::fallback::fallback_with_limit;
use crate::observability::messages::dispatch::{
    DispatchCompleted, DispatchStarted, FallbackUsed, RuleMatched, TransformFailed,
    TransformPanicked,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Clock, RandomSource, SystemClock};

/// Routes a tool name to the first matching rule and renders the result.
///
/// `dispatch` always returns a string: rule errors and panics come back as
/// `"Error: <message>"` and unmatched names get the fallback summary.
///
/// ```
/// use toolforge::engine::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new();
/// assert_eq!(dispatcher.dispatch("ROT13", "rot13", "Hello"), "Uryyb");
/// ```
pub struct Dispatcher {
    rng: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    echo_chars: usize,
}

impl Dispatcher {
    /// Thread-local RNG and the system clock.
    pub fn new() -> Self {
        Self::with_sources(Box::new(rand::thread_rng()), Box::new(SystemClock))
    }

    pub fn with_sources(rng: Box<dyn RandomSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            rng,
            clock,
            echo_chars: DEFAULT_FALLBACK_ECHO_CHARS,
        }
    }

    pub fn with_echo_chars(mut self, echo_chars: usize) -> Self {
        self.echo_chars = echo_chars;
        self
    }

    pub fn dispatch(&mut self, tool_name: &str, tool_id: &str, input: &str) -> String {
        let started = Instant::now();
        let name = tool_name.to_lowercase();
        let id = tool_id.to_lowercase();

        let start_msg = DispatchStarted {
            tool_name,
            tool_id,
            input_size: input.len(),
        };
        let span = start_msg.span("tool_dispatch");
        let _guard = span.enter();
        start_msg.log();

        let Some(rule) = find_rule(&name, &id) else {
            FallbackUsed { tool_name }.log();
            return fallback_with_limit(tool_name, input, self.echo_chars);
        };
        let matched_msg = RuleMatched {
            tool_name,
            rule: rule.tag,
        };
        let rule_span = matched_msg.span("transform");
        let _rule_guard = rule_span.enter();
        matched_msg.log();

        let rng = &mut *self.rng;
        let clock = &*self.clock;
        let outcome = catch_unwind(AssertUnwindSafe(|| rule.apply.run(input, rng, clock)));

        let output = match outcome {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                TransformFailed {
                    rule: rule.tag,
                    error: &e,
                }
                .log();
                format!("Error: {}", e)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                TransformPanicked {
                    rule: rule.tag,
                    message: &message,
                }
                .log();
                format!("Error: {}", message)
            }
        };

        DispatchCompleted {
            rule: rule.tag,
            input_size: input.len(),
            output_size: output.len(),
            duration: started.elapsed(),
        }
        .log();
        output
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unexpected failure while processing input".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FixedClock;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::{Arc, Mutex};
    use tracing::span::{Attributes, Id};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records the name of every span opened while installed.
    #[derive(Clone, Default)]
    struct SpanNames(Arc<Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for SpanNames {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(attrs.metadata().name().to_string());
        }
    }

    fn spans_opened_by(tool_name: &str, tool_id: &str) -> Vec<String> {
        let names = SpanNames::default();
        let subscriber = tracing_subscriber::registry().with(names.clone());
        tracing::subscriber::with_default(subscriber, || {
            seeded(1).dispatch(tool_name, tool_id, "hello");
        });
        let recorded = names.0.lock().unwrap().clone();
        recorded
    }

    fn seeded(seed: u64) -> Dispatcher {
        Dispatcher::with_sources(
            Box::new(StdRng::seed_from_u64(seed)),
            Box::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())),
        )
    }

    #[test]
    fn test_rule_errors_are_rendered() {
        let mut dispatcher = seeded(1);
        assert_eq!(
            dispatcher.dispatch("Base64 Decode", "base64-decode", "%%%"),
            "Error: Invalid Base64 input"
        );
        let json = dispatcher.dispatch("JSON Formatter", "json-formatter", "{oops");
        assert!(json.starts_with("Error: Invalid JSON"));
    }

    #[test]
    fn test_unmatched_name_uses_fallback() {
        let output = seeded(1).dispatch("Totally Unknown Tool", "unknown", "abc");
        assert!(output.starts_with("✅ Totally Unknown Tool processed successfully!"));
    }

    #[test]
    fn test_echo_limit_is_configurable() {
        let mut dispatcher = seeded(1).with_echo_chars(2);
        let output = dispatcher.dispatch("Mystery", "mystery", "abcd");
        assert!(output.ends_with("Content:\nab..."));
    }

    #[test]
    fn test_seeded_dispatch_is_reproducible() {
        let a = seeded(7).dispatch("Password Generator", "password-generator", "20");
        let b = seeded(7).dispatch("Password Generator", "password-generator", "20");
        assert_eq!(a, b);
        assert_eq!(a.chars().count(), 20);
    }

    #[test]
    fn test_clock_is_injected() {
        let output = seeded(1).dispatch("Unix Timestamp Converter", "timestamp", "");
        assert!(output.contains("Unix (seconds): 1705320000"));
    }

    #[test]
    fn test_matched_rule_runs_inside_dispatch_and_rule_spans() {
        let spans = spans_opened_by("Uppercase Converter", "uppercase");
        assert_eq!(spans, vec!["dispatch".to_string(), "rule".to_string()]);
    }

    #[test]
    fn test_fallback_runs_inside_dispatch_span_only() {
        let spans = spans_opened_by("Totally Unknown Tool", "unknown");
        assert_eq!(spans, vec!["dispatch".to_string()]);
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(42);
        assert!(panic_message(payload.as_ref()).starts_with("Unexpected"));
    }
}
