// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::stub::OfflineRelay;
use crate::backends::usage::DailyUsageCounter;
use crate::config::{Catalog, Config, Tool};
use crate::engine::dispatcher::Dispatcher;
use crate::errors::ToolError;
use crate::observability::messages::catalog::ToolNotInCatalog;
use crate::observability::messages::relay::{QuotaExhausted, RelayCompleted, RelayFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{AiRelay, Clock, RelayRequest, RelayResponse, SystemClock, UsageCounter};

/// Catalog-aware entry point.
///
/// Local tools go straight to the [`Dispatcher`]. Remote tools are gated by the
/// daily [`UsageCounter`] and forwarded to the [`AiRelay`]; only successful
/// generations count against the quota.
pub struct ToolHub {
    catalog: Catalog,
    dispatcher: Dispatcher,
    usage: Box<dyn UsageCounter>,
    relay: Box<dyn AiRelay>,
    clock: Box<dyn Clock>,
}

impl ToolHub {
    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog: config.catalog(),
            dispatcher: Dispatcher::new().with_echo_chars(config.limits.get_fallback_echo_chars()),
            usage: Box::new(DailyUsageCounter::new(config.limits.get_daily_remote_limit())),
            relay: Box::new(OfflineRelay),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_relay(mut self, relay: Box<dyn AiRelay>) -> Self {
        self.relay = relay;
        self
    }

    pub fn with_usage_counter(mut self, usage: Box<dyn UsageCounter>) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Remote generations left today.
    pub fn remaining_generations(&self) -> u32 {
        self.usage.remaining(self.clock.today())
    }

    /// Run the tool named by `key` (id or display name). Unknown keys are
    /// dispatched by name, which lands in the fallback when nothing matches.
    pub fn run(&mut self, key: &str, input: &str) -> String {
        match self.catalog.find(key).cloned() {
            Some(tool) if tool.is_remote() => self.run_remote(&tool, input),
            Some(tool) => self.dispatcher.dispatch(&tool.name, &tool.id, input),
            None => {
                ToolNotInCatalog { key }.log();
                self.dispatcher.dispatch(key, key, input)
            }
        }
    }

    fn run_remote(&mut self, tool: &Tool, input: &str) -> String {
        let today = self.clock.today();
        if !self.usage.check(today) {
            let limit = self.usage.limit();
            QuotaExhausted {
                tool_id: &tool.id,
                limit,
            }
            .log();
            return format!("Error: {}", ToolError::QuotaExceeded { limit });
        }

        let prompt = input.trim();
        if prompt.is_empty() {
            return format!("Error: {}", ToolError::MissingInput("a prompt"));
        }

        let request = RelayRequest {
            kind: tool.relay_type().to_string(),
            prompt: prompt.to_string(),
            platform: tool.platform.clone(),
        };
        match self.relay.generate(&request) {
            RelayResponse::Content { content } => {
                self.usage.increment(today);
                RelayCompleted {
                    tool_id: &tool.id,
                    content_size: content.len(),
                    remaining: self.usage.remaining(today),
                }
                .log();
                content
            }
            RelayResponse::Error { error } => {
                RelayFailed {
                    tool_id: &tool.id,
                    error: &error,
                }
                .log();
                format!("Error: {}", ToolError::Relay(error))
            }
        }
    }
}
