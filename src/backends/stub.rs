// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
use std::cell::RefCell;

use crate::traits::{AiRelay, RelayRequest, RelayResponse};

/// Default relay when no AI gateway is configured. Every request fails with a
/// "not configured" error.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRelay;

impl AiRelay for OfflineRelay {
    fn generate(&self, _request: &RelayRequest) -> RelayResponse {
        RelayResponse::Error {
            error: "AI service is not configured".to_string(),
        }
    }
}

/// Relay that replays canned responses in order and records every request.
/// Once the script runs out it keeps returning the last response.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedRelay {
    responses: RefCell<Vec<RelayResponse>>,
    requests: RefCell<Vec<RelayRequest>>,
}

#[cfg(test)]
impl ScriptedRelay {
    pub fn new(responses: Vec<RelayResponse>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Always answers with `content`.
    pub fn answering(content: &str) -> Self {
        Self::new(vec![RelayResponse::Content {
            content: content.to_string(),
        }])
    }

    pub fn requests(&self) -> Vec<RelayRequest> {
        self.requests.borrow().clone()
    }
}

#[cfg(test)]
impl AiRelay for ScriptedRelay {
    fn generate(&self, request: &RelayRequest) -> RelayResponse {
        self.requests.borrow_mut().push(request.clone());
        let mut responses = self.responses.borrow_mut();
        match responses.len() {
            0 => RelayResponse::Error {
                error: "no scripted response".to_string(),
            },
            1 => responses[0].clone(),
            _ => responses.pop().unwrap_or(RelayResponse::Error {
                error: "no scripted response".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RelayRequest {
        RelayRequest {
            kind: "caption".to_string(),
            prompt: "sunset".to_string(),
            platform: None,
        }
    }

    #[test]
    fn test_offline_relay_reports_not_configured() {
        match OfflineRelay.generate(&request()) {
            RelayResponse::Error { error } => assert!(error.contains("not configured")),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_scripted_relay_replays_in_order() {
        let relay = ScriptedRelay::new(vec![
            RelayResponse::Content { content: "one".to_string() },
            RelayResponse::Error { error: "two".to_string() },
        ]);
        assert_eq!(relay.generate(&request()), RelayResponse::Content { content: "one".to_string() });
        assert_eq!(relay.generate(&request()), RelayResponse::Error { error: "two".to_string() });
        assert_eq!(relay.generate(&request()), RelayResponse::Error { error: "two".to_string() });
        assert_eq!(relay.requests().len(), 3);
    }
}
