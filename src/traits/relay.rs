// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Payload forwarded to the AI gateway for `remote` tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Gateway reply: either `{ "content": ... }` or `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayResponse {
    Content { content: String },
    Error { error: String },
}

/// Relay to the external text-generation service.
pub trait AiRelay {
    fn generate(&self, request: &RelayRequest) -> RelayResponse;
}
