// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Where a tool's work happens.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Handled in-process by the transformation library.
    #[default]
    Local,
    /// Forwarded to the AI relay and gated by the daily usage counter.
    Remote,
}

/// A catalog entry.
///
/// # Example
/// ```yaml
/// id: base64-encode
/// name: Base64 Encode
/// description: Encode text to Base64
/// category: encoding
/// kind: local
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub kind: ToolKind,
    /// Relay request type for remote tools (`article`, `blog`, `caption`, ...).
    /// Defaults to the tool ID.
    #[serde(default)]
    pub relay_type: Option<String>,
    /// Target platform passed to the relay, e.g. `instagram`.
    #[serde(default)]
    pub platform: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

impl Tool {
    pub fn local(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            kind: ToolKind::Local,
            relay_type: None,
            platform: None,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.kind == ToolKind::Remote
    }

    pub fn relay_type(&self) -> &str {
        self.relay_type.as_deref().unwrap_or(&self.id)
    }
}

/// Immutable, ordered set of tools.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Resolve a tool by ID, then by display name. Both are case-insensitive.
    pub fn find(&self, key: &str) -> Option<&Tool> {
        let key = key.trim();
        self.tools
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(key))
            .or_else(|| self.tools.iter().find(|t| t.name.eq_ignore_ascii_case(key)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Tool> + 'a {
        self.tools
            .iter()
            .filter(move |t| t.category.eq_ignore_ascii_case(category))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tool in &self.tools {
            if !seen.contains(&tool.category.as_str()) {
                seen.push(&tool.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn remote_count(&self) -> usize {
        self.tools.iter().filter(|t| t.is_remote()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut caption = Tool::local("caption-generator", "Caption Generator", "ai");
        caption.kind = ToolKind::Remote;
        Catalog::new(vec![
            Tool::local("word-counter", "Word Counter", "text"),
            Tool::local("base64-encode", "Base64 Encode", "encoding"),
            caption,
        ])
    }

    #[test]
    fn test_find_by_id_and_name() {
        let catalog = sample();
        assert_eq!(catalog.find("word-counter").unwrap().name, "Word Counter");
        assert_eq!(catalog.find("base64 encode").unwrap().id, "base64-encode");
        assert_eq!(catalog.find("  WORD-COUNTER ").unwrap().id, "word-counter");
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(sample().categories(), vec!["text", "encoding", "ai"]);
    }

    #[test]
    fn test_remote_count_and_relay_type() {
        let catalog = sample();
        assert_eq!(catalog.remote_count(), 1);
        let caption = catalog.find("caption-generator").unwrap();
        assert!(caption.is_remote());
        assert_eq!(caption.relay_type(), "caption-generator");
    }

    #[test]
    fn test_tool_defaults_from_yaml() {
        let tool: Tool = serde_yaml::from_str("id: x\nname: X Tool\n").unwrap();
        assert_eq!(tool.kind, ToolKind::Local);
        assert_eq!(tool.category, "general");
        assert!(tool.description.is_empty());
    }
}
