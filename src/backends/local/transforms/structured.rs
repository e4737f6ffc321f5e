// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON, XML and CSV tools.
//!
//! JSON goes through `serde_json` with key order preserved. XML support is a
//! small element/text parser: enough for data documents, not a validating
//! parser (no DTDs, namespaces are kept as part of the name).

use serde_json::{Map, Value};

use crate::backends::local::transforms::encoding::{html_decode, html_encode};
use crate::errors::{ToolError, ToolResult};
use crate::utils::Report;

fn parse_json(input: &str) -> Result<Value, ToolError> {
    Ok(serde_json::from_str(input.trim())?)
}

/// Pretty-print with two-space indentation.
pub fn json_format(input: &str) -> ToolResult {
    Ok(serde_json::to_string_pretty(&parse_json(input)?)?)
}

pub fn json_minify(input: &str) -> ToolResult {
    Ok(serde_json::to_string(&parse_json(input)?)?)
}

/// Validation never fails: both outcomes are reports.
pub fn json_validate(input: &str) -> String {
    match parse_json(input) {
        Ok(value) => {
            let (kind, entries) = match &value {
                Value::Object(map) => ("object", Some(map.len())),
                Value::Array(items) => ("array", Some(items.len())),
                Value::String(_) => ("string", None),
                Value::Number(_) => ("number", None),
                Value::Bool(_) => ("boolean", None),
                Value::Null => ("null", None),
            };
            let mut report = Report::new("✅", "Valid JSON").field("Type", kind);
            if let Some(count) = entries {
                report = report.field("Top-level entries", count);
            }
            report.into()
        }
        Err(ToolError::InvalidJson(e)) => Report::new("❌", "Invalid JSON")
            .field("Error", &e)
            .field("Line", e.line())
            .field("Column", e.column())
            .into(),
        Err(other) => Report::new("❌", "Invalid JSON").field("Error", other).into(),
    }
}

// ---------------------------------------------------------------------------
// JSON -> XML
// ---------------------------------------------------------------------------

pub fn json_to_xml(input: &str) -> ToolResult {
    let value = parse_json(input)?;
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    match &value {
        Value::Array(items) => {
            xml.push_str("<root>\n");
            for item in items {
                write_xml("item", item, 1, &mut xml);
            }
            xml.push_str("</root>");
        }
        _ => {
            write_xml("root", &value, 0, &mut xml);
            xml.pop();
        }
    }
    Ok(xml)
}

fn xml_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || "_.-".contains(c) { c } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
        name.insert(0, '_');
    }
    name
}

fn write_xml(key: &str, value: &Value, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let name = xml_name(key);
    match value {
        Value::Object(map) if map.is_empty() => out.push_str(&format!("{}<{}/>\n", indent, name)),
        Value::Object(map) => {
            out.push_str(&format!("{}<{}>\n", indent, name));
            for (child_key, child) in map {
                write_xml(child_key, child, depth + 1, out);
            }
            out.push_str(&format!("{}</{}>\n", indent, name));
        }
        Value::Array(items) => {
            for item in items {
                write_xml(key, item, depth, out);
            }
        }
        Value::Null => out.push_str(&format!("{}<{}/>\n", indent, name)),
        Value::String(text) => {
            out.push_str(&format!("{}<{}>{}</{}>\n", indent, name, html_encode(text), name))
        }
        other => out.push_str(&format!("{}<{}>{}</{}>\n", indent, name, other, name)),
    }
}

// ---------------------------------------------------------------------------
// XML -> JSON
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

#[derive(Debug, PartialEq)]
enum Node {
    Element(Element),
    Text(String),
}

struct XmlParser<'a> {
    src: &'a str,
    pos: usize,
}

const XML_ERROR: ToolError = ToolError::InvalidInput("XML");
const MAX_XML_DEPTH: usize = 128;

impl<'a> XmlParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    /// Skip `<?...?>`, `<!--...-->` and `<!...>` constructs.
    fn skip_misc(&mut self) -> Result<(), ToolError> {
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            let end = if rest.starts_with("<?") {
                rest.find("?>").map(|i| i + 2)
            } else if rest.starts_with("<!--") {
                rest.find("-->").map(|i| i + 3)
            } else if rest.starts_with("<!") {
                rest.find('>').map(|i| i + 1)
            } else {
                return Ok(());
            };
            self.pos += end.ok_or(XML_ERROR)?;
        }
    }

    fn parse_document(mut self) -> Result<Element, ToolError> {
        self.skip_misc()?;
        let root = self.parse_element(0)?;
        self.skip_misc()?;
        if !self.rest().is_empty() {
            return Err(XML_ERROR);
        }
        Ok(root)
    }

    fn parse_name(&mut self) -> Result<String, ToolError> {
        let rest = self.rest();
        let len = rest
            .find(|c: char| c.is_whitespace() || c == '>' || c == '/' || c == '=')
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(XML_ERROR);
        }
        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn parse_element(&mut self, depth: usize) -> Result<Element, ToolError> {
        if depth > MAX_XML_DEPTH || !self.rest().starts_with('<') {
            return Err(XML_ERROR);
        }
        self.pos += 1;
        let name = self.parse_name()?;
        let mut attributes = Vec::new();

        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.starts_with("/>") {
                self.pos += 2;
                return Ok(Element { name, attributes, children: Vec::new() });
            }
            if rest.starts_with('>') {
                self.pos += 1;
                break;
            }
            let attr = self.parse_name()?;
            self.skip_whitespace();
            if !self.rest().starts_with('=') {
                return Err(XML_ERROR);
            }
            self.pos += 1;
            self.skip_whitespace();
            let quote = self.rest().chars().next().ok_or(XML_ERROR)?;
            if quote != '"' && quote != '\'' {
                return Err(XML_ERROR);
            }
            self.pos += 1;
            let len = self.rest().find(quote).ok_or(XML_ERROR)?;
            attributes.push((attr, html_decode(&self.rest()[..len])));
            self.pos += len + 1;
        }

        let mut children = Vec::new();
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return Err(XML_ERROR);
            }
            if let Some(after) = rest.strip_prefix("</") {
                let len = after.find('>').ok_or(XML_ERROR)?;
                if after[..len].trim() != name {
                    return Err(XML_ERROR);
                }
                self.pos += 2 + len + 1;
                return Ok(Element { name, attributes, children });
            }
            if rest.starts_with("<!--") {
                let end = rest.find("-->").ok_or(XML_ERROR)?;
                self.pos += end + 3;
            } else if let Some(after) = rest.strip_prefix("<![CDATA[") {
                let end = after.find("]]>").ok_or(XML_ERROR)?;
                children.push(Node::Text(after[..end].to_string()));
                self.pos += 9 + end + 3;
            } else if rest.starts_with('<') {
                children.push(Node::Element(self.parse_element(depth + 1)?));
            } else {
                let len = rest.find('<').unwrap_or(rest.len());
                let text = rest[..len].trim();
                if !text.is_empty() {
                    children.push(Node::Text(html_decode(text)));
                }
                self.pos += len;
            }
        }
    }
}

fn element_to_json(element: &Element) -> Value {
    let child_elements: Vec<&Element> = element
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
        .collect();
    let text: String = element
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Text(t) => Some(t.as_str()),
            Node::Element(_) => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    if child_elements.is_empty() && element.attributes.is_empty() {
        return Value::String(text);
    }

    let mut map = Map::new();
    for (key, value) in &element.attributes {
        map.insert(format!("@{}", key), Value::String(value.clone()));
    }
    for child in child_elements {
        let value = element_to_json(child);
        match map.get_mut(&child.name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(child.name.clone(), value);
            }
        }
    }
    if !text.is_empty() {
        map.insert("#text".to_string(), Value::String(text));
    }
    Value::Object(map)
}

pub fn xml_to_json(input: &str) -> ToolResult {
    let root = XmlParser::new(input.trim()).parse_document()?;
    let mut wrapped = Map::new();
    wrapped.insert(root.name.clone(), element_to_json(&root));
    Ok(serde_json::to_string_pretty(&Value::Object(wrapped))?)
}

/// Re-indent XML with two spaces per level. Purely lexical: tags are found with
/// a regex and elements holding only text stay on one line.
pub fn xml_format(input: &str) -> ToolResult {
    let compact = static_regex!(r">\s+<").replace_all(input.trim(), "><");
    let tokens: Vec<&str> = static_regex!(r"<[^>]+>|[^<]+")
        .find_iter(&compact)
        .map(|m| m.as_str())
        .collect();
    if !tokens.iter().any(|t| t.starts_with('<')) {
        return Err(XML_ERROR);
    }

    let mut lines = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        let indent = "  ".repeat(depth);
        if token.starts_with("</") {
            depth = depth.saturating_sub(1);
            lines.push(format!("{}{}", "  ".repeat(depth), token));
        } else if token.starts_with("<?") || token.starts_with("<!") || token.ends_with("/>") {
            lines.push(format!("{}{}", indent, token));
        } else if token.starts_with('<') {
            let inline_text = tokens.get(i + 1).filter(|t| !t.starts_with('<'));
            let closes_next = tokens.get(i + 2).map_or(false, |t| t.starts_with("</"));
            match inline_text {
                Some(text) if closes_next => {
                    lines.push(format!("{}{}{}{}", indent, token, text.trim(), tokens[i + 2]));
                    i += 2;
                }
                _ => {
                    lines.push(format!("{}{}", indent, token));
                    depth += 1;
                }
            }
        } else if !token.trim().is_empty() {
            lines.push(format!("{}{}", indent, token.trim()));
        }
        i += 1;
    }
    Ok(lines.join("\n"))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header from the first object's keys, every value double-quoted.
pub fn json_to_csv(input: &str) -> ToolResult {
    let value = parse_json(input)?;
    let rows: Vec<&Map<String, Value>> = match &value {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_object())
            .collect::<Option<Vec<_>>>()
            .ok_or(ToolError::InvalidInput("JSON for CSV (expected an array of objects)"))?,
        _ => return Err(ToolError::InvalidInput("JSON for CSV (expected an array of objects)")),
    };
    let first = rows
        .first()
        .ok_or(ToolError::MissingInput("at least one JSON object"))?;
    let headers: Vec<&String> = first.keys().collect();

    let mut lines = vec![headers.iter().map(|h| h.as_str()).collect::<Vec<_>>().join(",")];
    for row in &rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|header| match row.get(header.as_str()) {
                Some(Value::String(s)) => quote_csv(s),
                Some(Value::Null) | None => quote_csv(""),
                Some(other) => quote_csv(&other.to_string()),
            })
            .collect();
        lines.push(fields.join(","));
    }
    Ok(lines.join("\n"))
}

/// RFC 4180-style reader: quoted fields may hold commas, doubled quotes and
/// line breaks.
fn parse_csv(input: &str) -> Result<Vec<Vec<String>>, ToolError> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match (ch, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => row.push(std::mem::take(&mut field)),
            ('\r', false) => {}
            ('\n', false) => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            (other, _) => field.push(other),
        }
    }
    if in_quotes {
        return Err(ToolError::InvalidInput("CSV (unterminated quoted field)"));
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows.retain(|r| r.iter().any(|f| !f.trim().is_empty()));
    Ok(rows)
}

pub fn csv_to_json(input: &str) -> ToolResult {
    let rows = parse_csv(input.trim())?;
    let (header, records) = rows
        .split_first()
        .ok_or(ToolError::MissingInput("CSV with a header row"))?;

    let objects: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut map = Map::new();
            for (i, key) in header.iter().enumerate() {
                let value = record.get(i).cloned().unwrap_or_default();
                map.insert(key.trim().to_string(), Value::String(value));
            }
            Value::Object(map)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&Value::Array(objects))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format_preserves_key_order() {
        let output = json_format(r#"{"b":1,"a":[1,2]}"#).unwrap();
        assert_eq!(output, "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}");
        assert_eq!(json_minify(&output).unwrap(), r#"{"b":1,"a":[1,2]}"#);
    }

    #[test]
    fn test_json_errors() {
        let error = json_format("not json").unwrap_err();
        assert!(error.to_string().starts_with("Invalid JSON"));
        assert!(json_minify("").is_err());
    }

    #[test]
    fn test_json_validate() {
        let valid = json_validate(r#"{"a":1,"b":2}"#);
        assert!(valid.contains("Valid JSON"));
        assert!(valid.contains("Type: object"));
        assert!(valid.contains("Top-level entries: 2"));

        let invalid = json_validate("{\"a\":");
        assert!(invalid.starts_with("❌ Invalid JSON"));
        assert!(invalid.contains("Line: 1"));
    }

    #[test]
    fn test_json_to_xml() {
        let xml = json_to_xml(r#"{"name":"A & B","tags":["x","y"],"age":3,"none":null}"#).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <name>A &amp; B</name>\n  <tags>x</tags>\n  <tags>y</tags>\n  <age>3</age>\n  <none/>\n</root>"
        );
    }

    #[test]
    fn test_xml_to_json() {
        let json = xml_to_json(
            "<?xml version=\"1.0\"?><person id=\"7\"><name>Ann</name><tag>a</tag><tag>b</tag></person>",
        )
        .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["person"]["@id"], "7");
        assert_eq!(value["person"]["name"], "Ann");
        assert_eq!(value["person"]["tag"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_xml_to_json_rejects_mismatched_tags() {
        assert!(xml_to_json("<a><b></a>").is_err());
        assert!(xml_to_json("plain text").is_err());
    }

    #[test]
    fn test_xml_format() {
        let output = xml_format("<root><a>1</a><b><c/></b></root>").unwrap();
        assert_eq!(output, "<root>\n  <a>1</a>\n  <b>\n    <c/>\n  </b>\n</root>");
        assert!(xml_format("no tags").is_err());
    }

    #[test]
    fn test_json_to_csv() {
        let csv = json_to_csv(r#"[{"name":"Ann","note":"says \"hi\""},{"name":"Bob","age":5}]"#).unwrap();
        assert_eq!(csv, "name,note\n\"Ann\",\"says \"\"hi\"\"\"\n\"Bob\",\"\"");
        assert!(json_to_csv("[1,2]").is_err());
    }

    #[test]
    fn test_csv_to_json() {
        let json = csv_to_json("name,city\nAnn,\"Paris, FR\"\n\nBob,Rome\n").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["city"], "Paris, FR");
        assert_eq!(value[1]["name"], "Bob");
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert!(csv_to_json("a,b\n\"open").is_err());
    }
}
