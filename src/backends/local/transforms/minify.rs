// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Regex-based minifiers.
//!
//! These are naive on purpose: comments and whitespace are stripped without
//! tokenising, so string literals that look like comments are damaged too.

pub fn minify_html(input: &str) -> String {
    let without_comments = static_regex!(r"(?s)<!--.*?-->").replace_all(input, "");
    let between_tags = static_regex!(r">\s+<").replace_all(&without_comments, "><");
    static_regex!(r"\s{2,}")
        .replace_all(&between_tags, " ")
        .trim()
        .to_string()
}

pub fn minify_css(input: &str) -> String {
    let without_comments = static_regex!(r"(?s)/\*.*?\*/").replace_all(input, "");
    let collapsed = static_regex!(r"\s+").replace_all(&without_comments, " ");
    let tight = static_regex!(r"\s*([{}:;,>])\s*").replace_all(&collapsed, "$1");
    tight.replace(";}", "}").trim().to_string()
}

pub fn minify_js(input: &str) -> String {
    let without_blocks = static_regex!(r"(?s)/\*.*?\*/").replace_all(input, "");
    let without_lines = static_regex!(r"(?m)^\s*//.*$").replace_all(&without_blocks, "");
    let collapsed = static_regex!(r"\s+").replace_all(&without_lines, " ");
    static_regex!(r"\s*([{}()\[\];,=+\-*/<>:?!&|])\s*")
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_html() {
        let html = "<div>\n  <!-- note -->\n  <p>Hello    world</p>\n</div>\n";
        assert_eq!(minify_html(html), "<div><p>Hello world</p></div>");
    }

    #[test]
    fn test_minify_css() {
        let css = "/* header */\nbody {\n  color: red;\n  margin: 0 auto;\n}\n";
        assert_eq!(minify_css(css), "body{color:red;margin:0 auto}");
    }

    #[test]
    fn test_minify_js() {
        let js = "// setup\nfunction add(a, b) {\n  /* sum */\n  return a + b;\n}\n";
        assert_eq!(minify_js(js), "function add(a,b){return a+b;}");
    }

    #[test]
    fn test_minifiers_are_idempotent() {
        let css = "a { color : blue ; }";
        assert_eq!(minify_css(&minify_css(css)), minify_css(css));
    }
}
