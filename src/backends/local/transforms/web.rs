// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Slugs, URL inspection and the informational download helper.

use crate::backends::local::transforms::encoding::url_decode;
use crate::errors::{ToolError, ToolResult};
use crate::utils::Report;

/// Lower-case, drop everything but ASCII word characters, whitespace and
/// hyphens, collapse whitespace/underscore/hyphen runs into one hyphen and
/// trim hyphens from both ends.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let stripped = static_regex!(r"[^A-Za-z0-9_\s-]").replace_all(&lowered, "");
    let hyphenated = static_regex!(r"[\s_-]+").replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Pieces of an absolute URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlParts {
    pub protocol: String,
    pub host: String,
    pub port: Option<String>,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

pub fn split_url(input: &str) -> Result<UrlParts, ToolError> {
    let url = input.trim();
    let (scheme, rest) = url
        .split_once("://")
        .ok_or(ToolError::InvalidInput("URL (expected scheme://host/...)"))?;
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
        return Err(ToolError::InvalidInput("URL scheme"));
    }

    let (rest, fragment) = match rest.split_once('#') {
        Some((before, fragment)) => (before, format!("#{}", fragment)),
        None => (rest, String::new()),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((before, query)) => (before, format!("?{}", query)),
        None => (rest, String::new()),
    };
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], rest[i..].to_string()),
        None => (rest, "/".to_string()),
    };
    let authority = authority.rsplit_once('@').map(|(_, host)| host).unwrap_or(authority);
    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => {
            (host, Some(port.to_string()))
        }
        _ => (authority, None),
    };
    if host.is_empty() {
        return Err(ToolError::InvalidInput("URL (missing host)"));
    }

    Ok(UrlParts {
        protocol: format!("{}:", scheme.to_lowercase()),
        host: host.to_lowercase(),
        port,
        path,
        query,
        fragment,
    })
}

pub fn parse_url(input: &str) -> ToolResult {
    let parts = split_url(input)?;
    let mut report = Report::new("🔗", "URL Components")
        .field("Protocol", &parts.protocol)
        .field("Host", &parts.host)
        .field("Port", parts.port.as_deref().unwrap_or("(default)"))
        .field("Path", &parts.path)
        .field("Query", if parts.query.is_empty() { "(none)" } else { parts.query.as_str() })
        .field("Fragment", if parts.fragment.is_empty() { "(none)" } else { parts.fragment.as_str() });

    let params: Vec<String> = parts
        .query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = url_decode(&value).unwrap_or(value);
            format!("  {} = {}", key, value)
        })
        .collect();
    if !params.is_empty() {
        report = report.section("Query Parameters:").lines(params);
    }
    Ok(report.into())
}

/// One domain per input line, `www.` stripped. Scheme is optional.
pub fn extract_domains(input: &str) -> ToolResult {
    let domains: Vec<String> = input
        .split_whitespace()
        .filter_map(|token| {
            let without_scheme = token.split_once("://").map(|(_, rest)| rest).unwrap_or(token);
            let authority = without_scheme
                .split(['/', '?', '#'])
                .next()
                .unwrap_or_default();
            let host = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
            let host = host.split(':').next().unwrap_or_default().to_lowercase();
            let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
            if host.contains('.') {
                Some(host)
            } else {
                None
            }
        })
        .collect();

    if domains.is_empty() {
        return Err(ToolError::MissingInput("at least one URL or domain"));
    }
    Ok(domains.join("\n"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Platform {
    TikTok,
    YouTube,
    Instagram,
    Twitter,
    Unknown,
}

impl Platform {
    pub fn detect(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("tiktok.com") {
            Platform::TikTok
        } else if url.contains("youtube.com") || url.contains("youtu.be") {
            Platform::YouTube
        } else if url.contains("instagram.com") {
            Platform::Instagram
        } else if url.contains("twitter.com")
            || url.contains("//x.com")
            || url.contains(".x.com")
            || url.starts_with("x.com")
        {
            Platform::Twitter
        } else {
            Platform::Unknown
        }
    }

    fn label(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter / X",
            Platform::Unknown => "Unknown",
        }
    }
}

/// Identify the video platform of a URL. Never downloads anything.
pub fn download_helper(input: &str) -> ToolResult {
    let url = input.trim();
    if url.is_empty() {
        return Err(ToolError::MissingInput("a video URL"));
    }
    let platform = Platform::detect(url);
    let note = match platform {
        Platform::Unknown => "⚠️ Supported platforms: TikTok, YouTube, Instagram, Twitter / X.",
        _ => "ℹ️ Platform detected. Use the platform's own save or share options to download this video.",
    };

    Ok(Report::new("📥", "Video Link Analysis")
        .field("Platform", platform.label())
        .field("URL", url)
        .blank()
        .line(note)
        .line("No media is fetched by this tool.")
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Hello, World!! 2026  "), "hello-world-2026");
        assert_eq!(slugify("snake_case and--dashes"), "snake-case-and-dashes");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_slugify_idempotent() {
        for sample in ["  Hello, World!! 2026  ", "A_B  C--D", "", "ÄÖÜ x"] {
            let once = slugify(sample);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_split_url() {
        let parts = split_url("https://user@Example.com:8080/a/b?x=1&y=two%20words#top").unwrap();
        assert_eq!(parts.protocol, "https:");
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.port.as_deref(), Some("8080"));
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.query, "?x=1&y=two%20words");
        assert_eq!(parts.fragment, "#top");
    }

    #[test]
    fn test_parse_url_report() {
        let output = parse_url("https://example.com?q=rust+lang").unwrap();
        assert!(output.contains("Host: example.com"));
        assert!(output.contains("Path: /"));
        assert!(output.contains("q = rust lang"));
        assert!(parse_url("not a url").unwrap_err().to_string().starts_with("Invalid URL"));
    }

    #[test]
    fn test_extract_domains() {
        let output = extract_domains("https://www.example.com/path\nfoo.org:80\nnothing").unwrap();
        assert_eq!(output, "example.com\nfoo.org");
        assert!(extract_domains("nothing here").is_err());
    }

    #[test]
    fn test_platform_detection() {
        assert_eq!(Platform::detect("https://www.tiktok.com/@a/video/1"), Platform::TikTok);
        assert_eq!(Platform::detect("https://youtu.be/abc"), Platform::YouTube);
        assert_eq!(Platform::detect("https://instagram.com/p/x"), Platform::Instagram);
        assert_eq!(Platform::detect("https://x.com/user/status/1"), Platform::Twitter);
        assert_eq!(Platform::detect("https://vimeo.com/1"), Platform::Unknown);

        let output = download_helper("https://youtube.com/watch?v=1").unwrap();
        assert!(output.contains("Platform: YouTube"));
    }
}
