// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The ordered rule table mapping tool names to transforms.
//!
//! Rules are tried top to bottom against the lower-cased tool name and the
//! first match wins, so a rule must sit above every broader rule whose keywords
//! it also satisfies (`base64 encode` above the generic `encode`, `keyword`
//! above `word count`, `percent` above `age`, `sort` above `reverse`).

use std::sync::OnceLock;

use crate::backends::local::transforms::digest::{all_digests, digest, DigestFormat};
use crate::backends::local::transforms::*;
use crate::errors::ToolResult;
use crate::traits::{Clock, RandomSource};

/// How a rule produces its output. The variant records which ambient
/// sources the transform may touch.
#[derive(Clone, Copy)]
pub enum Apply {
    Text(fn(&str) -> String),
    Pure(fn(&str) -> ToolResult),
    Random(fn(&str, &mut dyn RandomSource) -> ToolResult),
    Clock(fn(&str, &dyn Clock) -> ToolResult),
}

impl Apply {
    pub fn run(&self, input: &str, rng: &mut dyn RandomSource, clock: &dyn Clock) -> ToolResult {
        match self {
            Apply::Text(f) => Ok(f(input)),
            Apply::Pure(f) => f(input),
            Apply::Random(f) => f(input, rng),
            Apply::Clock(f) => f(input, clock),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, Apply::Text(_) | Apply::Pure(_))
    }
}

/// Substring predicate over the lower-cased tool name, plus exact tool ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keywords {
    /// Every keyword must appear.
    pub all: &'static [&'static str],
    /// At least one must appear, when non-empty.
    pub any: &'static [&'static str],
    /// None may appear.
    pub none: &'static [&'static str],
    /// Exact id matches win regardless of the name.
    pub ids: &'static [&'static str],
}

impl Keywords {
    pub fn matches(&self, name: &str, id: &str) -> bool {
        if self.ids.iter().any(|candidate| *candidate == id) {
            return true;
        }
        if self.all.is_empty() && self.any.is_empty() {
            return false;
        }
        self.all.iter().all(|k| name.contains(k))
            && (self.any.is_empty() || self.any.iter().any(|k| name.contains(k)))
            && !self.none.iter().any(|k| name.contains(k))
    }
}

#[derive(Clone, Copy)]
pub struct MatchRule {
    pub tag: &'static str,
    pub keywords: Keywords,
    pub apply: Apply,
}

impl MatchRule {
    fn new(tag: &'static str, apply: Apply) -> Self {
        Self {
            tag,
            keywords: Keywords::default(),
            apply,
        }
    }

    pub fn text(tag: &'static str, f: fn(&str) -> String) -> Self {
        Self::new(tag, Apply::Text(f))
    }

    pub fn pure(tag: &'static str, f: fn(&str) -> ToolResult) -> Self {
        Self::new(tag, Apply::Pure(f))
    }

    pub fn random(tag: &'static str, f: fn(&str, &mut dyn RandomSource) -> ToolResult) -> Self {
        Self::new(tag, Apply::Random(f))
    }

    pub fn clock(tag: &'static str, f: fn(&str, &dyn Clock) -> ToolResult) -> Self {
        Self::new(tag, Apply::Clock(f))
    }

    pub fn all(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords.all = keywords;
        self
    }

    pub fn any(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords.any = keywords;
        self
    }

    pub fn none(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords.none = keywords;
        self
    }

    pub fn ids(mut self, ids: &'static [&'static str]) -> Self {
        self.keywords.ids = ids;
        self
    }

    pub fn matches(&self, name: &str, id: &str) -> bool {
        self.keywords.matches(name, id)
    }
}

/// The rule table, built once.
pub fn rules() -> &'static [MatchRule] {
    static RULES: OnceLock<Vec<MatchRule>> = OnceLock::new();
    RULES.get_or_init(build_rules)
}

/// First rule matching the already lower-cased name and id.
pub fn find_rule(name: &str, id: &str) -> Option<&'static MatchRule> {
    rules().iter().find(|rule| rule.matches(name, id))
}

fn build_rules() -> Vec<MatchRule> {
    use MatchRule as R;

    vec![
        // Structured data
        R::pure("xml_to_json", structured::xml_to_json).all(&["xml to json"]),
        R::pure("json_to_xml", structured::json_to_xml).all(&["json", "xml"]),
        R::pure("csv_to_json", structured::csv_to_json).all(&["csv to json"]),
        R::pure("json_to_csv", structured::json_to_csv).all(&["json", "csv"]),
        R::pure("json_minify", structured::json_minify)
            .all(&["json"])
            .any(&["minif", "compress"]),
        R::text("json_validate", structured::json_validate)
            .all(&["json"])
            .any(&["valid", "lint", "check"]),
        R::pure("json_format", structured::json_format).all(&["json"]),
        R::pure("xml_format", structured::xml_format).all(&["xml"]),
        // Minifiers
        R::text("html_minify", minify::minify_html)
            .all(&["html"])
            .any(&["minif", "compress"]),
        R::text("css_minify", minify::minify_css)
            .all(&["css"])
            .any(&["minif", "compress"]),
        R::text("js_minify", minify::minify_js)
            .any(&["js minif", "javascript minif", "js compress", "javascript compress"]),
        // Social and SEO; "hashtag" must be checked before "hash"
        R::pure("hashtags", social::hashtags).any(&["hashtag"]),
        R::pure("bio_ideas", social::bio_ideas).any(&["bio"]),
        R::pure("username_ideas", social::username_ideas).any(&["username", "user name"]),
        R::pure("meta_check", social::meta_check).any(&["meta"]),
        R::pure("engagement_rate", social::engagement_rate).any(&["engagement"]),
        R::pure("cpm", social::cpm).any(&["cpm"]),
        R::pure("rpm", social::rpm).any(&["rpm"]),
        // Simulated digests
        R::text("md5", |input| digest(input, DigestFormat::Md5)).any(&["md5"]),
        R::text("sha1", |input| digest(input, DigestFormat::Sha1)).any(&["sha1", "sha-1"]),
        R::text("sha256", |input| digest(input, DigestFormat::Sha256)).any(&["sha256", "sha-256"]),
        R::text("crc32", |input| digest(input, DigestFormat::Crc32)).any(&["crc"]),
        R::text("hash", all_digests).any(&["hash", "checksum"]),
        // Base64 before every other encoder
        R::pure("base64_decode", encoding::base64_decode)
            .all(&["base64"])
            .any(&["decode"]),
        R::text("base64_encode", encoding::base64_encode).all(&["base64"]),
        // Colours before the hex text rules
        R::pure("hex_to_rgb", units::hex_to_rgb).any(&["hex to rgb", "hex color", "color converter"]),
        R::pure("rgb_to_hex", units::rgb_to_hex).any(&["rgb to hex", "rgb"]),
        R::random("random_color", |input, rng| Ok(generators::random_color(input, rng)))
            .any(&["random color", "color generator", "colour generator"]),
        // Integer radix conversion before the binary/hex/octal text rules
        R::pure("decimal_to_binary", radix::decimal_to_binary).all(&["decimal to binary"]),
        R::pure("binary_to_decimal", radix::binary_to_decimal).all(&["binary to decimal"]),
        R::pure("decimal_to_hex", radix::decimal_to_hex).all(&["decimal to hex"]),
        R::pure("hex_to_decimal", radix::hex_to_decimal).all(&["hex to decimal"]),
        R::pure("decimal_to_octal", radix::decimal_to_octal).all(&["decimal to octal"]),
        R::pure("octal_to_decimal", radix::octal_to_decimal).all(&["octal to decimal"]),
        R::pure("base_converter", radix::base_converter)
            .any(&["base converter", "number base", "radix"]),
        // Byte-level text encodings
        R::pure("binary_decode", encoding::binary_decode)
            .all(&["binary"])
            .any(&["decode", "to text"]),
        R::text("binary_encode", encoding::binary_encode).all(&["binary"]),
        R::pure("hex_decode", encoding::hex_decode)
            .all(&["hex"])
            .any(&["decode", "to text"]),
        R::text("hex_encode", encoding::hex_encode).all(&["hex"]),
        R::pure("octal_decode", encoding::octal_decode)
            .all(&["octal"])
            .any(&["decode", "to text"]),
        R::text("octal_encode", encoding::octal_encode).all(&["octal"]),
        R::pure("unicode_unescape", encoding::unicode_unescape)
            .all(&["unicode"])
            .any(&["decode", "unescape"]),
        R::text("unicode_escape", encoding::unicode_escape).all(&["unicode"]),
        R::text("html_decode", encoding::html_decode)
            .all(&["html"])
            .any(&["decode", "unescape"]),
        R::text("html_encode", encoding::html_encode)
            .all(&["html"])
            .any(&["encode", "escape", "entit"]),
        R::text("strip_html", cleaners::strip_html)
            .all(&["html"])
            .any(&["strip", "remove", "to text", "tag"]),
        // Extraction before the URL rules
        R::text("extract_emails", analysis::extract_emails).any(&["email"]),
        R::pure("extract_domains", web::extract_domains).any(&["domain"]),
        R::text("extract_urls", analysis::extract_urls)
            .all(&["extract"])
            .any(&["url", "link"]),
        R::text("extract_numbers", analysis::extract_numbers)
            .all(&["extract"])
            .any(&["number"]),
        R::pure("url_decode", encoding::url_decode)
            .all(&["url"])
            .any(&["decode"]),
        R::text("url_encode", encoding::url_encode)
            .all(&["url"])
            .any(&["encode"]),
        R::pure("url_parse", web::parse_url)
            .all(&["url"])
            .any(&["pars", "analy", "split"]),
        R::text("slugify", web::slugify).any(&["slug"]),
        // Ciphers
        R::text("rot13", cipher::rot13).any(&["rot13", "rot-13", "rot 13"]),
        R::text("caesar_decode", cipher::caesar_decode)
            .all(&["caesar"])
            .any(&["decode", "decrypt"]),
        R::text("caesar_encode", cipher::caesar_encode).all(&["caesar"]),
        R::text("atbash", cipher::atbash).any(&["atbash"]),
        R::text("morse_decode", cipher::morse_decode)
            .all(&["morse"])
            .any(&["decode", "to text"]),
        R::text("morse_encode", cipher::morse_encode)
            .all(&["morse"])
            .any(&["encode", "text to"]),
        R::text("morse", cipher::morse).any(&["morse"]),
        R::text("pig_latin", cipher::pig_latin).any(&["pig latin"]),
        R::text("nato", cipher::nato).any(&["nato", "phonetic"]),
        // Text analysis; "keyword" and "frequency" before the word counter
        R::pure("keyword_density", analysis::keyword_density).any(&["keyword"]),
        R::pure("word_frequency", analysis::word_frequency).any(&["frequency"]),
        R::pure("readability", analysis::readability).any(&["readab", "flesch"]),
        R::pure("regex_test", analysis::regex_test).any(&["regex", "regular expression"]),
        R::pure("date_diff", datetime::date_diff)
            .any(&["date diff", "days between", "date calc"]),
        R::pure("compare", analysis::compare).any(&["compare", "diff", "similarity"]),
        R::text("reading_time", calculators::reading_time)
            .any(&["reading time", "speaking time", "read time"]),
        R::text("word_count", analysis::word_count)
            .any(&["word count", "character count", "char count", "letter count", "text stat"])
            .ids(&["word-counter", "character-counter"]),
        // Case
        R::text("uppercase", case::upper).any(&["uppercase", "upper case"]),
        R::text("lowercase", case::lower).any(&["lowercase", "lower case"]),
        R::text("title_case", case::title).any(&["title case"]),
        R::text("sentence_case", case::sentence).any(&["sentence case"]),
        R::text("alternating_case", case::alternating).any(&["alternat"]),
        R::text("toggle_case", case::toggle).any(&["toggle", "invert case", "swap case"]),
        R::text("capitalize_words", case::capitalize_words).any(&["capitaliz"]),
        R::text("case_converter", case::all_cases).any(&["case"]),
        // Lines; "sort" before "reverse"
        R::text("sort_descending", lines::sort_descending)
            .all(&["sort"])
            .any(&["desc", "z-a", "reverse"]),
        R::text("sort_ascending", lines::sort_ascending).all(&["sort"]),
        R::text("dedupe", lines::dedupe).any(&["duplicate", "dedup"]),
        R::text("remove_empty_lines", lines::remove_empty).any(&["empty line", "blank line"]),
        R::random("shuffle_lines", |input, rng| Ok(lines::shuffle_lines(input, rng)))
            .any(&["shuffle", "randomize lines", "random order"]),
        R::text("number_lines", lines::number_lines).any(&["number lines", "line number"]),
        R::pure("add_prefix", lines::add_prefix).any(&["prefix"]),
        R::pure("add_suffix", lines::add_suffix).any(&["suffix"]),
        // Reversal
        R::text("upside_down", reverse::upside_down)
            .any(&["upside"])
            .ids(&["flip-text"]),
        R::text("flip_text", reverse::upside_down).all(&["flip", "text"]),
        R::text("mirror", reverse::mirror).any(&["mirror"]),
        R::text("reverse_words", reverse::reverse_words)
            .all(&["reverse"])
            .any(&["word"]),
        R::text("reverse_lines", reverse::reverse_lines)
            .all(&["reverse"])
            .any(&["line"]),
        R::text("reverse_text", reverse::reverse_text).any(&["reverse", "backward"]),
        R::text("repeat", reverse::repeat).any(&["repeat"]),
        // Cleaners
        R::text("collapse_whitespace", cleaners::collapse_whitespace)
            .any(&["whitespace", "extra space", "white space"]),
        R::text("trim_lines", cleaners::trim_lines).any(&["trim"]),
        R::text("remove_line_breaks", cleaners::remove_line_breaks)
            .any(&["line break", "newline"]),
        R::text("spaces_to_tabs", cleaners::spaces_to_tabs).any(&["spaces to tab", "space to tab"]),
        R::text("tabs_to_spaces", cleaners::tabs_to_spaces).any(&["tabs to space", "tab to space"]),
        R::text("remove_punctuation", cleaners::remove_punctuation).any(&["punctuation"]),
        // Generators
        R::pure("password_strength", generators::password_strength)
            .all(&["password"])
            .any(&["strength", "check"]),
        R::random("passphrase", |input, rng| Ok(generators::passphrase(input, rng)))
            .any(&["passphrase"]),
        R::random("password", |input, rng| Ok(generators::password(input, rng)))
            .any(&["password"]),
        R::random("uuid", |input, rng| Ok(generators::uuids(input, rng))).any(&["uuid", "guid"]),
        R::random("short_id", |input, rng| Ok(generators::short_id(input, rng)))
            .any(&["short id", "nanoid", "unique id"]),
        R::random("dice", |input, rng| Ok(generators::dice(input, rng))).any(&["dice", "die roll"]),
        R::random("coin_flip", |input, rng| Ok(generators::coin_flip(input, rng))).any(&["coin"]),
        R::random("lottery", |input, rng| Ok(generators::lottery(input, rng))).any(&["lottery"]),
        R::random("name_picker", generators::name_picker)
            .any(&["name picker", "random name", "picker"]),
        R::random("random_number", |input, rng| Ok(generators::random_number(input, rng)))
            .any(&["random number", "number generator"]),
        R::text("lorem_ipsum", generators::lorem_ipsum).any(&["lorem"]),
        // Calculators; "percent" before "age"
        R::pure("bmi", calculators::bmi).any(&["bmi", "body mass"]).ids(&["bmi-calculator"]),
        R::pure("percentage", calculators::percentage).any(&["percent"]),
        R::clock("age", calculators::age).any(&["age calc", "birthday", "how old"]),
        R::pure("tip", calculators::tip).any(&["tip calc", "gratuity"]),
        R::pure("discount", calculators::discount).any(&["discount", "sale price"]),
        R::pure("loan", calculators::loan).any(&["loan", "mortgage", "emi calc"]),
        R::pure("compound_interest", calculators::compound_interest)
            .any(&["compound", "interest"]),
        R::pure("currency", units::currency).any(&["currency", "exchange rate"]),
        R::pure("temperature", units::temperature)
            .any(&["temperature", "celsius", "fahrenheit"]),
        R::pure("length", units::length).any(&["length", "distance"]),
        R::pure("weight", units::weight).any(&["weight", "mass converter"]),
        R::pure("all_units", units::all_units).any(&["unit"]),
        // Date and time
        R::clock("timestamp", datetime::timestamp).any(&["timestamp", "unix", "epoch"]),
        R::clock("countdown", datetime::countdown).any(&["countdown", "days until"]),
        R::clock("world_clock", |input, clock| Ok(datetime::world_clock(input, clock)))
            .any(&["world clock", "time zone", "timezone"]),
        // Link analysis only
        R::pure("download_helper", web::download_helper)
            .any(&["download", "tiktok", "youtube", "instagram", "twitter"]),
        // Generic encoders last
        R::pure("url_decode_generic", encoding::url_decode).any(&["decode"]),
        R::text("url_encode_generic", encoding::url_encode).any(&["encode"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_for(name: &str) -> Option<&'static str> {
        find_rule(&name.to_lowercase(), "").map(|rule| rule.tag)
    }

    #[test]
    fn test_rule_priority() {
        let cases = [
            ("Base64 Encode", Some("base64_encode")),
            ("Base64 URL Encode", Some("base64_encode")),
            ("Base64 Decode", Some("base64_decode")),
            ("URL Encode", Some("url_encode")),
            ("Encode Text", Some("url_encode_generic")),
            ("Keyword Counter", Some("keyword_density")),
            ("Word Counter", Some("word_count")),
            ("Percentage Calculator", Some("percentage")),
            ("Age Calculator", Some("age")),
            ("Engagement Rate Calculator", Some("engagement_rate")),
            ("Tip Calculator", Some("tip")),
            ("Sort Lines Reverse", Some("sort_descending")),
            ("Reverse Words", Some("reverse_words")),
            ("Hex to RGB", Some("hex_to_rgb")),
            ("Hex to Decimal", Some("hex_to_decimal")),
            ("Text to Hex", Some("hex_encode")),
            ("Decimal to Binary", Some("decimal_to_binary")),
            ("Binary to Text", Some("binary_decode")),
            ("Date Difference Calculator", Some("date_diff")),
            ("Text Compare", Some("compare")),
            ("Flip Text", Some("flip_text")),
            ("Coin Flip", Some("coin_flip")),
            ("Hashtag Generator", Some("hashtags")),
            ("Hash Generator", Some("hash")),
            ("Base Converter", Some("base_converter")),
            ("JSON Minifier", Some("json_minify")),
            ("JavaScript Minifier", Some("js_minify")),
            ("Lowercase Converter", Some("lowercase")),
            ("Case Converter", Some("case_converter")),
            ("Password Strength Checker", Some("password_strength")),
            ("Password Generator", Some("password")),
            ("Domain Extractor", Some("extract_domains")),
            ("URL Extractor", Some("extract_urls")),
            ("Lottery Number Generator", Some("lottery")),
            ("Add Line Numbers", Some("number_lines")),
            ("Totally Unknown Tool", None),
        ];
        for (name, expected) in cases {
            assert_eq!(tag_for(name), expected, "tool name {:?}", name);
        }
    }

    #[test]
    fn test_id_match_wins_over_name() {
        let rule = find_rule("something unusual", "bmi-calculator").unwrap();
        assert_eq!(rule.tag, "bmi");
    }

    #[test]
    fn test_keywords_predicate() {
        let keywords = Keywords {
            all: &["json"],
            any: &["minif", "compress"],
            none: &["xml"],
            ids: &[],
        };
        assert!(keywords.matches("json minifier", ""));
        assert!(!keywords.matches("json formatter", ""));
        assert!(!keywords.matches("json xml compressor", ""));

        let id_only = Keywords {
            ids: &["special"],
            ..Keywords::default()
        };
        assert!(id_only.matches("anything", "special"));
        assert!(!id_only.matches("special", "other"));
    }

    #[test]
    fn test_tags_are_unique() {
        let mut tags: Vec<&str> = rules().iter().map(|rule| rule.tag).collect();
        let total = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), total);
    }
}
