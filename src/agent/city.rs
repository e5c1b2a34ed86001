//! City-extraction heuristic.
//!
//! Best-effort text mining, not geocoding: a wrong guess is corrected by the
//! downstream lookup failing on it.

use std::sync::OnceLock;

use regex::Regex;

/// Punctuation stripped from candidate city strings.
const TRIM_CHARS: &[char] = &[' ', '.', ',', '\'', '?', '!'];

/// Keywords that are query vocabulary, never city names.
const FILTERED_KEYWORDS: &[&str] = &["weather", "forecast"];

fn in_city_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The greedy `.*` prefix makes the last "in" clause win; the trailing
    // `[?!\s]*` lets "in San Francisco?" still anchor at end of string. The
    // capture itself is trimmed afterwards.
    RE.get_or_init(|| {
        Regex::new(r"(?i)^.*\bin\s+([A-Za-z\s\-.,']+)[?!\s]*$").expect("valid city regex")
    })
}

/// Extract an optional city name from a free-text message.
///
/// Rules in priority order, first match wins:
/// 1. a trailing "in <city>" clause,
/// 2. the part after the last comma,
/// 3. the last whitespace token, unless it is a filtered keyword.
pub fn extract_city(message: &str) -> Option<String> {
    let msg = message.trim();
    if msg.is_empty() {
        return None;
    }

    if let Some(caps) = in_city_regex().captures(msg) {
        let city = caps[1].trim_matches(TRIM_CHARS);
        if !city.is_empty() {
            return Some(city.to_string());
        }
    }

    if msg.contains(',') {
        let last = msg
            .rsplit(',')
            .next()
            .map(|part| part.trim_matches(TRIM_CHARS))
            .unwrap_or_default();
        if !last.is_empty() {
            return Some(last.to_string());
        }
    }

    let candidate = msg
        .split_whitespace()
        .next_back()
        .map(|part| part.trim_matches(TRIM_CHARS))
        .unwrap_or_default();
    if !candidate.is_empty()
        && !FILTERED_KEYWORDS
            .iter()
            .any(|kw| candidate.eq_ignore_ascii_case(kw))
    {
        return Some(candidate.to_string());
    }

    None
}
