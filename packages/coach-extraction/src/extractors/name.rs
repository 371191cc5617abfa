//! Split a free-text full name into first/last components.

use serde::{Deserialize, Serialize};

/// Leading honorifics, compared lower-cased without trailing periods.
const HONORIFICS: &[&str] = &["dr", "mr", "mrs", "ms", "coach", "prof"];

/// Trailing suffixes, compared lower-cased without trailing periods/commas.
const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "phd", "ph.d", "edd", "ed.d", "med", "m.ed",
];

/// Name components derived from a raw string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// Whitespace-collapsed input, honorifics and suffixes included
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn is_honorific(token: &str) -> bool {
    let key = token.to_lowercase();
    HONORIFICS.contains(&key.trim_end_matches('.'))
}

fn is_suffix(token: &str) -> bool {
    let key = token.to_lowercase();
    SUFFIXES.contains(&key.trim_end_matches(['.', ',']))
}

fn clean_token(token: &str) -> String {
    token.trim_end_matches(',').to_string()
}

/// Parse a full name. Absent or blank input yields all `None`.
pub fn parse(full_name: Option<&str>) -> ParsedName {
    let Some(raw) = full_name else {
        return ParsedName::default();
    };

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() {
        return ParsedName::default();
    }
    let cleaned = tokens.join(" ");

    let mut parts = tokens.as_slice();
    while let Some((first, rest)) = parts.split_first() {
        if !is_honorific(first) {
            break;
        }
        parts = rest;
    }
    while let Some((last, rest)) = parts.split_last() {
        if !is_suffix(last) {
            break;
        }
        parts = rest;
    }

    match parts {
        [] => ParsedName {
            full_name: Some(cleaned),
            ..ParsedName::default()
        },
        [only] => ParsedName {
            full_name: Some(cleaned),
            first_name: Some(clean_token(only)),
            last_name: None,
        },
        [first, .., last] => ParsedName {
            full_name: Some(cleaned),
            first_name: Some(clean_token(first)),
            last_name: Some(clean_token(last)),
        },
    }
}
