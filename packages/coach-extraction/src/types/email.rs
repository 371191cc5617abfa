//! Email candidate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an address was found on the page.
///
/// Variants are declared in priority order: when two strategies find the
/// same address, the earlier one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMethod {
    /// `href="mailto:..."` attribute
    Mailto,
    /// Plain `local@domain.tld` text
    Regex,
    /// `local [at] domain [dot] tld`
    Obfuscated,
}

impl SourceMethod {
    /// Fixed confidence tier for this detection strategy.
    pub fn confidence(self) -> f32 {
        match self {
            SourceMethod::Mailto => 0.95,
            SourceMethod::Regex => 0.80,
            SourceMethod::Obfuscated => 0.70,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceMethod::Mailto => "mailto",
            SourceMethod::Regex => "regex",
            SourceMethod::Obfuscated => "obfuscated",
        }
    }
}

impl fmt::Display for SourceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email address discovered on a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEmail {
    /// Normalized (trimmed, lower-cased) address
    pub email: String,

    /// Confidence tier of the strategy that found it
    pub confidence: f32,

    /// Strategy that found it
    pub source_method: SourceMethod,

    /// Nearby heading/bold text, if found
    pub context_name: Option<String>,

    /// Nearby title/position text, if found
    pub context_title: Option<String>,
}

impl CandidateEmail {
    /// Create a candidate with no DOM context.
    pub fn new(email: impl Into<String>, source_method: SourceMethod) -> Self {
        Self {
            email: email.into(),
            confidence: source_method.confidence(),
            source_method,
            context_name: None,
            context_title: None,
        }
    }

    /// Attach name/title context found near the address.
    pub fn with_context(mut self, name: Option<String>, title: Option<String>) -> Self {
        self.context_name = name;
        self.context_title = title;
        self
    }
}
