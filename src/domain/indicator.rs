//! Indicator model - detection results and their classification

use serde::{Deserialize, Serialize};

/// Confidence level assigned to a detection rule
///
/// Structural/formatting cues (banners, bracketed system markers) are
/// stronger evidence of injected content than generic vocabulary, so
/// confidence is fixed per rule rather than computed from match strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Confidence::High),
            "medium" | "med" => Some(Confidence::Medium),
            "low" => Some(Confidence::Low),
            _ => None,
        }
    }
}

/// The fixed set of indicator rule categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Runs of `*`, `=` or `-` forming a visual separator
    BannerFormatting,
    /// Fixed announcement vocabulary ("urgent", "notice", ...)
    AnnouncementKeyword,
    /// "effective" / "starting" / "as of" followed by a date-like token
    DateReference,
    /// Bracketed tags such as "[system]" or "[admin]"
    SystemMessageMarker,
    /// Version-number-like tokens, e.g. "v2.0.1" or "version 2.0"
    VersionInfo,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::BannerFormatting => "banner-formatting",
            RuleCategory::AnnouncementKeyword => "announcement-keyword",
            RuleCategory::DateReference => "date-reference",
            RuleCategory::SystemMessageMarker => "system-message-marker",
            RuleCategory::VersionInfo => "version-info",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "banner-formatting" | "banner" => Some(RuleCategory::BannerFormatting),
            "announcement-keyword" | "keyword" => Some(RuleCategory::AnnouncementKeyword),
            "date-reference" | "date" => Some(RuleCategory::DateReference),
            "system-message-marker" | "system-marker" => Some(RuleCategory::SystemMessageMarker),
            "version-info" | "version" => Some(RuleCategory::VersionInfo),
            _ => None,
        }
    }
}

/// Where in a record a rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLocation {
    SystemPrompt,
    /// Index into the record's message list
    Message(usize),
    Response,
}

impl std::fmt::Display for MatchLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLocation::SystemPrompt => write!(f, "system_prompt"),
            MatchLocation::Message(i) => write!(f, "message_{}", i),
            MatchLocation::Response => write!(f, "response"),
        }
    }
}

impl Serialize for MatchLocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result of one rule firing in one record.
///
/// A rule may match several spans in a record; they are collapsed into a
/// single match carrying the first span and an occurrence count, so the
/// report counts indicators rather than raw substring hits.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorMatch {
    /// Name of the rule that fired
    pub rule: String,
    /// Confidence assigned to the rule
    pub confidence: Confidence,
    /// Category of the rule
    pub category: RuleCategory,
    /// First matched substring
    pub excerpt: String,
    /// Field of the record the first span was found in
    pub location: MatchLocation,
    /// Total spans this rule matched across the record's fields
    pub occurrences: usize,
    /// Id of the record the rule fired in
    pub call_id: String,
}
