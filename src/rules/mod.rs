//! Indicator rule table
//!
//! Detection rules are declarative: name, compiled pattern, fixed
//! confidence, category. The default table covers the five announcement
//! cue categories; confidence is assigned per rule, never per match.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::{Confidence, RuleCategory};

/// Error building a rule or rule set
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule set must contain at least one rule")]
    EmptyRuleSet,

    #[error("duplicate rule name: {0}")]
    DuplicateName(String),

    #[error("invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// A named detection rule
#[derive(Debug, Clone)]
pub struct IndicatorRule {
    pub name: String,
    pub category: RuleCategory,
    pub confidence: Confidence,
    pub pattern: Regex,
}

impl IndicatorRule {
    /// Compile a rule from a pattern string
    pub fn new(
        name: impl Into<String>,
        category: RuleCategory,
        confidence: Confidence,
        pattern: &str,
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            name: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            category,
            confidence,
            pattern,
        })
    }
}

/// A validated, non-empty set of uniquely named rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<IndicatorRule>,
}

impl RuleSet {
    /// Validate and wrap a list of rules
    pub fn new(rules: Vec<IndicatorRule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::EmptyRuleSet);
        }
        let mut seen: Vec<&str> = Vec::with_capacity(rules.len());
        for rule in &rules {
            if seen.contains(&rule.name.as_str()) {
                return Err(RuleError::DuplicateName(rule.name.clone()));
            }
            seen.push(&rule.name);
        }
        Ok(Self { rules })
    }

    /// The built-in announcement detection rules
    pub fn default_rules() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }

    pub fn rules(&self) -> &[IndicatorRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Pattern sources for the default table, kept together so the table reads
/// like the rule documentation.
const BANNER_PATTERN: &str = r"\*{3,}|={3,}|-{3,}";
const KEYWORD_PATTERN: &str = r"(?i)\b(urgent|notice|update|announcement|important)\b";
const DATE_REFERENCE_PATTERN: &str = r"(?i)\b(effective|starting|as of)\s+(\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?|(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2})";
const SYSTEM_MARKER_PATTERN: &str = r"(?i)\[\s*(system|admin)\s*\]";
const VERSION_PATTERN: &str = r"(?i)\b(v\d+\.\d+(\.\d+)?|version\s+\d+(\.\d+)*)\b";

static DEFAULT_RULES: Lazy<Vec<IndicatorRule>> = Lazy::new(|| {
    let table = [
        (
            "banner_format",
            RuleCategory::BannerFormatting,
            Confidence::High,
            BANNER_PATTERN,
        ),
        (
            "system_message_marker",
            RuleCategory::SystemMessageMarker,
            Confidence::High,
            SYSTEM_MARKER_PATTERN,
        ),
        (
            "announcement_keyword",
            RuleCategory::AnnouncementKeyword,
            Confidence::Medium,
            KEYWORD_PATTERN,
        ),
        (
            "date_reference",
            RuleCategory::DateReference,
            Confidence::Medium,
            DATE_REFERENCE_PATTERN,
        ),
        (
            "version_info",
            RuleCategory::VersionInfo,
            Confidence::Low,
            VERSION_PATTERN,
        ),
    ];

    table
        .into_iter()
        .map(|(name, category, confidence, pattern)| {
            IndicatorRule::new(name, category, confidence, pattern)
                .expect("default rule pattern is valid")
        })
        .collect()
});
