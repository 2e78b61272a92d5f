//! Report model - the aggregate result of one scan run

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Confidence, IndicatorMatch, RuleCategory};

/// Indicator totals per confidence level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfidenceCounts {
    #[serde(rename = "HIGH")]
    pub high: usize,
    #[serde(rename = "MEDIUM")]
    pub medium: usize,
    #[serde(rename = "LOW")]
    pub low: usize,
}

impl ConfidenceCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    pub fn bump(&mut self, confidence: Confidence) {
        match confidence {
            Confidence::High => self.high += 1,
            Confidence::Medium => self.medium += 1,
            Confidence::Low => self.low += 1,
        }
    }
}

/// Aggregate summary of a scan over a batch of call records.
///
/// Deliberately carries no wall-clock timestamp: the same (records, rules)
/// input must always serialize to the same bytes. The report writer stamps
/// the output filename instead.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Records seen, scannable or not
    pub total_calls: usize,
    /// Records missing required text fields, excluded from all groupings
    pub skipped_records: usize,
    /// One per (rule, record) pair that fired
    pub total_indicators: usize,
    /// Indicator totals per confidence level
    pub confidence_counts: ConfidenceCounts,
    /// Matches grouped by rule category, in category order
    pub matches_by_category: BTreeMap<RuleCategory, Vec<IndicatorMatch>>,
    /// How many records each rule fired in
    pub pattern_frequency: BTreeMap<String, usize>,
    /// Threshold-derived guidance for whoever reads the report
    pub recommendations: Vec<String>,
}

impl Report {
    /// An empty report over `total_calls` records, before any matches land
    pub fn empty(total_calls: usize) -> Self {
        Self {
            total_calls,
            skipped_records: 0,
            total_indicators: 0,
            confidence_counts: ConfidenceCounts::default(),
            matches_by_category: BTreeMap::new(),
            pattern_frequency: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    /// Number of distinct records that produced at least one match
    pub fn records_with_matches(&self) -> usize {
        let mut ids: Vec<&str> = self
            .matches_by_category
            .values()
            .flatten()
            .map(|m| m.call_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// All matches in a given category, empty slice if none
    pub fn matches_in(&self, category: RuleCategory) -> &[IndicatorMatch] {
        self.matches_by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
