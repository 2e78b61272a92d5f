//! Record scanner - evaluates the rule table over a batch of call records
//!
//! The scan is a pure fold: no clock reads, no randomness, no external
//! state. Identical (records, rules) inputs always produce byte-identical
//! reports, and aggregate counts do not depend on record order.

use tracing::{debug, warn};

use crate::domain::{CallRecord, IndicatorMatch, MatchLocation, Report};
use crate::rules::{IndicatorRule, RuleError, RuleSet};

mod recommendations;

/// Scans call records for announcement indicators
pub struct Scanner {
    rules: RuleSet,
}

impl Scanner {
    /// Create a scanner over a validated rule set
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create a scanner from raw rules, validating them first
    pub fn try_from_rules(rules: Vec<IndicatorRule>) -> Result<Self, RuleError> {
        Ok(Self::new(RuleSet::new(rules)?))
    }

    /// Create a scanner with the built-in rule table
    pub fn with_default_rules() -> Self {
        Self::new(RuleSet::default_rules())
    }

    /// Scan a batch of records and build the aggregate report.
    ///
    /// Records missing their response text are counted as skipped and
    /// contribute nothing to any grouping. A rule firing several times in
    /// one record yields a single match for that (rule, record) pair.
    pub fn scan(&self, records: &[CallRecord]) -> Report {
        let mut report = Report::empty(records.len());

        for record in records {
            if !record.is_scannable() {
                warn!(call_id = %record.call_id, "skipping record with missing response text");
                report.skipped_records += 1;
                continue;
            }

            for rule in self.rules.rules() {
                if let Some(found) = apply_rule(rule, record) {
                    debug!(
                        call_id = %record.call_id,
                        rule = %found.rule,
                        occurrences = found.occurrences,
                        "rule fired"
                    );
                    report.confidence_counts.bump(found.confidence);
                    report.total_indicators += 1;
                    *report.pattern_frequency.entry(found.rule.clone()).or_insert(0) += 1;
                    report
                        .matches_by_category
                        .entry(found.category)
                        .or_default()
                        .push(found);
                }
            }
        }

        report.recommendations = recommendations::for_report(&report);
        report
    }
}

/// Evaluate one rule against every text field of one record.
///
/// Returns at most one match: the first span found (fields are visited in
/// record order) plus the total span count across all fields.
fn apply_rule(rule: &IndicatorRule, record: &CallRecord) -> Option<IndicatorMatch> {
    let mut first: Option<(MatchLocation, String)> = None;
    let mut occurrences = 0;

    for (location, text) in record.text_fields() {
        for span in rule.pattern.find_iter(text) {
            occurrences += 1;
            if first.is_none() {
                first = Some((location, span.as_str().to_string()));
            }
        }
    }

    first.map(|(location, excerpt)| IndicatorMatch {
        rule: rule.name.clone(),
        confidence: rule.confidence,
        category: rule.category,
        excerpt,
        location,
        occurrences,
        call_id: record.call_id.clone(),
    })
}
