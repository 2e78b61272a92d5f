//! Threshold-derived guidance attached to every report

use crate::domain::{Report, RuleCategory};

/// Matches spanning at least this many distinct records indicate a
/// systemic pattern rather than an isolated call.
const SYSTEMIC_RECORD_THRESHOLD: usize = 3;

/// Derive the recommendation list for a finished report.
///
/// Thresholds are fixed constants; the same report always yields the same
/// recommendations.
pub(super) fn for_report(report: &Report) -> Vec<String> {
    let mut recommendations = Vec::new();

    if report.confidence_counts.high >= 1 {
        recommendations.push(format!(
            "Found {} high-confidence announcement indicator(s). \
             Investigate the system prompt for injected content.",
            report.confidence_counts.high
        ));
    }

    if !report.matches_in(RuleCategory::BannerFormatting).is_empty() {
        recommendations.push(
            "Banner-formatted text detected. Check whether this content \
             originates from user input or was injected."
                .to_string(),
        );
    }

    if !report.matches_in(RuleCategory::SystemMessageMarker).is_empty() {
        recommendations.push(
            "System message markers detected. Verify these are part of the \
             normal conversation rather than injected announcements."
                .to_string(),
        );
    }

    if !report.matches_in(RuleCategory::DateReference).is_empty() {
        recommendations.push(
            "Date references found. Check whether they align with known \
             announcement dates."
                .to_string(),
        );
    }

    if report.records_with_matches() >= SYSTEMIC_RECORD_THRESHOLD {
        recommendations.push(format!(
            "Indicators span {} distinct calls. The pattern is systemic, \
             not isolated.",
            report.records_with_matches()
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(
            "No strong announcement indicators detected. Continue monitoring \
             or adjust detection rules."
                .to_string(),
        );
    }

    recommendations
}
