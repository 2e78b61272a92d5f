//! Formatted console rendering of a scan report

use callsift::domain::{Confidence, Report};

/// Print a report summary to stdout
pub fn print_report(report: &Report) {
    println!("{}", "=".repeat(70));
    println!("CALL LOG ANALYSIS REPORT");
    println!("{}", "=".repeat(70));

    println!("\nSummary:");
    println!("{}", "-".repeat(70));
    println!("  Total calls:      {}", report.total_calls);
    println!("  Skipped records:  {}", report.skipped_records);
    println!("  Total indicators: {}", report.total_indicators);

    println!("\nIndicators by confidence:");
    println!("{}", "-".repeat(70));
    let counts = [
        (Confidence::High, report.confidence_counts.high),
        (Confidence::Medium, report.confidence_counts.medium),
        (Confidence::Low, report.confidence_counts.low),
    ];
    for (confidence, count) in counts {
        println!("  {:<7} {}", confidence.as_str(), count);
    }

    if !report.matches_by_category.is_empty() {
        println!("\nMatches by category:");
        println!("{}", "-".repeat(70));
        for (category, matches) in &report.matches_by_category {
            println!("  {} ({})", category.as_str(), matches.len());
            for m in matches.iter().take(3) {
                println!(
                    "    {} in {} of call {}: {:?}",
                    m.rule, m.location, m.call_id, truncate(&m.excerpt, 50)
                );
            }
        }
    }

    if !report.pattern_frequency.is_empty() {
        println!("\nPattern frequency:");
        println!("{}", "-".repeat(70));
        let mut by_count: Vec<_> = report.pattern_frequency.iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (rule, count) in by_count {
            println!("  {:<25} {}", rule, count);
        }
    }

    println!("\nRecommendations:");
    println!("{}", "-".repeat(70));
    for (i, recommendation) in report.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, recommendation);
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    }
}
