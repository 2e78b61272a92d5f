//! Core domain models

mod call_record;
mod indicator;
mod report;

pub use call_record::{CallRecord, Message, Role};
pub use indicator::{Confidence, IndicatorMatch, MatchLocation, RuleCategory};
pub use report::{ConfidenceCounts, Report};
