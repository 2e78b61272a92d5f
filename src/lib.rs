//! callsift - announcement indicator scanner for intercepted API calls
//!
//! callsift consumes logged API call records (real or simulated
//! request/response interactions with an LLM client), evaluates a fixed
//! table of detection rules over their text fields, and produces a
//! confidence-scored report of suspected injected announcements.
//!
//! ## Pipeline
//!
//! 1. **Capture**: call records land in an append-only JSONL session log,
//!    one record per line. A bundled simulator stands in for a real
//!    interception hook.
//!
//! 2. **Scan**: a stateless pass evaluates every rule against every
//!    record's text fields. Matches are grouped by category and tallied
//!    per confidence level, once per (rule, record) pair.
//!
//! 3. **Report**: the aggregate is written as a JSON snapshot alongside
//!    threshold-derived recommendations.

pub mod capture;
pub mod config;
pub mod domain;
pub mod rules;
pub mod scanner;
pub mod simulate;

pub use domain::*;
