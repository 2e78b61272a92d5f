//! Shared test utilities for scanner integration tests
#![allow(dead_code)]

use callsift::domain::{CallRecord, Role};

/// A benign record: conversational text with no announcement cues
pub fn clean_record(call_id: &str) -> CallRecord {
    CallRecord::new(call_id, "claude-sonnet-4-20250514")
        .with_system_prompt("You are a helpful coding assistant.")
        .with_message(Role::User, "Can you help me refactor this function?")
        .with_response("Sure, here is the refactored code.")
}

/// A record whose system prompt carries the canonical injected notice
pub fn injected_record(call_id: &str) -> CallRecord {
    clean_record(call_id)
        .with_system_prompt("*** SYSTEM NOTICE: effective March 1, version 2.0 ***")
}

/// A record missing its response text
pub fn broken_record(call_id: &str) -> CallRecord {
    CallRecord::new(call_id, "claude-sonnet-4-20250514")
        .with_message(Role::User, "Hello")
}
