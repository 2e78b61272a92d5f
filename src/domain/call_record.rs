//! Call record model - one logged request/response interaction

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One role/content pair from a logged request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A single intercepted (or simulated) API interaction.
///
/// Records are immutable once logged: the capture layer appends them to a
/// JSONL session log and the scanner only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Short unique id, e.g. "a3f91c02"
    pub call_id: String,

    /// When the call was logged
    pub timestamp: DateTime<Utc>,

    /// Model identifier reported by the client
    pub model: String,

    /// System prompt sent with the request, if any
    pub system_prompt: Option<String>,

    /// Ordered conversation messages from the request
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Text of the response. A record without one cannot be scanned.
    pub response_text: Option<String>,
}

impl CallRecord {
    /// Create a new record stamped with the current time
    pub fn new(call_id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            timestamp: Utc::now(),
            model: model.into(),
            system_prompt: None,
            messages: Vec::new(),
            response_text: None,
        }
    }

    // Builder methods
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_message(mut self, role: Role, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    pub fn with_response(mut self, text: impl Into<String>) -> Self {
        self.response_text = Some(text.into());
        self
    }

    /// A record is scannable when its response text is present
    pub fn is_scannable(&self) -> bool {
        self.response_text.is_some()
    }

    /// All text fields of this record, labeled by where they came from
    pub fn text_fields(&self) -> Vec<(super::MatchLocation, &str)> {
        let mut fields = Vec::new();
        if let Some(prompt) = &self.system_prompt {
            fields.push((super::MatchLocation::SystemPrompt, prompt.as_str()));
        }
        for (i, message) in self.messages.iter().enumerate() {
            fields.push((super::MatchLocation::Message(i), message.content.as_str()));
        }
        if let Some(response) = &self.response_text {
            fields.push((super::MatchLocation::Response, response.as_str()));
        }
        fields
    }
}
