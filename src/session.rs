use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-session conversation state: the chat transcript and the rendered
/// report of the statement uploaded in this session. Owned by the
/// application layer and passed into the commentary layer by reference;
/// the analysis engines never touch it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    messages: Vec<ChatMessage>,
    report_markdown: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatRole::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatRole::Assistant, content.into());
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            role,
            content,
            timestamp: Utc::now(),
        });
    }

    /// Caches the rendered report so later questions can be grounded in the
    /// processed statement. Replaced wholesale when a new statement is
    /// analyzed.
    pub fn set_report_markdown(&mut self, markdown: impl Into<String>) {
        self.report_markdown = Some(markdown.into());
    }

    pub fn report_markdown(&self) -> Option<&str> {
        self.report_markdown.as_deref()
    }
}
