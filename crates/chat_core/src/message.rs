/// Assistant text appended when a send request fails.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process your request at the moment.";

/// Assistant text appended when no backend answered at startup.
pub const DISCOVERY_FAILED_NOTICE: &str =
    "Could not connect to the AI service. Please make sure the server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One rendered chat bubble. Never modified once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
    /// Set on replies the backend flagged as crisis responses.
    pub urgent: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
            urgent: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            text: text.into(),
            urgent: false,
        }
    }

    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }
}
