use std::time::Duration;

/// Period between background liveness checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Label shown before the first liveness result arrives.
pub const PENDING_LABEL: &str = "AI Assistant (Connecting)";

pub(crate) const PENDING_PLACEHOLDER: &str = "Connecting to the AI service...";

const ONLINE_PLACEHOLDER: &str = "Message Mental Wellness...";

/// Backend availability as last observed by a liveness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Online,
    Offline,
    Error,
}

/// How the status dot is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// No liveness result yet.
    #[default]
    Pending,
    OnlinePulse,
    Offline,
    Error,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Online => "AI Assistant (Online)",
            Status::Offline => "AI Assistant (Offline)",
            Status::Error => "AI Assistant (Error)",
        }
    }

    pub fn indicator(self) -> IndicatorStyle {
        match self {
            Status::Online => IndicatorStyle::OnlinePulse,
            Status::Offline => IndicatorStyle::Offline,
            Status::Error => IndicatorStyle::Error,
        }
    }

    /// Only an online backend accepts input.
    pub fn input_enabled(self) -> bool {
        matches!(self, Status::Online)
    }

    /// Placeholder text used when no specific reason is supplied.
    pub fn default_reason(self) -> &'static str {
        match self {
            Status::Online => ONLINE_PLACEHOLDER,
            Status::Offline => "AI Assistant is offline",
            Status::Error => "Error connecting to AI",
        }
    }
}
