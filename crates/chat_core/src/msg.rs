use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The widget was attached to a view; starts discovery and polling.
    Mounted,
    /// The widget is going away; stops polling.
    Unmounted,
    /// User asked to try the candidate endpoints again.
    ReconnectRequested,
    /// User edited the message input.
    InputChanged(String),
    /// User clicked the send control.
    SubmitClicked,
    /// User pressed Enter without a line-break modifier.
    EnterPressed,
    /// Endpoint discovery finished with the first reachable base URL, if any.
    DiscoveryFinished(Option<String>),
    /// The poll timer fired.
    PollTick,
    /// A liveness check completed.
    StatusChecked(StatusCheck),
    /// A chat request completed.
    ReplyReceived {
        request_id: RequestId,
        outcome: ReplyOutcome,
    },
}

/// Interpreted result of `GET /api/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCheck {
    Running,
    NotRunning { installed: Option<bool> },
    Unreachable,
}

/// Interpreted result of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Answered { text: String, urgent: bool },
    Failed,
}
