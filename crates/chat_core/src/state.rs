use crate::view_model::AppViewModel;
use crate::status::PENDING_PLACEHOLDER;
use crate::{ChatMessage, IndicatorStyle, Status, PENDING_LABEL};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mounted: bool,
    discovering: bool,
    endpoint: Option<String>,
    status: Option<Status>,
    reason: String,
    input: String,
    outstanding_replies: usize,
    next_request_id: RequestId,
    // Display record only; update never reads it back.
    messages: Vec<ChatMessage>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let input_enabled = self.status.is_some_and(Status::input_enabled);
        AppViewModel {
            status: self.status,
            status_label: self
                .status
                .map_or(PENDING_LABEL, Status::label)
                .to_string(),
            indicator: self
                .status
                .map_or(IndicatorStyle::Pending, Status::indicator),
            placeholder: match self.status {
                Some(_) => self.reason.clone(),
                None => PENDING_PLACEHOLDER.to_string(),
            },
            endpoint: self.endpoint.clone(),
            input: self.input.clone(),
            input_enabled,
            send_enabled: input_enabled && self.endpoint.is_some(),
            send_active: !self.input.trim().is_empty(),
            typing: self.outstanding_replies > 0,
            messages: self.messages.clone(),
            dirty: self.dirty,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn is_discovering(&self) -> bool {
        self.discovering
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    pub(crate) fn begin_discovery(&mut self) {
        self.discovering = true;
        self.mark_dirty();
    }

    pub(crate) fn finish_discovery(&mut self, endpoint: Option<String>) {
        self.discovering = false;
        self.endpoint = endpoint;
        self.mark_dirty();
    }

    pub(crate) fn set_status(&mut self, status: Status, reason: Option<&str>) {
        self.status = Some(status);
        self.reason = reason.unwrap_or(status.default_reason()).to_string();
        self.mark_dirty();
    }

    pub(crate) fn can_send(&self) -> bool {
        self.endpoint.is_some() && self.status.is_some_and(Status::input_enabled)
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.mark_dirty();
    }

    pub(crate) fn begin_reply(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.outstanding_replies += 1;
        self.mark_dirty();
        self.next_request_id
    }

    pub(crate) fn end_reply(&mut self) {
        self.outstanding_replies = self.outstanding_replies.saturating_sub(1);
        self.mark_dirty();
    }
}
