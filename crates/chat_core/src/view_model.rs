use crate::{ChatMessage, IndicatorStyle, Status};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// `None` until the first liveness result arrives.
    pub status: Option<Status>,
    pub status_label: String,
    pub indicator: IndicatorStyle,
    /// Input placeholder; carries the reason text while input is disabled.
    pub placeholder: String,
    pub endpoint: Option<String>,
    pub input: String,
    pub input_enabled: bool,
    pub send_enabled: bool,
    /// Input holds something worth sending.
    pub send_active: bool,
    pub typing: bool,
    pub messages: Vec<ChatMessage>,
    pub dirty: bool,
}
