use crate::{
    AppState, ChatMessage, Effect, Msg, ReplyOutcome, Status, StatusCheck,
    DISCOVERY_FAILED_NOTICE, FALLBACK_REPLY, POLL_INTERVAL,
};

const REASON_NOT_FOUND: &str = "API server not found";
const REASON_NO_CONNECTION: &str = "API connection not established";
const REASON_UNREACHABLE: &str = "API server unreachable";
const REASON_NOT_RUNNING: &str = "Ollama is installed but not running";
const REASON_NOT_INSTALLED: &str = "Ollama is not installed";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.is_mounted() {
                return (state, Vec::new());
            }
            state.set_mounted(true);
            let mut effects = start_discovery(&mut state);
            effects.push(Effect::StartPolling {
                interval: POLL_INTERVAL,
            });
            effects
        }
        Msg::Unmounted => {
            if !state.is_mounted() {
                return (state, Vec::new());
            }
            state.set_mounted(false);
            vec![Effect::StopPolling]
        }
        Msg::ReconnectRequested => start_discovery(&mut state),
        Msg::DiscoveryFinished(Some(endpoint)) => {
            state.finish_discovery(Some(endpoint.clone()));
            vec![Effect::CheckStatus { endpoint }]
        }
        Msg::DiscoveryFinished(None) => {
            state.finish_discovery(None);
            state.set_status(Status::Error, Some(REASON_NOT_FOUND));
            state.push_message(ChatMessage::assistant(DISCOVERY_FAILED_NOTICE));
            Vec::new()
        }
        Msg::PollTick => {
            // A discovery cycle in flight will report its own result.
            if state.is_discovering() {
                return (state, Vec::new());
            }
            match state.endpoint() {
                Some(endpoint) => vec![Effect::CheckStatus {
                    endpoint: endpoint.to_string(),
                }],
                None => {
                    state.set_status(Status::Error, Some(REASON_NO_CONNECTION));
                    Vec::new()
                }
            }
        }
        Msg::StatusChecked(check) => {
            match check {
                StatusCheck::Running => state.set_status(Status::Online, None),
                StatusCheck::NotRunning {
                    installed: Some(false),
                } => state.set_status(Status::Offline, Some(REASON_NOT_INSTALLED)),
                StatusCheck::NotRunning { .. } => {
                    state.set_status(Status::Offline, Some(REASON_NOT_RUNNING))
                }
                StatusCheck::Unreachable => {
                    state.set_status(Status::Error, Some(REASON_UNREACHABLE))
                }
            }
            Vec::new()
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::EnterPressed | Msg::SubmitClicked => submit(&mut state),
        Msg::ReplyReceived {
            request_id: _,
            outcome,
        } => {
            state.end_reply();
            match outcome {
                ReplyOutcome::Answered { text, urgent } => {
                    state.push_message(ChatMessage::assistant(text).urgent(urgent));
                    Vec::new()
                }
                ReplyOutcome::Failed => {
                    state.push_message(ChatMessage::assistant(FALLBACK_REPLY));
                    // The backend may have gone away; re-check right now.
                    state
                        .endpoint()
                        .map(|endpoint| Effect::CheckStatus {
                            endpoint: endpoint.to_string(),
                        })
                        .into_iter()
                        .collect()
                }
            }
        }
    };

    (state, effects)
}

fn start_discovery(state: &mut AppState) -> Vec<Effect> {
    if state.is_discovering() {
        return Vec::new();
    }
    state.begin_discovery();
    vec![Effect::Discover]
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if !state.can_send() {
        return Vec::new();
    }
    let message = state.input().trim().to_string();
    if message.is_empty() {
        return Vec::new();
    }
    let Some(endpoint) = state.endpoint().map(ToOwned::to_owned) else {
        return Vec::new();
    };

    state.push_message(ChatMessage::user(message.clone()));
    state.set_input(String::new());
    let request_id = state.begin_reply();
    vec![Effect::SendChat {
        request_id,
        endpoint,
        message,
    }]
}
