//! Chat widget core: pure state machine and view-model helpers.
mod effect;
mod message;
mod msg;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::Effect;
pub use message::{Author, ChatMessage, DISCOVERY_FAILED_NOTICE, FALLBACK_REPLY};
pub use msg::{Msg, ReplyOutcome, StatusCheck};
pub use state::{AppState, RequestId};
pub use status::{IndicatorStyle, Status, PENDING_LABEL, POLL_INTERVAL};
pub use update::update;
pub use view_model::AppViewModel;
