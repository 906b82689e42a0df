//! Chat client: HTTP exchanges with the chat backend and the worker that runs them.
mod api;
mod discovery;
mod engine;
mod poller;
mod types;

pub use api::{ChatApi, ClientSettings, ReqwestChatApi};
pub use discovery::discover;
pub use engine::ClientHandle;
pub use poller::PollTimer;
pub use types::{
    ApiError, ChatReply, ChatRequest, ClientError, ClientEvent, FailureKind, RequestId,
    StatusReport,
};
