use std::time::Duration;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Try the candidate endpoints in order.
    Discover,
    StartPolling { interval: Duration },
    StopPolling,
    CheckStatus { endpoint: String },
    SendChat {
        request_id: RequestId,
        endpoint: String,
        message: String,
    },
}
