use chat_client::{ClientError, ClientEvent, ClientHandle, ClientSettings};
use chat_core::{Effect, Msg, ReplyOutcome, StatusCheck};
use chat_logging::{chat_debug, chat_info, chat_warn};

/// Executes core effects on the client worker and turns its events back into messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        Ok(Self::with_client(ClientHandle::new(settings)?))
    }

    pub fn with_client(client: ClientHandle) -> Self {
        Self { client }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Discover => {
                    chat_info!("Discover");
                    self.client.discover();
                }
                Effect::StartPolling { interval } => {
                    self.client.start_polling(interval);
                }
                Effect::StopPolling => {
                    self.client.stop_polling();
                }
                Effect::CheckStatus { endpoint } => {
                    chat_debug!("CheckStatus endpoint={}", endpoint);
                    self.client.check_status(endpoint);
                }
                Effect::SendChat {
                    request_id,
                    endpoint,
                    message,
                } => {
                    chat_debug!("SendChat request_id={} endpoint={}", request_id, endpoint);
                    self.client.send_chat(request_id, endpoint, message);
                }
            }
        }
    }

    /// Collects every client event that has arrived so far.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.client.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::Discovered(endpoint) => Msg::DiscoveryFinished(endpoint),
        ClientEvent::PollDue => Msg::PollTick,
        ClientEvent::StatusChecked(result) => Msg::StatusChecked(match result {
            Ok(report) if report.running => StatusCheck::Running,
            Ok(report) => StatusCheck::NotRunning {
                installed: report.installed,
            },
            Err(_) => StatusCheck::Unreachable,
        }),
        ClientEvent::ReplyReceived { request_id, result } => Msg::ReplyReceived {
            request_id,
            outcome: match result {
                Ok(reply) => ReplyOutcome::Answered {
                    text: reply.response,
                    urgent: reply.crisis_detected,
                },
                Err(err) => {
                    chat_warn!("Reply {} failed: {}", request_id, err);
                    ReplyOutcome::Failed
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_client::{ApiError, ChatReply, FailureKind, StatusReport};
    use pretty_assertions::assert_eq;

    #[test]
    fn status_events_map_to_checks() {
        let running = ClientEvent::StatusChecked(Ok(StatusReport {
            running: true,
            installed: Some(true),
        }));
        assert_eq!(map_event(running), Msg::StatusChecked(StatusCheck::Running));

        let stopped = ClientEvent::StatusChecked(Ok(StatusReport {
            running: false,
            installed: Some(false),
        }));
        assert_eq!(
            map_event(stopped),
            Msg::StatusChecked(StatusCheck::NotRunning {
                installed: Some(false)
            })
        );

        let failed =
            ClientEvent::StatusChecked(Err(ApiError::new(FailureKind::HttpStatus(502), "bad")));
        assert_eq!(
            map_event(failed),
            Msg::StatusChecked(StatusCheck::Unreachable)
        );

        let unreadable =
            ClientEvent::StatusChecked(Err(ApiError::new(FailureKind::Decode, "expected value")));
        assert_eq!(
            map_event(unreadable),
            Msg::StatusChecked(StatusCheck::Unreachable)
        );
    }

    #[test]
    fn reply_events_carry_request_id() {
        let ok = ClientEvent::ReplyReceived {
            request_id: 4,
            result: Ok(ChatReply {
                response: "hi".to_string(),
                crisis_detected: true,
            }),
        };
        assert_eq!(
            map_event(ok),
            Msg::ReplyReceived {
                request_id: 4,
                outcome: ReplyOutcome::Answered {
                    text: "hi".to_string(),
                    urgent: true,
                },
            }
        );

        let err = ClientEvent::ReplyReceived {
            request_id: 5,
            result: Err(ApiError::new(FailureKind::Network, "refused")),
        };
        assert_eq!(
            map_event(err),
            Msg::ReplyReceived {
                request_id: 5,
                outcome: ReplyOutcome::Failed,
            }
        );
    }

    #[test]
    fn poll_and_discovery_events_map_directly() {
        assert_eq!(map_event(ClientEvent::PollDue), Msg::PollTick);
        assert_eq!(
            map_event(ClientEvent::Discovered(None)),
            Msg::DiscoveryFinished(None)
        );
    }
}
