use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chat_logging::{chat_debug, chat_info, chat_warn, describe_text};

use crate::api::{ChatApi, ClientSettings, ReqwestChatApi};
use crate::discovery::discover;
use crate::poller::PollTimer;
use crate::{ClientError, ClientEvent, RequestId};

enum ClientCommand {
    Discover,
    CheckStatus {
        endpoint: String,
    },
    SendChat {
        request_id: RequestId,
        endpoint: String,
        message: String,
    },
    StartPolling {
        interval: Duration,
    },
    StopPolling,
}

/// Owns the worker thread that performs network exchanges.
///
/// Commands are fire-and-forget; every result comes back as a [`ClientEvent`]
/// through [`ClientHandle::try_recv`]. Requests run concurrently and complete in
/// whatever order the backend answers. Dropping the handle shuts the worker down,
/// cancelling the poll timer and any request still in flight.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let api = ReqwestChatApi::new(&settings)?;
        Self::with_api(settings, Arc::new(api))
    }

    pub fn with_api(
        settings: ClientSettings,
        api: Arc<dyn ChatApi>,
    ) -> Result<Self, ClientError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let candidates = Arc::new(settings.candidates);

        thread::spawn(move || {
            let mut poll_timer: Option<PollTimer> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::StartPolling { interval } => {
                        chat_debug!("Starting poll timer every {:?}", interval);
                        poll_timer = Some(PollTimer::start(
                            runtime.handle(),
                            interval,
                            event_tx.clone(),
                        ));
                    }
                    ClientCommand::StopPolling => {
                        if poll_timer.take().is_some() {
                            chat_debug!("Poll timer stopped");
                        }
                    }
                    command => {
                        let api = api.clone();
                        let candidates = candidates.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            handle_command(api.as_ref(), &candidates, command, event_tx).await;
                        });
                    }
                }
            }
            drop(poll_timer);
            chat_info!("Client worker shutting down");
            runtime.shutdown_background();
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn discover(&self) {
        self.send(ClientCommand::Discover);
    }

    pub fn check_status(&self, endpoint: impl Into<String>) {
        self.send(ClientCommand::CheckStatus {
            endpoint: endpoint.into(),
        });
    }

    pub fn send_chat(
        &self,
        request_id: RequestId,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.send(ClientCommand::SendChat {
            request_id,
            endpoint: endpoint.into(),
            message: message.into(),
        });
    }

    pub fn start_polling(&self, interval: Duration) {
        self.send(ClientCommand::StartPolling { interval });
    }

    pub fn stop_polling(&self) {
        self.send(ClientCommand::StopPolling);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&self, command: ClientCommand) {
        if self.cmd_tx.send(command).is_err() {
            chat_warn!("Client worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    api: &dyn ChatApi,
    candidates: &[String],
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::Discover => ClientEvent::Discovered(discover(api, candidates).await),
        ClientCommand::CheckStatus { endpoint } => {
            let result = api.status(&endpoint).await;
            if let Err(err) = &result {
                chat_warn!("Status check against {} failed: {}", endpoint, err);
            }
            ClientEvent::StatusChecked(result)
        }
        ClientCommand::SendChat {
            request_id,
            endpoint,
            message,
        } => {
            chat_info!(
                "Sending chat request_id={} ({})",
                request_id,
                describe_text(&message)
            );
            let result = api.chat(&endpoint, &message).await;
            match &result {
                Ok(reply) => chat_info!(
                    "Reply for request_id={} ({})",
                    request_id,
                    describe_text(&reply.response)
                ),
                Err(err) => chat_warn!("Chat request_id={} failed: {}", request_id, err),
            }
            ClientEvent::ReplyReceived { request_id, result }
        }
        ClientCommand::StartPolling { .. } | ClientCommand::StopPolling => return,
    };
    let _ = event_tx.send(event);
}
