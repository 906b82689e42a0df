use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ClientEvent;

/// Repeating timer that emits [`ClientEvent::PollDue`]. The first tick fires one
/// full interval after start. Dropping the timer cancels it.
pub struct PollTimer {
    task: JoinHandle<()>,
}

impl PollTimer {
    pub fn start(runtime: &Handle, interval: Duration, tx: mpsc::Sender<ClientEvent>) -> Self {
        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(ClientEvent::PollDue).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
