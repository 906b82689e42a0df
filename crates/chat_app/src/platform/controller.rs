use chat_client::{ClientError, ClientSettings};
use chat_core::{update, AppState, AppViewModel, Msg};

use super::effects::EffectRunner;

/// The widget's lifetime object. Mounting starts discovery and the poll timer;
/// dropping it unmounts, which stops the timer and shuts the client worker down.
///
/// All state transitions happen on the thread that owns the controller.
pub struct WidgetController {
    state: AppState,
    runner: EffectRunner,
}

impl WidgetController {
    pub fn mount(settings: ClientSettings) -> Result<Self, ClientError> {
        Ok(Self::with_runner(EffectRunner::new(settings)?))
    }

    pub fn with_runner(runner: EffectRunner) -> Self {
        let mut controller = Self {
            state: AppState::new(),
            runner,
        };
        controller.dispatch(Msg::Mounted);
        controller
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    /// Feeds every completed network exchange back through `update`.
    pub fn pump(&mut self) {
        for msg in self.runner.drain() {
            self.dispatch(msg);
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}

impl Drop for WidgetController {
    fn drop(&mut self) {
        self.dispatch(Msg::Unmounted);
    }
}
