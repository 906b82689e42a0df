use chat_core::{AppViewModel, Msg};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;
use tui_input::{Input, InputRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Dispatch(Msg),
    /// Only the cursor moved.
    Redraw,
    Ignore,
}

/// Text editor for the message box. The core owns the buffer; the editor owns
/// the cursor and forwards every edit as `Msg::InputChanged`.
#[derive(Debug, Default)]
pub struct InputEditor {
    input: Input,
}

impl InputEditor {
    /// Adopts the core's buffer when it changed behind the editor's back,
    /// e.g. cleared after a submit.
    pub fn sync(&mut self, value: &str) {
        if self.input.value() != value {
            self.input = Input::new(value.to_string());
        }
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Translates a key press into a widget message, given what is currently shown.
    pub fn map_key(&mut self, key: KeyEvent, view: &AppViewModel) -> KeyAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return KeyAction::Quit,
            KeyCode::Char('r') if ctrl => {
                return KeyAction::Dispatch(Msg::ReconnectRequested)
            }
            _ => {}
        }
        // Disabled input swallows edits, like a disabled text area.
        if !view.input_enabled {
            return KeyAction::Ignore;
        }

        let before = self.input.value().to_string();
        let cursor_before = self.input.cursor();
        match key.code {
            KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
                self.input.handle(InputRequest::InsertChar('\n'));
            }
            KeyCode::Enter if view.send_enabled => {
                return KeyAction::Dispatch(Msg::EnterPressed);
            }
            KeyCode::Enter => return KeyAction::Ignore,
            KeyCode::Esc => self.input.reset(),
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }

        if self.input.value() != before {
            KeyAction::Dispatch(Msg::InputChanged(self.input.value().to_string()))
        } else if self.input.cursor() != cursor_before {
            KeyAction::Redraw
        } else {
            KeyAction::Ignore
        }
    }
}
