use std::time::Duration;

pub const LOG_FILE: &str = "./chat_widget.log";
pub const TICK_RATE: Duration = Duration::from_millis(75);
pub const MAX_INPUT_LINES: u16 = 4;

pub const TITLE_MESSAGES: &str = " Mental Wellness Chat ";
pub const TITLE_INPUT: &str = " Message ";
pub const LABEL_USER: &str = "You";
pub const LABEL_ASSISTANT: &str = "Assistant";
pub const TEXT_TYPING: &str = "Assistant is typing...";
pub const TEXT_HELP: &str =
    "Enter send | Shift+Enter newline | Esc clear | Ctrl+R reconnect | Ctrl+C quit";
