use std::io::{self, Stdout};
use std::path::Path;

use anyhow::{Context, Result};
use chat_client::ClientSettings;
use chat_logging::{chat_error, chat_info};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::controller::WidgetController;
use super::logging;
use super::ui;
use super::ui::input::{InputEditor, KeyAction};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> Result<()> {
    logging::initialize(Path::new(ui::constants::LOG_FILE));
    chat_info!("Chat widget starting");

    let controller =
        WidgetController::mount(ClientSettings::default()).context("starting client worker")?;

    let mut terminal = setup_terminal().context("preparing terminal")?;
    let result = run_loop(&mut terminal, controller);
    restore_terminal(&mut terminal).context("restoring terminal")?;

    if let Err(err) = &result {
        chat_error!("Chat widget stopped with error: {:#}", err);
    } else {
        chat_info!("Chat widget closed");
    }
    result
}

fn run_loop(terminal: &mut Tui, mut controller: WidgetController) -> Result<()> {
    let mut editor = InputEditor::default();
    let mut redraw = true;
    loop {
        controller.pump();
        if controller.consume_dirty() {
            redraw = true;
        }
        let view = controller.view();
        editor.sync(&view.input);
        if redraw {
            let cursor = editor.cursor();
            terminal.draw(|frame| ui::render::draw(frame, &view, cursor))?;
            redraw = false;
        }

        if !event::poll(ui::constants::TICK_RATE)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match editor.map_key(key, &view) {
                    KeyAction::Quit => break,
                    KeyAction::Dispatch(msg) => controller.dispatch(msg),
                    KeyAction::Redraw => redraw = true,
                    KeyAction::Ignore => {}
                }
            }
            Event::Resize(..) => redraw = true,
            _ => {}
        }
    }
    // Unmounts: stops the poll timer and the client worker.
    drop(controller);
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
