use chat_core::{AppViewModel, Author, ChatMessage, IndicatorStyle};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;

pub fn draw(frame: &mut Frame, view: &AppViewModel, input_cursor: usize) {
    let area = frame.size();
    let input_width = area.width.saturating_sub(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(input_height(view, input_width)),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(status_line(view)), chunks[0]);
    draw_messages(frame, view, chunks[1]);
    if view.typing {
        let typing = Paragraph::new(Span::styled(
            TEXT_TYPING,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(typing, chunks[2]);
    }
    draw_input(frame, view, input_cursor, chunks[3]);
    frame.render_widget(
        Paragraph::new(Span::styled(TEXT_HELP, Style::default().fg(Color::DarkGray))),
        chunks[4],
    );
}

fn status_line(view: &AppViewModel) -> Line<'static> {
    let (color, modifier) = match view.indicator {
        IndicatorStyle::Pending => (Color::Yellow, Modifier::empty()),
        IndicatorStyle::OnlinePulse => (Color::Green, Modifier::SLOW_BLINK),
        IndicatorStyle::Offline => (Color::DarkGray, Modifier::empty()),
        IndicatorStyle::Error => (Color::Red, Modifier::empty()),
    };
    let mut spans = vec![
        Span::styled("● ", Style::default().fg(color).add_modifier(modifier)),
        Span::styled(
            view.status_label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(endpoint) = &view.endpoint {
        spans.push(Span::styled(
            format!("  {endpoint}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_messages(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(TITLE_MESSAGES);
    let inner = block.inner(area);
    let paragraph = Paragraph::new(transcript_lines(&view.messages)).wrap(Wrap { trim: false });
    // Keep the newest message in view.
    let rows = paragraph.line_count(inner.width);
    let scroll = to_u16(rows.saturating_sub(inner.height as usize));
    frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
}

fn draw_input(frame: &mut Frame, view: &AppViewModel, cursor: usize, area: Rect) {
    let border = if !view.input_enabled {
        Style::default().fg(Color::DarkGray)
    } else if view.send_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(TITLE_INPUT);
    let inner = block.inner(area);

    if view.input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            view.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: false });
        frame.render_widget(placeholder.block(block), area);
        if view.input_enabled {
            frame.set_cursor(inner.x, inner.y);
        }
        return;
    }

    let (col, row) = cursor_position(&view.input, cursor, inner.width);
    // Scroll just enough to keep the cursor row visible.
    let scroll = row.saturating_sub(inner.height.saturating_sub(1));
    let paragraph = Paragraph::new(input_lines(&view.input))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph.block(block), area);

    if view.input_enabled {
        frame.set_cursor(
            inner
                .x
                .saturating_add(col)
                .min(inner.right().saturating_sub(1)),
            inner.y.saturating_add(row - scroll),
        );
    }
}

fn input_lines(text: &str) -> Vec<Line<'static>> {
    // `split` keeps a trailing empty line, so a fresh line break gets its own row.
    text.split('\n')
        .map(|line| Line::raw(line.to_string()))
        .collect()
}

/// Cell offset of the cursor inside the wrapped input box.
fn cursor_position(text: &str, cursor: usize, width: u16) -> (u16, u16) {
    let width = width.max(1);
    let prefix: String = text.chars().take(cursor).collect();
    let rows = Paragraph::new(input_lines(&prefix))
        .wrap(Wrap { trim: false })
        .line_count(width)
        .max(1);
    let current = prefix.rsplit('\n').next().unwrap_or_default();
    let current_width = Line::raw(current).width();
    let mut row = rows - 1;
    let col = current_width % width as usize;
    if current_width > 0 && col == 0 {
        // Row is exactly full; the cursor sits at the start of the next one.
        row += 1;
    }
    (to_u16(col), to_u16(row))
}

fn input_height(view: &AppViewModel, width: u16) -> u16 {
    let rows = if view.input.is_empty() {
        1
    } else {
        Paragraph::new(input_lines(&view.input))
            .wrap(Wrap { trim: false })
            .line_count(width.max(1))
    };
    to_u16(rows).clamp(1, MAX_INPUT_LINES) + 2
}

fn transcript_lines(messages: &[ChatMessage]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        let (label, style) = match (message.author, message.urgent) {
            (Author::User, _) => (LABEL_USER, Style::default().fg(Color::Yellow)),
            (Author::Assistant, false) => (LABEL_ASSISTANT, Style::default().fg(Color::Cyan)),
            (Author::Assistant, true) => (LABEL_ASSISTANT, Style::default().fg(Color::Red)),
        };
        lines.push(Line::styled(label, style.add_modifier(Modifier::BOLD)));
        let body_style = if message.urgent {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        lines.extend(
            message
                .text
                .split('\n')
                .map(|row| Line::styled(row.to_string(), body_style)),
        );
        lines.push(Line::default());
    }
    lines
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::Status;
    use ratatui::backend::{Backend, TestBackend};
    use ratatui::Terminal;

    fn render(view: &AppViewModel, cursor: usize, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, view, cursor)).unwrap();
        terminal
    }

    fn screen_text(view: &AppViewModel, width: u16, height: u16) -> String {
        let terminal = render(view, view.input.chars().count(), width, height);
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn online_with_input(input: &str) -> AppViewModel {
        AppViewModel {
            status: Some(Status::Online),
            status_label: Status::Online.label().to_string(),
            indicator: IndicatorStyle::OnlinePulse,
            input: input.to_string(),
            input_enabled: true,
            send_enabled: true,
            send_active: !input.trim().is_empty(),
            ..AppViewModel::default()
        }
    }

    #[test]
    fn renders_status_messages_and_typing() {
        let view = AppViewModel {
            endpoint: Some("http://localhost:5000".to_string()),
            typing: true,
            messages: vec![
                ChatMessage::user("hello there"),
                ChatMessage::assistant("hi, how are you feeling?"),
            ],
            ..online_with_input("")
        };

        let text = screen_text(&view, 60, 16);

        assert!(text.contains("AI Assistant (Online)"));
        assert!(text.contains("http://localhost:5000"));
        assert!(text.contains("hello there"));
        assert!(text.contains("hi, how are you feeling?"));
        assert!(text.contains(TEXT_TYPING));
        let you = text.find(LABEL_USER).unwrap();
        let reply = text.find("hi, how are you").unwrap();
        assert!(you < reply);
    }

    #[test]
    fn renders_placeholder_when_input_empty() {
        let view = AppViewModel {
            status: Some(Status::Error),
            status_label: Status::Error.label().to_string(),
            indicator: IndicatorStyle::Error,
            placeholder: "API server not found".to_string(),
            ..AppViewModel::default()
        };

        let text = screen_text(&view, 60, 12);

        assert!(text.contains("AI Assistant (Error)"));
        assert!(text.contains("API server not found"));
        assert!(!text.contains(TEXT_TYPING));
    }

    #[test]
    fn long_transcript_keeps_newest_message_visible() {
        let messages = (0..30)
            .map(|i| ChatMessage::assistant(format!("message number {i}")))
            .collect();
        let view = AppViewModel {
            messages,
            ..AppViewModel::default()
        };

        let text = screen_text(&view, 50, 14);

        assert!(text.contains("message number 29"));
        assert!(!text.contains("message number 0"));
    }

    #[test]
    fn wide_characters_wrap_and_tail_stays_visible() {
        let reply = format!("{}END", "你好".repeat(20));
        let view = AppViewModel {
            messages: vec![ChatMessage::assistant(reply)],
            ..AppViewModel::default()
        };

        let text = screen_text(&view, 30, 14);

        assert!(text.contains("END"));
    }

    #[test]
    fn long_input_wraps_instead_of_hiding_the_tail() {
        let input = format!("{}tail", "word ".repeat(10));
        let view = online_with_input(&input);

        let text = screen_text(&view, 30, 14);

        assert!(text.contains("tail"));
    }

    #[test]
    fn cursor_follows_editor_position() {
        let view = online_with_input("hello");

        // Input box sits above the help row; its inner area starts at (1, 9).
        let mut terminal = render(&view, 5, 40, 12);
        assert_eq!(terminal.backend_mut().get_cursor().unwrap(), (6, 9));

        let mut terminal = render(&view, 2, 40, 12);
        assert_eq!(terminal.backend_mut().get_cursor().unwrap(), (3, 9));
    }

    #[test]
    fn cursor_position_moves_to_next_row_after_line_break_or_full_row() {
        assert_eq!(cursor_position("ab\n", 3, 10), (0, 1));
        assert_eq!(cursor_position("ab\ncd", 5, 10), (2, 1));
        assert_eq!(cursor_position("abcdefghij", 10, 10), (0, 1));
        assert_eq!(cursor_position("你好", 2, 10), (4, 0));
    }

    #[test]
    fn cursor_stays_inside_input_box_on_full_row() {
        // Inner width is 18; a full row puts the cursor on the next row.
        let view = online_with_input(&"x".repeat(18));

        let mut terminal = render(&view, 18, 20, 12);
        let (x, y) = terminal.backend_mut().get_cursor().unwrap();

        assert!(x >= 1 && x < 19);
        assert_eq!(y, 9);
    }
}
