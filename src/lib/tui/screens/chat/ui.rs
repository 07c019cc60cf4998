//! Chat UI rendering components

use super::state::ChatState;
use crate::domain::MessageRole;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    ///
    /// Records the scroll bound of the message area on `state`, so scrolling
    /// steps from what is actually on screen.
    pub fn render(frame: &mut Frame, state: &mut ChatState, endpoint: &str) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(5),    // Messages area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, endpoint);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3]);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState, endpoint: &str) {
        let loading_indicator = if state.is_loading() {
            Span::styled(
                format!(
                    " {} {} in flight ",
                    SPINNER[state.loading_frame],
                    state.in_flight()
                ),
                theme::loading(),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {} ", s), theme::subtitle()))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 💬 ", theme::title()),
            Span::styled(endpoint.to_string(), theme::text()),
            loading_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        frame.render_widget(Paragraph::new(status_line).block(block), area);
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &mut ChatState) {
        let inner_height = area.height as usize;
        let mut lines: Vec<Line> = Vec::new();

        for msg in state.messages() {
            let prefix = msg.role.label();
            let (prefix_style, body_style) = match msg.role {
                MessageRole::User => (theme::user_prefix(), theme::text()),
                MessageRole::Assistant if msg.is_pending() => (theme::ai_prefix(), theme::loading()),
                MessageRole::Assistant => (theme::ai_prefix(), theme::text()),
                MessageRole::SystemError => (theme::error_prefix(), theme::error_text()),
                MessageRole::System => (theme::system_prefix(), theme::subtitle()),
            };

            let body = if msg.is_pending() {
                format!("{} {}", SPINNER[state.loading_frame], msg.text)
            } else {
                msg.text.clone()
            };

            let mut content_lines = body.lines();
            let first_line = content_lines.next().unwrap_or("").to_string();
            lines.push(Line::from(vec![
                Span::styled(msg.created_at.format("%H:%M ").to_string(), theme::footer()),
                Span::styled(prefix, prefix_style),
                Span::styled(first_line, body_style),
            ]));

            // Continuation lines with indent
            let indent = " ".repeat(prefix.len() + 6);
            for line in content_lines {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", indent, line),
                    body_style,
                )));
            }

            lines.push(Line::from(""));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Scroll works in wrapped rows, not logical lines
        let total_rows = para.line_count(area.width);
        let max_scroll = total_rows.saturating_sub(inner_height).min(u16::MAX as usize) as u16;
        state.max_scroll = max_scroll;

        let para = para.scroll((state.visible_scroll(), 0));

        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let (display_input, input_style) = if state.input.is_empty() {
            ("Type your message...".to_string(), theme::subtitle())
        } else {
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            (chars.into_iter().collect(), theme::text())
        };

        let input_line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_active())
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            });

        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::styled(": Send │ ", Style::default()),
            Span::styled("/help", theme::key_hint()),
            Span::raw(": Commands │ "),
            Span::styled("PageUp/Down", theme::key_hint()),
            Span::raw(": Scroll │ "),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::raw(": Exit "),
        ]);

        frame.render_widget(Paragraph::new(help_text), area);
    }
}
