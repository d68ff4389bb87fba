pub mod snippet_list;
pub mod status_bar;
pub mod toast_stack;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Snippet deck + preview
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    snippet_list::render(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    // Toasts float over everything except the help overlay.
    toast_stack::render(f, state, chunks[0]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    clipdeck Help

      ↑/↓ or j/k    Move cursor
      Enter or y    Copy the selected snippet
      ?             Toggle help
      q or Esc      Quit

    Copying tries the system clipboard first, then an
    OSC 52 escape sequence, then an external copy
    command. The selected entry shows [copied] while
    the flag is set.
    "#;

    let area = centered_rect(50, 50, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
