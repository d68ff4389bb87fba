use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_list(f, state, chunks[0]);
    render_preview(f, state, chunks[1]);
}

fn render_list(f: &mut Frame, state: &AppState, area: Rect) {
    let mut lines = Vec::with_capacity(state.catalog.len());

    for (idx, snippet) in state.catalog.snippets.iter().enumerate() {
        let is_cursor = idx == state.cursor_position;
        let is_copied = state.is_copied(snippet);

        let marker = if is_cursor { "> " } else { "  " };
        let mut spans = vec![
            Span::styled(
                marker,
                Style::default().fg(state.theme.cursor),
            ),
            Span::styled(
                snippet.title.clone(),
                if is_cursor {
                    Style::default()
                        .fg(state.theme.cursor)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(state.theme.foreground)
                },
            ),
            Span::styled(
                format!("  {}", snippet.language),
                Style::default().fg(state.theme.language),
            ),
        ];

        if is_copied {
            spans.push(Span::styled(
                "  [copied]",
                Style::default()
                    .fg(state.theme.copied)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        lines.push(Line::from(spans));
    }

    let block = Block::default().borders(Borders::ALL).title(" Snippets ");
    let list = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(state.theme.background));

    f.render_widget(list, area);
}

fn render_preview(f: &mut Frame, state: &AppState, area: Rect) {
    let (title, body) = match state.selected_snippet() {
        Some(snippet) => (
            format!(" {} ({}) ", snippet.title, snippet.language),
            snippet.body.clone(),
        ),
        None => (" Preview ".to_string(), String::new()),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let preview = Paragraph::new(body)
        .block(block)
        .style(
            Style::default()
                .fg(state.theme.foreground)
                .bg(state.theme.background),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(preview, area);
}
