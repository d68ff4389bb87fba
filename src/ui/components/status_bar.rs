use crate::app::AppState;
use crate::utils::unicode::display_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let copy_indicator = if state.tracker.is_loading() {
        " [copying…]"
    } else if state.tracker.copied().is_some() {
        " [copied]"
    } else {
        ""
    };

    let left_content = format!(
        " {} snippets | {}/{}{}",
        state.catalog.len(),
        state.cursor_position + 1,
        state.catalog.len(),
        copy_indicator
    );

    let nav_hint = "j/k move  y copy  ? help  q quit";
    let version_text = format!("v{VERSION}");

    let status_line = compose_line(&left_content, nav_hint, &version_text, area.width);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}

/// Pad by terminal columns, not bytes, so multi-byte indicators like the
/// copying ellipsis do not shift the right-aligned version text.
fn compose_line(left_content: &str, nav_hint: &str, version_text: &str, width: u16) -> String {
    let padding = (width as usize).saturating_sub(
        display_width(left_content) + display_width(nav_hint) + display_width(version_text) + 3,
    );

    format!("{left_content} {nav_hint} {:>padding$} {version_text}", "")
}
