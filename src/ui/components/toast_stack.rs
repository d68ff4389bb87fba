//! Draws the active toast queue in the top-right corner, oldest at the top.
//! This is a pull-model surface: every frame re-reads the queue snapshot, so
//! stage changes and removals made on the runtime show up on the next tick.

use crate::app::AppState;
use crate::notify::ToastStage;
use crate::utils::unicode::truncate_to_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Paragraph},
};

const TOAST_WIDTH: u16 = 44;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let toasts = state.notifications.active_toasts();
    if toasts.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width);

    for (row, toast) in toasts.iter().enumerate() {
        let y = area.y + 1 + row as u16;
        if y >= area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 1);

        let prefix = match toast.kind {
            crate::notify::ToastKind::Success => "✓ ",
            crate::notify::ToastKind::Error => "✗ ",
            crate::notify::ToastKind::Warning => "! ",
            crate::notify::ToastKind::Info => "· ",
        };
        let text = truncate_to_width(
            &format!("{prefix}{}", toast.message),
            width.saturating_sub(1) as usize,
        );

        let mut style = Style::default().fg(state.theme.toast_color(toast.kind));
        // Entering and exiting toasts are dimmed, standing in for the
        // enter/exit transitions of a graphical surface.
        if toast.stage != ToastStage::Visible {
            style = style.add_modifier(Modifier::DIM);
        }

        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(text).style(style), rect);
    }
}
