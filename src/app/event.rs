use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Handle;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState, runtime: &Handle) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }

        (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char('y'), KeyModifiers::NONE) => {
            copy_selected(state, runtime);
        }

        (KeyCode::Char('?'), _) => {
            state.show_help = !state.show_help;
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            if state.show_help {
                state.show_help = false;
            } else {
                state.should_quit = true;
            }
        }

        _ => {}
    }
    Ok(())
}

fn copy_selected(state: &mut AppState, runtime: &Handle) {
    let Some(snippet) = state.selected_snippet() else {
        return;
    };
    let body = snippet.body.clone();
    let id = snippet.id.clone();
    let title = snippet.title.clone();

    // The strategies block on OS facilities, so the event loop waits for the
    // outcome; the reset timer keeps running on the runtime afterwards.
    let outcome = runtime.block_on(state.tracker.copy(&body, Some(&id)));

    let duration = Some(state.toast_duration);
    if outcome.success {
        state
            .notifications
            .success(&format!("Copied \"{title}\""), duration);
    } else {
        state.notifications.error(
            &format!("Could not copy \"{title}\", copy it manually"),
            duration,
        );
    }
}
