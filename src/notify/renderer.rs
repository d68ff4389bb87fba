//! Rendering capability for the notification center.
//!
//! The scheduling logic in [`super::NotificationCenter`] never touches a
//! concrete surface; it only calls through this trait, so a terminal UI, a
//! log stream or a test double can each supply their own renderer.

use tracing::{error, info, warn};
use uuid::Uuid;

use super::{ToastKind, ToastMessage};

pub trait NotificationRenderer: Send + Sync {
    /// Called once when a toast is queued.
    fn render(&self, toast: &ToastMessage);
    /// Called once when a toast is detached (auto-dismiss or manual).
    fn remove(&self, id: Uuid);
}

/// Emits each toast as a tracing event. Used by the one-shot CLI, where
/// there is no persistent surface to draw on.
pub struct LogRenderer;

impl NotificationRenderer for LogRenderer {
    fn render(&self, toast: &ToastMessage) {
        match toast.kind {
            ToastKind::Success => info!(id = %toast.id, "{}", toast.message),
            ToastKind::Error => error!(id = %toast.id, "{}", toast.message),
            ToastKind::Warning => warn!(id = %toast.id, "{}", toast.message),
            ToastKind::Info => info!(id = %toast.id, "{}", toast.message),
        }
    }

    fn remove(&self, _id: Uuid) {}
}

/// Does nothing. For pull-model surfaces (the TUI redraws the whole toast
/// stack from `active_toasts()` every frame) and for tests.
pub struct NullRenderer;

impl NotificationRenderer for NullRenderer {
    fn render(&self, _toast: &ToastMessage) {}

    fn remove(&self, _id: Uuid) {}
}
