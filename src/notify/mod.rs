//! Ephemeral toast notifications, independent of any specific caller.
//!
//! A [`NotificationCenter`] is constructed once by the application root and
//! cloned into whatever needs to report outcomes. Each toast drives itself
//! through `Entering -> Visible -> Exiting` and removes itself when its
//! lifetime elapses; manual dismissal races the auto-dismiss safely.

pub mod renderer;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

use renderer::NotificationRenderer;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const ENTER_TRANSITION: Duration = Duration::from_millis(150);
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Lifecycle stage of a toast still in the queue. Creation and removal are
/// implicit in queue membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub created_at: DateTime<Local>,
    pub stage: ToastStage,
}

#[derive(Debug, Clone, Copy)]
pub struct ToastOptions {
    pub kind: ToastKind,
    pub duration: Duration,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            kind: ToastKind::Info,
            duration: DEFAULT_TOAST_DURATION,
        }
    }
}

struct CenterInner {
    queue: Mutex<Vec<ToastMessage>>,
    renderer: Box<dyn NotificationRenderer>,
    handle: Handle,
}

/// Process-wide ephemeral-message surface.
///
/// The queue is unbounded and insertion order is display order: the oldest
/// message sits nearest the entry edge of the surface. Cheap to clone; clones
/// share the queue and the renderer.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<CenterInner>,
}

impl NotificationCenter {
    /// Requires an ambient tokio runtime (toast lifecycles are spawned tasks).
    pub fn new(renderer: Box<dyn NotificationRenderer>) -> Result<Self> {
        let handle = Handle::try_current()
            .context("NotificationCenter must be created inside a tokio runtime")?;
        Ok(Self {
            inner: Arc::new(CenterInner {
                queue: Mutex::new(Vec::new()),
                renderer,
                handle,
            }),
        })
    }

    /// Queue a toast and schedule its removal after `duration` plus the exit
    /// transition. Fire-and-forget; returns the toast's id for manual
    /// dismissal.
    pub fn show(&self, message: &str, options: ToastOptions) -> Uuid {
        let toast = ToastMessage {
            id: Uuid::new_v4(),
            message: message.to_owned(),
            kind: options.kind,
            duration: options.duration,
            created_at: Local::now(),
            stage: ToastStage::Entering,
        };
        let id = toast.id;
        debug!(%id, kind = ?toast.kind, "toast shown");

        lock(&self.inner.queue).push(toast.clone());
        self.inner.renderer.render(&toast);

        let inner = Arc::clone(&self.inner);
        self.inner.handle.spawn(async move {
            // Clamp the enter transition for very short durations so the
            // total lifetime is always duration + EXIT_TRANSITION.
            let enter = ENTER_TRANSITION.min(toast.duration);
            sleep(enter).await;
            set_stage(&inner, id, ToastStage::Visible);
            sleep(toast.duration - enter).await;
            set_stage(&inner, id, ToastStage::Exiting);
            sleep(EXIT_TRANSITION).await;
            remove_from(&inner, id);
        });

        id
    }

    pub fn success(&self, message: &str, duration: Option<Duration>) -> Uuid {
        self.show_kind(message, ToastKind::Success, duration)
    }

    pub fn error(&self, message: &str, duration: Option<Duration>) -> Uuid {
        self.show_kind(message, ToastKind::Error, duration)
    }

    pub fn warning(&self, message: &str, duration: Option<Duration>) -> Uuid {
        self.show_kind(message, ToastKind::Warning, duration)
    }

    pub fn info(&self, message: &str, duration: Option<Duration>) -> Uuid {
        self.show_kind(message, ToastKind::Info, duration)
    }

    /// Detach a toast immediately. Idempotent: whichever of manual dismissal
    /// and the scheduled auto-dismiss runs first wins, the other is a no-op.
    pub fn remove_toast(&self, id: Uuid) {
        remove_from(&self.inner, id);
    }

    /// Snapshot of the queue in display order, for pull-model renderers.
    pub fn active_toasts(&self) -> Vec<ToastMessage> {
        lock(&self.inner.queue).clone()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner.queue).is_empty()
    }

    fn show_kind(&self, message: &str, kind: ToastKind, duration: Option<Duration>) -> Uuid {
        self.show(
            message,
            ToastOptions {
                kind,
                duration: duration.unwrap_or(DEFAULT_TOAST_DURATION),
            },
        )
    }
}

fn set_stage(inner: &CenterInner, id: Uuid, stage: ToastStage) {
    let mut queue = lock(&inner.queue);
    if let Some(toast) = queue.iter_mut().find(|t| t.id == id) {
        toast.stage = stage;
    }
}

fn remove_from(inner: &CenterInner, id: Uuid) {
    let mut queue = lock(&inner.queue);
    let before = queue.len();
    queue.retain(|t| t.id != id);
    let removed = queue.len() != before;
    drop(queue);
    if removed {
        debug!(%id, "toast removed");
        inner.renderer.remove(id);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use super::renderer::NullRenderer;

    #[derive(Default)]
    struct RecordingRenderer {
        rendered: Mutex<Vec<(Uuid, String, ToastKind)>>,
        removed: Mutex<Vec<Uuid>>,
    }

    impl NotificationRenderer for Arc<RecordingRenderer> {
        fn render(&self, toast: &ToastMessage) {
            self.rendered.lock().unwrap().push((
                toast.id,
                toast.message.clone(),
                toast.kind,
            ));
        }

        fn remove(&self, id: Uuid) {
            self.removed.lock().unwrap().push(id);
        }
    }

    fn recording_center() -> (NotificationCenter, Arc<RecordingRenderer>) {
        let renderer = Arc::new(RecordingRenderer::default());
        let center = NotificationCenter::new(Box::new(Arc::clone(&renderer))).unwrap();
        (center, renderer)
    }

    #[tokio::test]
    async fn test_toast_auto_dismisses_within_duration_plus_exit() {
        let (center, renderer) = recording_center();

        let id = center.show(
            "ok",
            ToastOptions {
                kind: ToastKind::Success,
                duration: Duration::from_millis(100),
            },
        );

        assert_eq!(center.active_toasts().len(), 1);
        assert_eq!(renderer.rendered.lock().unwrap().len(), 1);

        // 100ms duration + 300ms exit transition, with scheduling slack.
        sleep(Duration::from_millis(600)).await;
        assert!(center.is_empty());
        assert_eq!(*renderer.removed.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_short_duration_lifetime_is_duration_plus_exit() {
        let (center, renderer) = recording_center();

        // 100ms is shorter than the enter transition; removal must still
        // land at duration + exit (~400ms), not enter + exit.
        let id = center.show(
            "quick",
            ToastOptions {
                kind: ToastKind::Info,
                duration: Duration::from_millis(100),
            },
        );

        sleep(Duration::from_millis(250)).await;
        assert_eq!(center.active_toasts().len(), 1);

        sleep(Duration::from_millis(300)).await;
        assert!(center.is_empty());
        assert_eq!(*renderer.removed.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_stage_progression() {
        let (center, _renderer) = recording_center();

        let id = center.show(
            "staged",
            ToastOptions {
                kind: ToastKind::Info,
                duration: Duration::from_millis(300),
            },
        );

        let stage_of = |center: &NotificationCenter| {
            center
                .active_toasts()
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.stage)
        };

        assert_eq!(stage_of(&center), Some(ToastStage::Entering));
        sleep(Duration::from_millis(200)).await;
        assert_eq!(stage_of(&center), Some(ToastStage::Visible));
        sleep(Duration::from_millis(200)).await;
        assert_eq!(stage_of(&center), Some(ToastStage::Exiting));
        sleep(Duration::from_millis(400)).await;
        assert_eq!(stage_of(&center), None);
    }

    #[tokio::test]
    async fn test_convenience_wrappers_fix_kind() {
        let (center, renderer) = recording_center();

        center.success("s", Some(Duration::from_secs(5)));
        center.error("e", Some(Duration::from_secs(5)));
        center.warning("w", Some(Duration::from_secs(5)));
        center.info("i", Some(Duration::from_secs(5)));

        let rendered = renderer.rendered.lock().unwrap();
        let kinds: Vec<ToastKind> = rendered.iter().map(|(_, _, kind)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToastKind::Success,
                ToastKind::Error,
                ToastKind::Warning,
                ToastKind::Info,
            ]
        );
    }

    #[tokio::test]
    async fn test_manual_dismiss_is_idempotent_with_auto_dismiss() {
        let (center, renderer) = recording_center();

        let id = center.show(
            "bye",
            ToastOptions {
                kind: ToastKind::Info,
                duration: Duration::from_millis(50),
            },
        );

        center.remove_toast(id);
        assert!(center.is_empty());

        // Let the auto-dismiss task fire against the already removed toast.
        sleep(Duration::from_millis(500)).await;
        assert_eq!(*renderer.removed.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_queue_preserves_insertion_order() {
        let (center, _renderer) = recording_center();

        center.info("first", Some(Duration::from_secs(5)));
        center.info("second", Some(Duration::from_secs(5)));
        center.info("third", Some(Duration::from_secs(5)));

        let messages: Vec<String> = center
            .active_toasts()
            .iter()
            .map(|t| t.message.clone())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_identical_messages_are_not_deduplicated() {
        let center = NotificationCenter::new(Box::new(NullRenderer)).unwrap();

        let a = center.info("same", Some(Duration::from_secs(5)));
        let b = center.info("same", Some(Duration::from_secs(5)));

        assert_ne!(a, b);
        assert_eq!(center.active_toasts().len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_queue() {
        let center = NotificationCenter::new(Box::new(NullRenderer)).unwrap();
        let clone = center.clone();

        let id = center.info("shared", Some(Duration::from_secs(5)));
        assert_eq!(clone.active_toasts().len(), 1);

        clone.remove_toast(id);
        assert!(center.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_a_noop() {
        let (center, renderer) = recording_center();
        center.remove_toast(Uuid::new_v4());
        assert!(renderer.removed.lock().unwrap().is_empty());
    }
}
