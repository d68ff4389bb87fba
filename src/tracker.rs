//! Turns raw clipboard outcomes into ephemeral user-facing state: which
//! identifier is currently flagged "copied", a busy flag, and a timed reset.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::clipboard::{ClipboardWriter, CopyErrorKind, CopyOutcome};

pub const DEFAULT_SUCCESS_DURATION: Duration = Duration::from_millis(2000);

type SuccessHook = Arc<dyn Fn(&str) + Send + Sync>;
type ErrorHook = Arc<dyn Fn(CopyErrorKind) + Send + Sync>;

/// One logical copy action. Transient: built per `copy` call for diagnostics
/// and discarded when the call resolves.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub text: String,
    pub identifier: Option<String>,
    pub requested_at: DateTime<Local>,
}

/// Construction-time configuration for a [`CopyStateTracker`].
#[derive(Clone, Default)]
pub struct CopyOptions {
    success_duration: Option<Duration>,
    on_success: Option<SuccessHook>,
    on_error: Option<ErrorHook>,
}

impl CopyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long the "copied" flag stays set before resetting to `None`.
    pub fn success_duration(mut self, duration: Duration) -> Self {
        self.success_duration = Some(duration);
        self
    }

    /// Invoked with the copied text after a successful write.
    pub fn on_success(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(hook));
        self
    }

    /// Invoked once per fully failed copy, always with
    /// [`CopyErrorKind::AllStrategiesExhausted`].
    pub fn on_error(mut self, hook: impl Fn(CopyErrorKind) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }
}

// The flag and its generation live under one lock: taking a generation and
// storing the flag must be a single step, or two copies resolving on
// different runtime threads could publish out of order.
#[derive(Default)]
struct CopiedState {
    value: Option<String>,
    // Monotonic per-copy counter; a reset timer only clears state belonging
    // to its own generation.
    generation: u64,
}

struct TrackerInner {
    writer: ClipboardWriter,
    success_duration: Duration,
    on_success: Option<SuccessHook>,
    on_error: Option<ErrorHook>,
    handle: Handle,
    copied: Mutex<CopiedState>,
    busy: AtomicBool,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

/// Orchestrates a single logical "copy" action: runs the [`ClipboardWriter`],
/// tracks the currently flagged identifier, manages the auto-reset timer and
/// invokes the success/error hooks.
///
/// Cheap to clone; clones share state, so one tracker can serve many UI
/// entries with a single shared "copied" indicator.
#[derive(Clone)]
pub struct CopyStateTracker {
    inner: Arc<TrackerInner>,
}

impl CopyStateTracker {
    /// Requires an ambient tokio runtime (the reset timer is a spawned task).
    pub fn new(writer: ClipboardWriter, options: CopyOptions) -> Result<Self> {
        let handle = Handle::try_current()
            .context("CopyStateTracker must be created inside a tokio runtime")?;
        Ok(Self {
            inner: Arc::new(TrackerInner {
                writer,
                success_duration: options.success_duration.unwrap_or(DEFAULT_SUCCESS_DURATION),
                on_success: options.on_success,
                on_error: options.on_error,
                handle,
                copied: Mutex::new(CopiedState::default()),
                busy: AtomicBool::new(false),
                reset_task: Mutex::new(None),
            }),
        })
    }

    /// Copy `text`, flagging `identifier` (or the text itself) as "copied"
    /// for the configured duration.
    ///
    /// Never fails as a Rust call: the full [`CopyOutcome`] is returned so
    /// callers can branch on success explicitly. The "copied" flag is set
    /// even when every strategy failed, as a prompt to copy manually; the
    /// outcome and the `on_error` hook carry the actual failure.
    pub async fn copy(&self, text: &str, identifier: Option<&str>) -> CopyOutcome {
        let request = CopyRequest {
            text: text.to_owned(),
            identifier: identifier.map(str::to_owned),
            requested_at: Local::now(),
        };
        debug!(
            identifier = request.identifier.as_deref().unwrap_or("<text>"),
            requested_at = %request.requested_at,
            "copy requested"
        );

        self.inner.busy.store(true, Ordering::SeqCst);
        let outcome = self.inner.writer.attempt(text).await;

        let shown = identifier.unwrap_or(text).to_owned();
        self.flag_copied(shown);

        if outcome.success {
            if let Some(hook) = &self.inner.on_success {
                hook(text);
            }
        } else if let Some(hook) = &self.inner.on_error {
            hook(CopyErrorKind::AllStrategiesExhausted);
        }

        self.inner.busy.store(false, Ordering::SeqCst);
        outcome
    }

    /// The identifier from the most recently resolved copy, or `None` once
    /// its reset timer has fired.
    pub fn copied(&self) -> Option<String> {
        lock(&self.inner.copied).value.clone()
    }

    /// True while a copy attempt is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.busy.load(Ordering::SeqCst)
    }

    fn flag_copied(&self, shown: String) {
        let generation = {
            let mut copied = lock(&self.inner.copied);
            copied.generation += 1;
            copied.value = Some(shown);
            copied.generation
        };

        let inner = Arc::clone(&self.inner);
        let task = self.inner.handle.spawn(async move {
            tokio::time::sleep(inner.success_duration).await;
            let mut copied = lock(&inner.copied);
            if copied.generation == generation {
                copied.value = None;
            }
        });

        // A superseded timer must never clear state set by a later copy;
        // abort it outright rather than racing the generation check.
        if let Some(previous) = lock(&self.inner.reset_task).replace(task) {
            previous.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{CopyStrategy, StrategyError};
    use std::sync::atomic::AtomicUsize;
    use tokio::time::sleep;

    struct FakeClipboard {
        buffer: Arc<Mutex<Option<String>>>,
    }

    impl CopyStrategy for FakeClipboard {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn attempt(&self, text: &str) -> Result<(), StrategyError> {
            *self.buffer.lock().unwrap() = Some(text.to_owned());
            Ok(())
        }
    }

    struct AlwaysFails;

    impl CopyStrategy for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }

        fn attempt(&self, _text: &str) -> Result<(), StrategyError> {
            Err(StrategyError::Failed("nope".to_string()))
        }
    }

    fn working_writer() -> (ClipboardWriter, Arc<Mutex<Option<String>>>) {
        let buffer = Arc::new(Mutex::new(None));
        let writer = ClipboardWriter::with_strategies(vec![Box::new(FakeClipboard {
            buffer: Arc::clone(&buffer),
        })]);
        (writer, buffer)
    }

    fn broken_writer() -> ClipboardWriter {
        ClipboardWriter::with_strategies(vec![Box::new(AlwaysFails)])
    }

    #[tokio::test]
    async fn test_success_sets_identifier_then_resets() {
        let (writer, buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(80));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        let outcome = tracker.copy("body text", Some("button")).await;

        assert!(outcome.success);
        assert_eq!(outcome.strategy_used, Some("fake"));
        assert_eq!(tracker.copied(), Some("button".to_string()));
        assert_eq!(buffer.lock().unwrap().as_deref(), Some("body text"));

        // Still flagged well before the duration elapses.
        sleep(Duration::from_millis(30)).await;
        assert_eq!(tracker.copied(), Some("button".to_string()));

        sleep(Duration::from_millis(150)).await;
        assert_eq!(tracker.copied(), None);
    }

    #[tokio::test]
    async fn test_identifier_defaults_to_text() {
        let (writer, _buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(500));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        tracker.copy("raw text", None).await;
        assert_eq!(tracker.copied(), Some("raw text".to_string()));
    }

    #[tokio::test]
    async fn test_success_hook_receives_text() {
        let (writer, _buffer) = working_writer();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_hook = Arc::clone(&seen);
        let options = CopyOptions::new()
            .success_duration(Duration::from_millis(50))
            .on_success(move |text| seen_hook.lock().unwrap().push(text.to_owned()));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        tracker.copy("hello", Some("id")).await;

        assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_still_flags_and_calls_error_hook_once() {
        let errors = Arc::new(AtomicUsize::new(0));
        let errors_hook = Arc::clone(&errors);
        let options = CopyOptions::new()
            .success_duration(Duration::from_millis(80))
            .on_error(move |kind| {
                assert_eq!(kind, CopyErrorKind::AllStrategiesExhausted);
                errors_hook.fetch_add(1, Ordering::SeqCst);
            });
        let tracker = CopyStateTracker::new(broken_writer(), options).unwrap();

        let outcome = tracker.copy("text", Some("x")).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error, Some(CopyErrorKind::AllStrategiesExhausted));
        assert_eq!(errors.load(Ordering::SeqCst), 1);
        // Deliberate fallback-to-visual-feedback: still flagged for the
        // duration so the UI can prompt a manual copy.
        assert_eq!(tracker.copied(), Some("x".to_string()));

        sleep(Duration::from_millis(200)).await;
        assert_eq!(tracker.copied(), None);
    }

    #[tokio::test]
    async fn test_superseding_copy_never_resurrects_earlier_identifier() {
        let (writer, _buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(100));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        tracker.copy("a", Some("x")).await;
        sleep(Duration::from_millis(40)).await;
        tracker.copy("b", Some("y")).await;

        // x's timer would have fired around now; y must survive it.
        sleep(Duration::from_millis(70)).await;
        assert_eq!(tracker.copied(), Some("y".to_string()));

        sleep(Duration::from_millis(100)).await;
        assert_eq!(tracker.copied(), None);
    }

    #[tokio::test]
    async fn test_rapid_copies_settle_on_last() {
        let (writer, _buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(80));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        tracker.copy("one", Some("1")).await;
        tracker.copy("two", Some("2")).await;
        tracker.copy("three", Some("3")).await;

        assert_eq!(tracker.copied(), Some("3".to_string()));

        // No flicker back to "1" or "2" while waiting out the timer.
        for _ in 0..6 {
            sleep(Duration::from_millis(10)).await;
            let copied = tracker.copied();
            assert!(
                copied.is_none() || copied.as_deref() == Some("3"),
                "unexpected flicker to {copied:?}"
            );
        }

        sleep(Duration::from_millis(100)).await;
        assert_eq!(tracker.copied(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_copies_resolved_across_tasks_keep_the_later_winner() {
        let (writer, _buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(100));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        // Each copy runs on its own runtime task but resolves strictly in
        // order; the later resolution must win and its timer must clear it.
        let t = tracker.clone();
        tokio::spawn(async move { t.copy("a", Some("x")).await })
            .await
            .unwrap();
        let t = tracker.clone();
        tokio::spawn(async move { t.copy("b", Some("y")).await })
            .await
            .unwrap();

        assert_eq!(tracker.copied(), Some("y".to_string()));

        sleep(Duration::from_millis(250)).await;
        assert_eq!(tracker.copied(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_interleaved_copies_never_leave_stale_state() {
        let (writer, _buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(100));
        let tracker = CopyStateTracker::new(writer, options).unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let t = tracker.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("id-{i}");
                t.copy("text", Some(&id)).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().success);
        }

        // Whichever copy published last also owns the newest generation, so
        // its reset timer is the one that clears the flag.
        let copied = tracker.copied();
        assert!(
            copied.as_deref().is_some_and(|v| v.starts_with("id-")),
            "unexpected flag {copied:?}"
        );

        sleep(Duration::from_millis(300)).await;
        assert_eq!(tracker.copied(), None);
    }

    #[tokio::test]
    async fn test_not_loading_after_resolution() {
        let (writer, _buffer) = working_writer();
        let tracker = CopyStateTracker::new(writer, CopyOptions::new()).unwrap();
        assert!(!tracker.is_loading());
        tracker.copy("text", None).await;
        assert!(!tracker.is_loading());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let (writer, _buffer) = working_writer();
        let options = CopyOptions::new().success_duration(Duration::from_millis(500));
        let tracker = CopyStateTracker::new(writer, options).unwrap();
        let clone = tracker.clone();

        tracker.copy("shared", Some("id")).await;
        assert_eq!(clone.copied(), Some("id".to_string()));
    }
}
