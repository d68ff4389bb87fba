pub mod strategies;

use std::sync::Arc;

use tracing::{debug, warn};

use strategies::{ExternalCommandStrategy, NativeStrategy, Osc52Strategy};

/// Error taxonomy for clipboard writes.
///
/// Individual strategy failures (`ClipboardUnavailable`, `StrategyExecutionFailed`)
/// are swallowed by the chain and logged; only `AllStrategiesExhausted` is ever
/// reported to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CopyErrorKind {
    #[error("clipboard mechanism unavailable")]
    ClipboardUnavailable,
    #[error("clipboard strategy execution failed")]
    StrategyExecutionFailed,
    #[error("all clipboard strategies exhausted")]
    AllStrategiesExhausted,
}

/// Failure of a single strategy. Never escapes the chain.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// The mechanism does not exist in this environment (no display server,
    /// no controlling terminal, no copy command on PATH). Triggers fallback.
    #[error("unavailable: {0}")]
    Unavailable(String),
    /// The mechanism exists but the write failed. Triggers fallback.
    #[error("execution failed: {0}")]
    Failed(String),
}

impl StrategyError {
    pub fn kind(&self) -> CopyErrorKind {
        match self {
            StrategyError::Unavailable(_) => CopyErrorKind::ClipboardUnavailable,
            StrategyError::Failed(_) => CopyErrorKind::StrategyExecutionFailed,
        }
    }
}

/// One mechanism for placing text on the system clipboard.
///
/// Strategies must clean up after themselves: a failed attempt may not leave
/// any global state behind (no orphaned child processes, no half-written tty
/// sequences held open).
pub trait CopyStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn attempt(&self, text: &str) -> Result<(), StrategyError>;
}

/// Immutable result of one [`ClipboardWriter::attempt`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub success: bool,
    pub strategy_used: Option<&'static str>,
    pub error: Option<CopyErrorKind>,
}

impl CopyOutcome {
    fn succeeded(strategy: &'static str) -> Self {
        Self {
            success: true,
            strategy_used: Some(strategy),
            error: None,
        }
    }

    fn exhausted() -> Self {
        Self {
            success: false,
            strategy_used: None,
            error: Some(CopyErrorKind::AllStrategiesExhausted),
        }
    }
}

/// Places text on the system clipboard using an ordered list of strategies.
///
/// The chain short-circuits on the first success; every failure is logged and
/// the next strategy is tried. `attempt` never fails as a Rust call, all
/// failure information lives in the returned [`CopyOutcome`].
#[derive(Clone)]
pub struct ClipboardWriter {
    strategies: Arc<[Box<dyn CopyStrategy>]>,
}

impl ClipboardWriter {
    /// The production chain: native system clipboard, then OSC 52, then an
    /// external copy command.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(NativeStrategy),
            Box::new(Osc52Strategy),
            Box::new(ExternalCommandStrategy),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn CopyStrategy>>) -> Self {
        Self {
            strategies: strategies.into(),
        }
    }

    /// Try each strategy in order until one succeeds.
    ///
    /// Every strategy may block on OS facilities (X11 round trips, child
    /// processes), so the chain runs on a blocking worker thread.
    pub async fn attempt(&self, text: &str) -> CopyOutcome {
        let strategies = Arc::clone(&self.strategies);
        let text = text.to_owned();
        match tokio::task::spawn_blocking(move || run_chain(&strategies, &text)).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%err, "clipboard worker task failed");
                CopyOutcome::exhausted()
            }
        }
    }
}

impl Default for ClipboardWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn run_chain(strategies: &[Box<dyn CopyStrategy>], text: &str) -> CopyOutcome {
    for strategy in strategies {
        match strategy.attempt(text) {
            Ok(()) => {
                debug!(strategy = strategy.name(), "clipboard write succeeded");
                return CopyOutcome::succeeded(strategy.name());
            }
            Err(err) => {
                debug!(
                    strategy = strategy.name(),
                    kind = ?err.kind(),
                    %err,
                    "clipboard strategy failed, trying next"
                );
            }
        }
    }
    warn!("all clipboard strategies exhausted");
    CopyOutcome::exhausted()
}
