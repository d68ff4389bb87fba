//! The production copy strategies, in fallback order: the native system
//! clipboard, an OSC 52 escape sequence to the controlling terminal, and an
//! external copy command.

use super::{CopyStrategy, StrategyError};

/// System clipboard via arboard.
///
/// Unavailable when no clipboard backend exists (headless session, no display
/// server); a failed write on an otherwise working backend is an execution
/// failure.
pub struct NativeStrategy;

impl CopyStrategy for NativeStrategy {
    fn name(&self) -> &'static str {
        "native"
    }

    fn attempt(&self, text: &str) -> Result<(), StrategyError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| StrategyError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| StrategyError::Failed(e.to_string()))?;
        Ok(())
    }
}

/// OSC 52 escape sequence written to `/dev/tty`.
///
/// Works over SSH and inside terminal multiplexers where no display server is
/// reachable. The tty handle is dropped whether or not the write succeeds, so
/// nothing is left attached to the terminal.
pub struct Osc52Strategy;

/// Terminals commonly truncate OSC 52 payloads around 100 KB of base64; a
/// silently truncated copy is worse than falling through to the next strategy.
#[cfg(unix)]
const OSC52_MAX_PAYLOAD: usize = 100_000;

impl CopyStrategy for Osc52Strategy {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn attempt(&self, text: &str) -> Result<(), StrategyError> {
        #[cfg(unix)]
        {
            write_osc52(text)
        }
        #[cfg(not(unix))]
        {
            let _ = text;
            Err(StrategyError::Unavailable(
                "no controlling terminal on this platform".to_string(),
            ))
        }
    }
}

#[cfg(unix)]
fn write_osc52(text: &str) -> Result<(), StrategyError> {
    use base64::Engine;
    use std::io::Write;

    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    if encoded.len() > OSC52_MAX_PAYLOAD {
        return Err(StrategyError::Failed(format!(
            "payload of {} bytes exceeds the OSC 52 limit",
            encoded.len()
        )));
    }

    let mut tty = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/tty")
        .map_err(|e| StrategyError::Unavailable(format!("no controlling terminal: {e}")))?;
    write!(tty, "\x1b]52;c;{encoded}\x07").map_err(|e| StrategyError::Failed(e.to_string()))?;
    tty.flush().map_err(|e| StrategyError::Failed(e.to_string()))?;
    Ok(())
}

/// Pipe the text to the first platform copy command that can be spawned.
pub struct ExternalCommandStrategy;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(all(unix, not(target_os = "macos")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(windows)]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(unix, windows)))]
const CANDIDATES: &[(&str, &[&str])] = &[];

impl CopyStrategy for ExternalCommandStrategy {
    fn name(&self) -> &'static str {
        "external-command"
    }

    fn attempt(&self, text: &str) -> Result<(), StrategyError> {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let mut last_failure: Option<String> = None;

        for (program, args) in CANDIDATES {
            let mut child = match Command::new(program)
                .args(*args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(_) => continue,
            };

            let write_result = match child.stdin.take() {
                // Dropping the handle closes the pipe so the child sees EOF.
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            };

            // The child is always reaped, even when the stdin write failed.
            let status = child.wait();

            match (write_result, status) {
                (Ok(()), Ok(status)) if status.success() => return Ok(()),
                (Err(e), _) => {
                    last_failure = Some(format!("{program}: stdin write failed: {e}"));
                }
                (Ok(()), Ok(status)) => {
                    last_failure = Some(format!("{program} exited with {status}"));
                }
                (Ok(()), Err(e)) => {
                    last_failure = Some(format!("{program}: wait failed: {e}"));
                }
            }
        }

        match last_failure {
            Some(message) => Err(StrategyError::Failed(message)),
            None => Err(StrategyError::Unavailable(
                "no copy command found on PATH".to_string(),
            )),
        }
    }
}
