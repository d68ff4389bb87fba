//! clipdeck: a terminal snippet deck built around a clipboard-copy service
//! with cascading fallback strategies and a toast notification pipeline.
//!
//! The reusable pieces live in [`clipboard`] (the strategy chain),
//! [`tracker`] (ephemeral "copied" state with timed reset) and [`notify`]
//! (the notification center). The remaining modules are the TUI consumer.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod notify;
pub mod tracker;
pub mod ui;
pub mod utils;
