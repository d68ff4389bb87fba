use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use clipdeck::app::AppState;
use clipdeck::catalog::Catalog;
use clipdeck::cli::{Cli, Commands};
use clipdeck::clipboard::ClipboardWriter;
use clipdeck::config::Config;
use clipdeck::notify::NotificationCenter;
use clipdeck::notify::renderer::{LogRenderer, NullRenderer};
use clipdeck::tracker::{CopyOptions, CopyStateTracker};
use clipdeck::ui;
use clipdeck::ui::theme::Theme;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Copy { text, id }) => {
            fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    EnvFilter::new("clipdeck=info")
                }))
                .init();

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handle_copy(&config, text, id))?;
        }
        Some(Commands::List) => {
            handle_list();
        }
        None => {
            // No command: launch the TUI. The runtime lives on this thread's
            // side; tracker and center are built inside it so their timers
            // have somewhere to run while the draw loop blocks.
            let runtime = tokio::runtime::Runtime::new()?;

            let (tracker, notifications) = runtime.block_on(async {
                let tracker = CopyStateTracker::new(
                    ClipboardWriter::new(),
                    CopyOptions::new().success_duration(config.success_duration()),
                )?;
                let notifications = NotificationCenter::new(Box::new(NullRenderer))?;
                Ok::<_, anyhow::Error>((tracker, notifications))
            })?;

            let theme = Theme::from_config(&config);
            let state = AppState::new(
                Catalog::builtin(),
                theme,
                tracker,
                notifications,
                config.toast_duration(),
            );

            ui::run_tui(state, runtime.handle().clone())?;
        }
    }

    Ok(())
}

async fn handle_copy(config: &Config, text: String, id: Option<String>) -> Result<()> {
    let notifications = NotificationCenter::new(Box::new(LogRenderer))?;

    let on_error_center = notifications.clone();
    let options = CopyOptions::new()
        .success_duration(config.success_duration())
        .on_error(move |_kind| {
            on_error_center.error("Copy failed, please copy manually", None);
        });

    let tracker = CopyStateTracker::new(ClipboardWriter::new(), options)?;
    let outcome = tracker.copy(&text, id.as_deref()).await;

    match outcome.strategy_used {
        Some(strategy) => println!("✓ Copied via {strategy}"),
        None => println!("✗ Copy failed: all clipboard strategies exhausted"),
    }

    Ok(())
}

fn handle_list() {
    let catalog = Catalog::builtin();

    println!("\n📋 Snippet deck ({} entries)\n", catalog.len());
    for snippet in &catalog.snippets {
        println!("  {:<16} {} [{}]", snippet.id, snippet.title, snippet.language);
    }
    println!();
}
