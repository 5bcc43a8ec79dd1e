//! slotmenu - replay recorded clicks against a property menu
//!
//! Loads a menu layout, dispatches every scripted click through the menu and
//! reports which clicks went through.

mod click_script;
mod config;

use anyhow::Result;
use clap::Parser;
use click_script::ClickScript;
use config::MenuLayout;
use serde::Serialize;
use slotmenu_menu::PropertyMenu;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting slotmenu v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse();

    let layout = match &cli.layout {
        Some(path) => MenuLayout::load_from_path(path)?,
        None => MenuLayout::load(),
    };
    let mut menu = layout.build()?;
    info!(
        title = menu.title().unwrap_or_default(),
        slots = menu.size(),
        "menu opened"
    );

    let script = ClickScript::from_path(&cli.script)?;
    let summary = replay(&mut menu, &script);
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay recorded clicks against a slot property menu", long_about = None)]
struct CliOptions {
    /// Menu layout (TOML); falls back to config/menu.toml when omitted
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Click script (JSON) to replay
    #[arg(long)]
    script: PathBuf,
}

/// Outcome counts of a replay.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct ReplaySummary {
    allowed: usize,
    cancelled: usize,
    errors: usize,
}

fn replay(menu: &mut PropertyMenu, script: &ClickScript) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for (step, mut event) in script.events().enumerate() {
        if let Err(err) = menu.on_click(&mut event) {
            warn!(step, slot = event.slot, "click failed: {err}");
            summary.errors += 1;
        }

        if event.is_cancelled() {
            summary.cancelled += 1;
        } else {
            summary.allowed += 1;
        }
        info!(
            step,
            slot = event.slot,
            click = ?event.click,
            external = event.external,
            cancelled = event.is_cancelled(),
            "click replayed"
        );
    }
    summary
}
