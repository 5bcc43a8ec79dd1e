use anyhow::{Context, Result};
use serde::Deserialize;
use slotmenu_menu::{ClickEvent, ClickKind};
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ClickScriptFile {
    clicks: Vec<ScriptedClick>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptedClick {
    slot: usize,
    #[serde(default)]
    click: ClickKind,
    #[serde(default)]
    external: bool,
    /// Simulates an outer layer that already rejected the click.
    #[serde(default)]
    cancelled: bool,
}

/// Recorded clicks to replay against a menu.
///
/// Scripts are a JSON list of `{slot, click, external, cancelled}` steps,
/// replayed in file order.
#[derive(Debug)]
pub struct ClickScript {
    clicks: Vec<ScriptedClick>,
}

impl ClickScript {
    /// Load a click script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read click script {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse click script {}", path.display()))
    }

    /// Load a click script from an in-memory JSON string.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ClickScriptFile = serde_json::from_str(contents)?;
        if file.clicks.is_empty() {
            anyhow::bail!("click script contains no clicks");
        }
        Ok(Self { clicks: file.clicks })
    }

    /// Fresh events, one per scripted click.
    pub fn events(&self) -> impl Iterator<Item = ClickEvent> + '_ {
        self.clicks.iter().map(|step| {
            let mut event = if step.external {
                ClickEvent::external(step.slot, step.click)
            } else {
                ClickEvent::new(step.slot, step.click)
            };
            event.set_cancelled(step.cancelled);
            event
        })
    }
}
