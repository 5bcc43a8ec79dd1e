//! Click notifications delivered to a menu.

use serde::{Deserialize, Serialize};

/// How the viewer clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickKind {
    /// Primary button.
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Primary button with shift held.
    ShiftLeft,
    /// Secondary button with shift held.
    ShiftRight,
    /// Middle button.
    Middle,
    /// Hotbar number key (0-8).
    NumberKey(u8),
    /// Drop key.
    Drop,
    /// Double click to collect.
    DoubleClick,
}

/// A click at one slot, with a cancel flag that decides whether the host
/// applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Slot index the click landed on.
    pub slot: usize,
    /// Click flavor.
    pub click: ClickKind,
    /// Click landed in the viewer's own inventory rather than the menu.
    pub external: bool,
    cancelled: bool,
}

impl ClickEvent {
    /// Click on a menu slot.
    pub fn new(slot: usize, click: ClickKind) -> Self {
        Self {
            slot,
            click,
            external: false,
            cancelled: false,
        }
    }

    /// Click on a slot of the viewer's own inventory while the menu is open.
    pub fn external(slot: usize, click: ClickKind) -> Self {
        Self {
            external: true,
            ..Self::new(slot, click)
        }
    }

    /// Whether the click will be rejected.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Reject or allow the click.
    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
