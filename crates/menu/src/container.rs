//! Item storage behind a menu.
//!
//! The property overlay never stores items itself; it reads and writes them
//! through [`Container`]. [`MenuInventory`] is the `Vec`-backed default.

use serde::{Deserialize, Serialize};
use slotmenu_core::ItemStack;
use std::fmt;

/// Slots per chest row.
pub const ROW_WIDTH: usize = 9;

/// Largest chest a menu can open.
pub const MAX_ROWS: u8 = 6;

/// Slot storage for displayable items.
///
/// Callers index with `slot < size()`; the menu bounds-checks before it calls
/// in, so implementations may panic on an out-of-range slot.
pub trait Container: fmt::Debug {
    /// Number of slots.
    fn size(&self) -> usize;

    /// Item in `slot`, if any.
    fn item(&self, slot: usize) -> Option<&ItemStack>;

    /// Replace the item in `slot`; `None` empties it.
    fn set_item(&mut self, slot: usize, item: Option<ItemStack>);

    /// Empty every slot.
    fn clear_items(&mut self) {
        for slot in 0..self.size() {
            self.set_item(slot, None);
        }
    }

    /// Returns true if all slots are empty.
    fn is_empty(&self) -> bool {
        (0..self.size()).all(|slot| self.item(slot).is_none())
    }
}

/// Row count of a chest menu, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rows(u8);

impl Rows {
    /// One row of nine slots.
    pub const ONE: Rows = Rows(1);
    /// Three rows, the size of a single chest.
    pub const THREE: Rows = Rows(3);
    /// Six rows, the size of a double chest.
    pub const SIX: Rows = Rows(6);

    fn three() -> Self {
        Self::THREE
    }

    /// Validate a row count.
    pub fn new(rows: u8) -> Option<Self> {
        (1..=MAX_ROWS).contains(&rows).then_some(Self(rows))
    }

    /// Slot count for this many rows.
    pub fn slots(self) -> usize {
        self.0 as usize * ROW_WIDTH
    }
}

impl TryFrom<u8> for Rows {
    type Error = String;

    fn try_from(rows: u8) -> Result<Self, Self::Error> {
        Rows::new(rows).ok_or_else(|| format!("chest rows must be 1..={MAX_ROWS}, got {rows}"))
    }
}

impl From<Rows> for u8 {
    fn from(rows: Rows) -> Self {
        rows.0
    }
}

/// Container shape a menu is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuKind {
    /// Chest grid with the given number of rows.
    Chest {
        /// Row count, three when omitted.
        #[serde(default = "Rows::three")]
        rows: Rows,
    },
    /// Five slots in a single row.
    Hopper,
    /// 3x3 grid.
    Dispenser,
    /// 3x3 grid.
    Dropper,
    /// Input, fuel and output.
    Furnace,
    /// Three bottles, ingredient and fuel.
    Brewing,
}

impl MenuKind {
    /// Chest menu with `rows` rows.
    pub fn chest(rows: Rows) -> Self {
        MenuKind::Chest { rows }
    }

    /// Number of slots a container of this kind holds.
    pub fn size(self) -> usize {
        match self {
            MenuKind::Chest { rows } => rows.slots(),
            MenuKind::Hopper | MenuKind::Brewing => 5,
            MenuKind::Dispenser | MenuKind::Dropper => 9,
            MenuKind::Furnace => 3,
        }
    }
}

impl Default for MenuKind {
    fn default() -> Self {
        MenuKind::chest(Rows::THREE)
    }
}

/// Fixed-size `Vec`-backed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuInventory {
    slots: Vec<Option<ItemStack>>,
}

impl MenuInventory {
    /// Empty container with `size` slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Empty container shaped like `kind`.
    pub fn for_kind(kind: MenuKind) -> Self {
        Self::new(kind.size())
    }
}

impl Container for MenuInventory {
    fn size(&self) -> usize {
        self.slots.len()
    }

    fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots[slot].as_ref()
    }

    fn set_item(&mut self, slot: usize, item: Option<ItemStack>) {
        self.slots[slot] = item;
    }

    fn clear_items(&mut self) {
        self.slots.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmenu_core::ItemType;

    #[test]
    fn rows_are_bounded() {
        assert!(Rows::new(0).is_none());
        assert!(Rows::new(7).is_none());
        assert_eq!(Rows::new(4).map(Rows::slots), Some(36));
        assert!(Rows::try_from(9u8).is_err());
    }

    #[test]
    fn kind_sizes() {
        assert_eq!(MenuKind::default().size(), 27);
        assert_eq!(MenuKind::chest(Rows::SIX).size(), 54);
        assert_eq!(MenuKind::Hopper.size(), 5);
        assert_eq!(MenuKind::Dispenser.size(), 9);
        assert_eq!(MenuKind::Furnace.size(), 3);
    }

    #[test]
    fn inventory_set_and_clear() {
        let mut inv = MenuInventory::for_kind(MenuKind::Hopper);
        assert!(inv.is_empty());

        inv.set_item(2, Some(ItemStack::new(ItemType::Block(1), 3)));
        assert_eq!(inv.item(2).map(|s| s.count), Some(3));
        assert!(!inv.is_empty());

        inv.clear_items();
        assert!(inv.is_empty());
        assert_eq!(inv.size(), 5);
    }
}
