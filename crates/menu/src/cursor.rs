//! Bounded, bidirectional traversal over menu slots.

use crate::error::{check_range, Direction, MenuError, MenuResult};
use crate::menu::PropertyMenu;
use crate::property::SharedProperty;
use slotmenu_core::ItemStack;

/// Cursor over the slots `from..=to` of a menu.
///
/// `next_slot` and `previous_slot` hand out a [`SlotView`] of the position
/// the cursor is on and then step. Starting at `from`, `to - from` forward
/// steps bring the cursor to `to`, after which `next_slot` fails.
#[derive(Debug)]
pub struct SlotCursor<'a> {
    menu: &'a mut PropertyMenu,
    from: usize,
    to: usize,
    index: usize,
}

impl<'a> SlotCursor<'a> {
    /// Validate bounds and start position, then build the cursor.
    pub(crate) fn new(
        menu: &'a mut PropertyMenu,
        from: usize,
        to: usize,
        start: usize,
    ) -> MenuResult<Self> {
        let size = menu.size();
        let Some(last) = size.checked_sub(1) else {
            return Err(MenuError::RangeOutOfBounds { from, to, size });
        };
        check_range(from, to, last, size)?;
        check_start(from, to, start)?;

        Ok(Self {
            menu,
            from,
            to,
            index: start,
        })
    }

    /// Lower bound, inclusive.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Upper bound, inclusive.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Position the next forward step will yield.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Whether `next_slot` will succeed.
    pub fn has_next(&self) -> bool {
        self.index < self.to
    }

    /// Whether `previous_slot` will succeed.
    pub fn has_previous(&self) -> bool {
        self.index > self.from
    }

    /// View the current slot, then step forward.
    pub fn next_slot(&mut self) -> MenuResult<SlotView<'_>> {
        if self.index == self.to {
            return Err(MenuError::NoSuchElement {
                index: self.index,
                direction: Direction::Next,
            });
        }
        let slot = self.index;
        self.index += 1;
        Ok(SlotView::new(&mut *self.menu, slot))
    }

    /// View the current slot, then step back.
    pub fn previous_slot(&mut self) -> MenuResult<SlotView<'_>> {
        if self.index == self.from {
            return Err(MenuError::NoSuchElement {
                index: self.index,
                direction: Direction::Previous,
            });
        }
        let slot = self.index;
        self.index -= 1;
        Ok(SlotView::new(&mut *self.menu, slot))
    }

    /// Clear property and item at the cursor's current position.
    ///
    /// This is the slot the next forward step would yield, not the one most
    /// recently returned.
    pub fn remove(&mut self) {
        SlotView::new(&mut *self.menu, self.index).set(None, None);
    }

    /// Menu being traversed.
    pub fn menu(&self) -> &PropertyMenu {
        &*self.menu
    }

    /// Menu being traversed, mutably.
    pub fn menu_mut(&mut self) -> &mut PropertyMenu {
        &mut *self.menu
    }
}

fn check_start(from: usize, to: usize, start: usize) -> MenuResult<()> {
    if start < from || start > to {
        return Err(MenuError::StartOutOfRange { start, from, to });
    }
    Ok(())
}

/// Handle on one slot of a menu. Reads and writes go straight through.
#[derive(Debug)]
pub struct SlotView<'a> {
    menu: &'a mut PropertyMenu,
    slot: usize,
}

impl<'a> SlotView<'a> {
    /// `slot` must already be checked against the menu size.
    pub(crate) fn new(menu: &'a mut PropertyMenu, slot: usize) -> Self {
        Self { menu, slot }
    }

    /// Slot index this view is bound to.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Property in this slot.
    pub fn property(&self) -> Option<&SharedProperty> {
        self.menu.property_unchecked(self.slot)
    }

    /// Item in this slot.
    pub fn item(&self) -> Option<&ItemStack> {
        self.menu.item_unchecked(self.slot)
    }

    /// Replace the property. `None` clears.
    pub fn set_property(&mut self, property: Option<SharedProperty>) -> &mut Self {
        self.menu.set_property_unchecked(self.slot, property);
        self
    }

    /// Replace the item. `None` empties the slot.
    pub fn set_item(&mut self, item: Option<ItemStack>) -> &mut Self {
        self.menu.set_item_unchecked(self.slot, item);
        self
    }

    /// Replace property, then item.
    pub fn set(&mut self, property: Option<SharedProperty>, item: Option<ItemStack>) -> &mut Self {
        self.set_property(property).set_item(item)
    }
}
