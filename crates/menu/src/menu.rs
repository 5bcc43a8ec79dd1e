//! The property overlay itself.

use crate::container::{Container, MenuInventory, MenuKind};
use crate::cursor::{SlotCursor, SlotView};
use crate::error::{check_range, check_slot, MenuError, MenuResult};
use crate::event::ClickEvent;
use crate::property::{AsAny, SharedProperty, SlotProperty};
use slotmenu_core::ItemStack;
use tracing::{debug, trace};

/// A container whose slots can each carry a [`SlotProperty`].
///
/// Properties live in a vector parallel to the container's slots and always
/// match its length. Clicks on a slot without a property are cancelled.
#[derive(Debug)]
pub struct PropertyMenu {
    title: Option<String>,
    kind: Option<MenuKind>,
    container: Box<dyn Container>,
    properties: Vec<Option<SharedProperty>>,
    allow_external_clicks: bool,
}

/// Read-only snapshot of one slot, yielded by [`PropertyMenu::slots`].
#[derive(Debug, Clone, Copy)]
pub struct SlotRef<'a> {
    /// Slot index.
    pub slot: usize,
    /// Property in the slot.
    pub property: Option<&'a SharedProperty>,
    /// Item in the slot.
    pub item: Option<&'a ItemStack>,
}

impl PropertyMenu {
    /// Open an empty menu of the given shape.
    pub fn new(kind: MenuKind) -> Self {
        let mut menu = Self::from_container(Box::new(MenuInventory::for_kind(kind)));
        menu.kind = Some(kind);
        menu
    }

    /// Wrap a host-provided container. Existing items are kept, every slot
    /// starts without a property.
    pub fn from_container(container: Box<dyn Container>) -> Self {
        let size = container.size();
        Self {
            title: None,
            kind: None,
            container,
            properties: vec![None; size],
            allow_external_clicks: false,
        }
    }

    /// Builder-style title.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style switch for clicks in the viewer's own inventory.
    /// They are cancelled unless this is enabled.
    pub fn with_external_clicks(mut self, allow: bool) -> Self {
        self.allow_external_clicks = allow;
        self
    }

    /// Display title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Shape the menu was opened with; `None` for host containers.
    pub fn kind(&self) -> Option<MenuKind> {
        self.kind
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.properties.len()
    }

    /// Whether clicks in the viewer's own inventory go through.
    pub fn allows_external_clicks(&self) -> bool {
        self.allow_external_clicks
    }

    /// Backing item storage.
    pub fn container(&self) -> &dyn Container {
        self.container.as_ref()
    }

    /// Reopen with a new shape. Items and properties are all dropped.
    pub fn relayout(&mut self, kind: MenuKind) -> &mut Self {
        debug!(from = self.size(), to = kind.size(), "menu relayout");
        self.container = Box::new(MenuInventory::for_kind(kind));
        self.properties = vec![None; kind.size()];
        self.kind = Some(kind);
        self
    }

    /// Property at `slot`.
    pub fn property(&self, slot: usize) -> MenuResult<Option<&SharedProperty>> {
        check_slot(slot, self.size())?;
        Ok(self.properties[slot].as_ref())
    }

    /// Put `property` at `slot`, replacing whatever was there. `None` clears.
    pub fn set_property(
        &mut self,
        slot: usize,
        property: Option<SharedProperty>,
    ) -> MenuResult<&mut Self> {
        check_slot(slot, self.size())?;
        self.properties[slot] = property;
        Ok(self)
    }

    /// Item at `slot`.
    pub fn item(&self, slot: usize) -> MenuResult<Option<&ItemStack>> {
        check_slot(slot, self.size())?;
        Ok(self.container.item(slot))
    }

    /// Put `item` at `slot`. `None` empties it.
    pub fn set_item(&mut self, slot: usize, item: Option<ItemStack>) -> MenuResult<&mut Self> {
        check_slot(slot, self.size())?;
        self.container.set_item(slot, item);
        Ok(self)
    }

    /// Put `property` at `from`, `from + step`, ... while below `to`.
    ///
    /// A `step` of zero fills every slot in `from..to`. Both bounds may be at
    /// most [`size`](Self::size).
    pub fn fill_range(
        &mut self,
        property: Option<SharedProperty>,
        from: usize,
        to: usize,
        step: usize,
    ) -> MenuResult<&mut Self> {
        let size = self.size();
        check_range(from, to, size, size)?;
        for slot in (from..to).step_by(step.max(1)) {
            self.properties[slot] = property.clone();
        }
        Ok(self)
    }

    /// Put `property` at every slot of `from..to`.
    pub fn fill_interval(
        &mut self,
        property: Option<SharedProperty>,
        from: usize,
        to: usize,
    ) -> MenuResult<&mut Self> {
        self.fill_range(property, from, to, 1)
    }

    /// Put `property` everywhere, or with `replace == false` only in slots
    /// that have none.
    pub fn fill_all(&mut self, property: Option<SharedProperty>, replace: bool) -> &mut Self {
        for cell in &mut self.properties {
            if replace || cell.is_none() {
                *cell = property.clone();
            }
        }
        self
    }

    /// Put `property` at each of `slots`.
    ///
    /// Slots are checked one at a time; on the first bad index the error is
    /// returned and earlier slots keep their new value.
    pub fn set_many(
        &mut self,
        property: Option<SharedProperty>,
        slots: &[usize],
    ) -> MenuResult<&mut Self> {
        for &slot in slots {
            self.set_property(slot, property.clone())?;
        }
        Ok(self)
    }

    /// Put `property` and `item` at each of `slots`, with the same partial
    /// failure behavior as [`set_many`](Self::set_many).
    pub fn set_many_with_item(
        &mut self,
        property: Option<SharedProperty>,
        item: Option<ItemStack>,
        slots: &[usize],
    ) -> MenuResult<&mut Self> {
        for &slot in slots {
            check_slot(slot, self.size())?;
            self.properties[slot] = property.clone();
            self.container.set_item(slot, item.clone());
        }
        Ok(self)
    }

    /// Drop every property. Items stay.
    pub fn clear_properties(&mut self) -> &mut Self {
        self.properties.fill(None);
        self
    }

    /// Drop every property and every item.
    pub fn clear(&mut self) -> &mut Self {
        self.container.clear_items();
        self.clear_properties()
    }

    /// Run `apply` on the property at `slot` in place. Does nothing if the
    /// slot has no property.
    ///
    /// Fails with [`MenuError::PropertyBusy`] when called from inside the
    /// same property's `run`.
    pub fn modify<F>(&mut self, slot: usize, apply: F) -> MenuResult<&mut Self>
    where
        F: FnOnce(&mut dyn SlotProperty),
    {
        if let Some(property) = self.property(slot)?.cloned() {
            let mut guard = property
                .try_borrow_mut()
                .map_err(|_| MenuError::PropertyBusy { slot })?;
            apply(&mut *guard);
        }
        Ok(self)
    }

    /// Like [`modify`](Self::modify) but only when the property at `slot` is a
    /// `P`. Returns whether `apply` ran.
    pub fn modify_as<P, F>(&mut self, slot: usize, apply: F) -> MenuResult<bool>
    where
        P: SlotProperty + 'static,
        F: FnOnce(&mut P),
    {
        let Some(property) = self.property(slot)?.cloned() else {
            return Ok(false);
        };
        let mut guard = property
            .try_borrow_mut()
            .map_err(|_| MenuError::PropertyBusy { slot })?;
        match AsAny::as_any_mut(&mut *guard).downcast_mut::<P>() {
            Some(concrete) => {
                apply(concrete);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Hand `event` to the property at its slot. Returns whether there was one.
    pub fn run_property(&mut self, event: &mut ClickEvent) -> MenuResult<bool> {
        let slot = event.slot;
        let Some(property) = self.property(slot)?.cloned() else {
            return Ok(false);
        };
        let mut guard = property
            .try_borrow_mut()
            .map_err(|_| MenuError::PropertyBusy { slot })?;
        guard.run(event, self);
        Ok(true)
    }

    /// Decide a click.
    ///
    /// Events already cancelled upstream are left alone. External clicks are
    /// cancelled unless enabled with
    /// [`with_external_clicks`](Self::with_external_clicks). Otherwise the
    /// property at the slot decides; with no property the click is cancelled.
    /// Errors cancel the click before they are returned.
    pub fn on_click(&mut self, event: &mut ClickEvent) -> MenuResult<()> {
        let slot = event.slot;
        if event.is_cancelled() {
            trace!(slot, "click already cancelled upstream");
            return Ok(());
        }

        if event.external {
            if !self.allow_external_clicks {
                event.set_cancelled(true);
            }
            trace!(slot, cancelled = event.is_cancelled(), "external click");
            return Ok(());
        }

        match self.run_property(event) {
            Ok(true) => {
                trace!(slot, cancelled = event.is_cancelled(), "property decided click");
                Ok(())
            }
            Ok(false) => {
                event.set_cancelled(true);
                trace!(slot, "no property, click cancelled");
                Ok(())
            }
            Err(err) => {
                event.set_cancelled(true);
                trace!(slot, %err, "click dispatch failed");
                Err(err)
            }
        }
    }

    /// Bounds-checked view of one slot.
    pub fn slot_mut(&mut self, slot: usize) -> MenuResult<SlotView<'_>> {
        check_slot(slot, self.size())?;
        Ok(SlotView::new(self, slot))
    }

    /// Every slot in order.
    pub fn slots(&self) -> impl Iterator<Item = SlotRef<'_>> + '_ {
        self.properties
            .iter()
            .enumerate()
            .map(move |(slot, property)| SlotRef {
                slot,
                property: property.as_ref(),
                item: self.container.item(slot),
            })
    }

    /// Cursor over every slot, starting at 0.
    pub fn cursor(&mut self) -> MenuResult<SlotCursor<'_>> {
        let last = self.size().saturating_sub(1);
        SlotCursor::new(self, 0, last, 0)
    }

    /// Cursor over every slot, starting at `start`.
    pub fn cursor_at(&mut self, start: usize) -> MenuResult<SlotCursor<'_>> {
        let last = self.size().saturating_sub(1);
        SlotCursor::new(self, 0, last, start)
    }

    /// Cursor over `from..=to`, starting at `from`.
    pub fn cursor_range(&mut self, from: usize, to: usize) -> MenuResult<SlotCursor<'_>> {
        SlotCursor::new(self, from, to, from)
    }

    /// Cursor over `from..=to`, starting at `start`.
    pub fn cursor_range_at(
        &mut self,
        from: usize,
        to: usize,
        start: usize,
    ) -> MenuResult<SlotCursor<'_>> {
        SlotCursor::new(self, from, to, start)
    }

    // Unchecked accessors for views whose slot was validated on creation.

    pub(crate) fn property_unchecked(&self, slot: usize) -> Option<&SharedProperty> {
        self.properties[slot].as_ref()
    }

    pub(crate) fn set_property_unchecked(&mut self, slot: usize, property: Option<SharedProperty>) {
        self.properties[slot] = property;
    }

    pub(crate) fn item_unchecked(&self, slot: usize) -> Option<&ItemStack> {
        self.container.item(slot)
    }

    pub(crate) fn set_item_unchecked(&mut self, slot: usize, item: Option<ItemStack>) {
        self.container.set_item(slot, item);
    }
}
