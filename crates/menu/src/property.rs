//! Slot behaviors.
//!
//! A property is the only thing that can let a click on a menu slot through:
//! the menu hands the event to the property at the clicked slot and the
//! property sets the cancel flag. Slots without one reject everything.

use crate::{ClickEvent, PropertyMenu};
use std::{any::Any, cell::RefCell, fmt, rc::Rc};

/// Access to the concrete type behind a `dyn SlotProperty`.
pub trait AsAny {
    /// Upcast for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behavior attached to one or more slots.
pub trait SlotProperty: AsAny + fmt::Debug {
    /// Decide the outcome of `event`. The menu that dispatched it is passed
    /// back so the property can rearrange slots in response.
    fn run(&mut self, event: &mut ClickEvent, menu: &mut PropertyMenu);
}

/// Handle stored in menu cells. The same property may sit in many slots.
pub type SharedProperty = Rc<RefCell<dyn SlotProperty>>;

/// Wrap a property so it can be placed into slots.
pub fn shared<P: SlotProperty + 'static>(property: P) -> SharedProperty {
    Rc::new(RefCell::new(property))
}

/// Rejects every click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locked;

impl SlotProperty for Locked {
    fn run(&mut self, event: &mut ClickEvent, _menu: &mut PropertyMenu) {
        event.set_cancelled(true);
    }
}

/// Lets every click through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unlocked;

impl SlotProperty for Unlocked {
    fn run(&mut self, event: &mut ClickEvent, _menu: &mut PropertyMenu) {
        event.set_cancelled(false);
    }
}

/// Closure-backed property.
pub struct ClickHandler<F> {
    label: &'static str,
    handler: F,
}

impl<F> ClickHandler<F> {
    /// Wrap `handler`; `label` shows up in debug output.
    pub fn new(label: &'static str, handler: F) -> Self
    where
        F: FnMut(&mut ClickEvent, &mut PropertyMenu),
    {
        Self { label, handler }
    }
}

impl<F> fmt::Debug for ClickHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickHandler")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<F> SlotProperty for ClickHandler<F>
where
    F: FnMut(&mut ClickEvent, &mut PropertyMenu) + 'static,
{
    fn run(&mut self, event: &mut ClickEvent, menu: &mut PropertyMenu) {
        (self.handler)(event, menu);
    }
}
