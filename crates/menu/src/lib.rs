#![warn(missing_docs)]
//! Slot property overlay for container menus.
//!
//! A [`PropertyMenu`] pairs a fixed-size [`Container`] with one optional
//! [`SlotProperty`] per slot. Properties decide what happens when a slot is
//! clicked; slots without one reject every click. [`SlotCursor`] walks a
//! bounded slot range in either direction and hands out [`SlotView`]s that
//! read and write the slot in place.
//!
//! Everything here is single-threaded: properties are shared through
//! `Rc<RefCell<_>>` and menus are `!Send`.

mod container;
mod cursor;
mod error;
mod event;
mod menu;
mod property;

pub use container::{Container, MenuInventory, MenuKind, Rows, MAX_ROWS, ROW_WIDTH};
pub use cursor::{SlotCursor, SlotView};
pub use error::{Direction, ErrorKind, MenuError, MenuResult};
pub use event::{ClickEvent, ClickKind};
pub use menu::{PropertyMenu, SlotRef};
pub use property::{shared, AsAny, ClickHandler, Locked, SharedProperty, SlotProperty, Unlocked};
