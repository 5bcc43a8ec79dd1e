//! Click dispatch: undecorated slots reject, properties decide.

use slotmenu_core::{ItemStack, ItemType};
use slotmenu_menu::{
    shared, ClickEvent, ClickHandler, ClickKind, ErrorKind, Locked, MenuKind, PropertyMenu,
    SlotProperty, Unlocked,
};
use std::{cell::Cell, rc::Rc};

/// Counts runs and allows only left clicks.
#[derive(Debug)]
struct LeftOnly {
    runs: Rc<Cell<u32>>,
}

impl SlotProperty for LeftOnly {
    fn run(&mut self, event: &mut ClickEvent, _menu: &mut PropertyMenu) {
        self.runs.set(self.runs.get() + 1);
        event.set_cancelled(event.click != ClickKind::Left);
    }
}

fn click(menu: &mut PropertyMenu, slot: usize, kind: ClickKind) -> ClickEvent {
    let mut event = ClickEvent::new(slot, kind);
    menu.on_click(&mut event).unwrap();
    event
}

#[test]
fn slots_without_property_cancel() {
    let mut menu = PropertyMenu::new(MenuKind::default());
    for slot in 0..menu.size() {
        assert!(click(&mut menu, slot, ClickKind::Left).is_cancelled());
    }
}

#[test]
fn property_decides_outcome() {
    let runs = Rc::new(Cell::new(0));
    let mut menu = PropertyMenu::new(MenuKind::Hopper);
    menu.set_property(1, Some(shared(LeftOnly { runs: runs.clone() })))
        .unwrap();

    assert!(!click(&mut menu, 1, ClickKind::Left).is_cancelled());
    assert!(click(&mut menu, 1, ClickKind::ShiftLeft).is_cancelled());
    assert_eq!(runs.get(), 2);

    // Neighbors stay locked down.
    assert!(click(&mut menu, 0, ClickKind::Left).is_cancelled());
    assert_eq!(runs.get(), 2);
}

#[test]
fn built_in_properties() {
    let mut menu = PropertyMenu::new(MenuKind::Hopper);
    menu.set_property(0, Some(shared(Locked)))
        .unwrap()
        .set_property(1, Some(shared(Unlocked)))
        .unwrap();

    assert!(click(&mut menu, 0, ClickKind::Left).is_cancelled());
    assert!(!click(&mut menu, 1, ClickKind::Right).is_cancelled());
}

#[test]
fn upstream_cancellation_skips_properties() {
    let runs = Rc::new(Cell::new(0));
    let mut menu = PropertyMenu::new(MenuKind::Hopper);
    menu.fill_all(Some(shared(LeftOnly { runs: runs.clone() })), true);

    let mut event = ClickEvent::new(2, ClickKind::Left);
    event.set_cancelled(true);
    menu.on_click(&mut event).unwrap();

    assert!(event.is_cancelled());
    assert_eq!(runs.get(), 0);
}

#[test]
fn external_clicks_follow_menu_setting() {
    let runs = Rc::new(Cell::new(0));
    let mut menu = PropertyMenu::new(MenuKind::Hopper);
    menu.fill_all(Some(shared(LeftOnly { runs: runs.clone() })), true);

    let mut event = ClickEvent::external(2, ClickKind::Left);
    menu.on_click(&mut event).unwrap();
    assert!(event.is_cancelled());

    let mut menu = PropertyMenu::new(MenuKind::Hopper).with_external_clicks(true);
    // Slot 30 is in the viewer's inventory; the menu does not index it.
    let mut event = ClickEvent::external(30, ClickKind::Left);
    menu.on_click(&mut event).unwrap();
    assert!(!event.is_cancelled());
    assert_eq!(runs.get(), 0);
}

#[test]
fn out_of_range_click_is_cancelled_and_reported() {
    let mut menu = PropertyMenu::new(MenuKind::Furnace);
    let mut event = ClickEvent::new(3, ClickKind::Left);

    let err = menu.on_click(&mut event).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(event.is_cancelled());
}

#[test]
fn property_can_rearrange_the_menu() {
    let mut menu = PropertyMenu::new(MenuKind::Dispenser);
    let swap = ClickHandler::new("swap", |event, menu: &mut PropertyMenu| {
        let item = menu.item(event.slot).ok().flatten().cloned();
        let _ = menu.set_item(event.slot, None);
        let _ = menu.set_item(8 - event.slot, item);
        event.set_cancelled(true);
    });
    menu.set_property(0, Some(shared(swap))).unwrap();
    menu.set_item(0, Some(ItemStack::new(ItemType::Icon(1), 1)))
        .unwrap();

    let event = click(&mut menu, 0, ClickKind::Left);

    assert!(event.is_cancelled());
    assert!(menu.item(0).unwrap().is_none());
    assert!(menu.item(8).unwrap().is_some());
}

#[test]
fn property_removing_itself_finishes_its_run() {
    let mut menu = PropertyMenu::new(MenuKind::Hopper);
    let once = ClickHandler::new("once", |event, menu: &mut PropertyMenu| {
        let _ = menu.set_property(event.slot, None);
        event.set_cancelled(false);
    });
    menu.set_property(4, Some(shared(once))).unwrap();

    assert!(!click(&mut menu, 4, ClickKind::Left).is_cancelled());
    assert!(menu.property(4).unwrap().is_none());
    assert!(click(&mut menu, 4, ClickKind::Left).is_cancelled());
}

#[test]
fn unlocked_only_overrides_when_run_directly() {
    let mut menu = PropertyMenu::new(MenuKind::Hopper);
    menu.set_property(0, Some(shared(Unlocked))).unwrap();

    // Through dispatch, an upstream rejection stands.
    let mut event = ClickEvent::new(0, ClickKind::Left);
    event.set_cancelled(true);
    menu.on_click(&mut event).unwrap();
    assert!(event.is_cancelled());

    // Running the property directly clears the flag.
    assert!(menu.run_property(&mut event).unwrap());
    assert!(!event.is_cancelled());
}
