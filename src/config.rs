use anyhow::{Context, Result};
use serde::Deserialize;
use slotmenu_core::ItemStack;
use slotmenu_menu::{shared, Locked, MenuKind, PropertyMenu, SharedProperty, Unlocked};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_LAYOUT_PATH: &str = "config/menu.toml";

/// Built-in property a layout can place by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyName {
    Locked,
    Unlocked,
}

/// One `[[slot]]` table: the same property (and optionally item) at each listed slot.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotEntry {
    pub slots: Vec<usize>,
    #[serde(default)]
    pub property: Option<PropertyName>,
    #[serde(default)]
    pub item: Option<ItemStack>,
}

/// Menu description read from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuLayout {
    pub title: Option<String>,
    pub menu: MenuKind,
    /// Let clicks in the viewer's own inventory through.
    pub allow_external_clicks: bool,
    /// Property for every slot the `[[slot]]` entries leave empty.
    pub fill: Option<PropertyName>,
    #[serde(rename = "slot")]
    pub slots: Vec<SlotEntry>,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            title: Some("Menu".to_string()),
            menu: MenuKind::default(),
            allow_external_clicks: false,
            fill: None,
            slots: Vec::new(),
        }
    }
}

impl MenuLayout {
    /// Load the layout at the default path, falling back to defaults on errors.
    pub fn load() -> Self {
        let path = Path::new(DEFAULT_LAYOUT_PATH);
        match Self::load_from_path(path) {
            Ok(layout) => layout,
            Err(err) => {
                warn!("Failed to load {}: {err:#}. Using defaults", path.display());
                MenuLayout::default()
            }
        }
    }

    /// Load a layout from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read menu layout {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse menu layout {}", path.display()))
    }

    /// Parse a layout from an in-memory TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Open a menu and apply the layout to it.
    ///
    /// Entries are applied in file order, so later entries win. `fill` runs
    /// last and only touches slots that are still empty.
    pub fn build(&self) -> Result<PropertyMenu> {
        let mut menu =
            PropertyMenu::new(self.menu).with_external_clicks(self.allow_external_clicks);
        if let Some(title) = &self.title {
            menu = menu.titled(title.clone());
        }

        let mut registry = PropertyRegistry::default();
        for (index, entry) in self.slots.iter().enumerate() {
            let property = entry.property.map(|name| registry.get(name));
            let applied = match &entry.item {
                Some(item) => menu.set_many_with_item(property, Some(item.clone()), &entry.slots),
                None => menu.set_many(property, &entry.slots),
            };
            applied.with_context(|| format!("slot entry #{index} is invalid"))?;
        }

        if let Some(name) = self.fill {
            menu.fill_all(Some(registry.get(name)), false);
        }
        Ok(menu)
    }
}

/// One shared instance per named property, so every `locked` slot holds the
/// same object.
#[derive(Default)]
struct PropertyRegistry {
    locked: Option<SharedProperty>,
    unlocked: Option<SharedProperty>,
}

impl PropertyRegistry {
    fn get(&mut self, name: PropertyName) -> SharedProperty {
        match name {
            PropertyName::Locked => self.locked.get_or_insert_with(|| shared(Locked)).clone(),
            PropertyName::Unlocked => self
                .unlocked
                .get_or_insert_with(|| shared(Unlocked))
                .clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmenu_menu::Rows;
    use std::rc::Rc;

    #[test]
    fn empty_layout_uses_defaults() {
        let layout = MenuLayout::parse("").expect("empty layout should parse");
        assert_eq!(layout.menu, MenuKind::chest(Rows::THREE));
        assert!(!layout.allow_external_clicks);

        let menu = layout.build().unwrap();
        assert_eq!(menu.size(), 27);
        assert_eq!(menu.title(), Some("Menu"));
        assert!(menu.slots().all(|s| s.property.is_none()));
    }

    #[test]
    fn layout_places_properties_and_items() {
        let toml = r#"
            title = "Shop"
            fill = "locked"

            [menu]
            kind = "chest"
            rows = 1

            [[slot]]
            slots = [2, 4]
            property = "unlocked"
            item = { item_type = { kind = "item", id = 264 }, count = 1, display_name = "Buy" }
        "#;
        let menu = MenuLayout::parse(toml).unwrap().build().unwrap();

        assert_eq!(menu.size(), 9);
        assert_eq!(menu.title(), Some("Shop"));
        assert_eq!(
            menu.item(4).unwrap().and_then(|i| i.label()),
            Some("Buy")
        );

        let unlocked = menu.property(2).unwrap().cloned().unwrap();
        assert!(Rc::ptr_eq(&unlocked, menu.property(4).unwrap().unwrap()));
        let locked = menu.property(0).unwrap().cloned().unwrap();
        assert!(!Rc::ptr_eq(&locked, &unlocked));
        assert!(menu.slots().all(|s| s.property.is_some()));
    }

    #[test]
    fn chest_rows_default_to_three() {
        let layout = MenuLayout::parse("[menu]\nkind = \"chest\"\n").unwrap();
        assert_eq!(layout.menu, MenuKind::chest(Rows::THREE));
        assert_eq!(layout.build().unwrap().size(), 27);
    }

    #[test]
    fn other_kinds_parse() {
        let layout = MenuLayout::parse("[menu]\nkind = \"hopper\"\n").unwrap();
        assert_eq!(layout.menu, MenuKind::Hopper);
    }

    #[test]
    fn bad_rows_are_rejected() {
        let err = MenuLayout::parse("[menu]\nkind = \"chest\"\nrows = 9\n").unwrap_err();
        assert!(
            format!("{err:#}").contains("chest rows must be"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn out_of_range_slot_names_the_entry() {
        let toml = r#"
            [menu]
            kind = "furnace"

            [[slot]]
            slots = [0]
            property = "locked"

            [[slot]]
            slots = [1, 3]
            property = "unlocked"
        "#;
        let err = MenuLayout::parse(toml).unwrap().build().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("slot entry #1"), "unexpected error: {message}");
        assert!(message.contains("slot 3 is out of range"), "unexpected error: {message}");
    }

    #[test]
    fn missing_file_is_an_error_when_strict() {
        let path = std::env::temp_dir().join("slotmenu-missing-layout.toml");
        assert!(MenuLayout::load_from_path(&path).is_err());
    }
}
