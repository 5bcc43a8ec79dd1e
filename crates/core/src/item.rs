//! Item system - the display stacks that menus place into slots

use serde::{Deserialize, Serialize};

/// Item type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ItemType {
    /// A placeable block
    Block(u16), // BlockId
    /// Generic item
    Item(u16),
    /// Marker item for buttons and icons
    Icon(u16),
}

/// An item stack shown in a container slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Type of item
    pub item_type: ItemType,
    /// Quantity in stack
    pub count: u32,
    /// Custom display name, replaces the item's default name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Tooltip lines under the name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(item_type: ItemType, count: u32) -> Self {
        Self {
            item_type,
            count,
            display_name: None,
            lore: Vec::new(),
        }
    }

    /// Builder-style display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Builder-style lore line, appended after existing lines.
    pub fn with_lore(mut self, line: impl Into<String>) -> Self {
        self.lore.push(line.into());
        self
    }

    /// Name to render for this stack, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
