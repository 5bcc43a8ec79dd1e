#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod item;

// Re-export commonly used types
pub use item::{ItemStack, ItemType};
