//! Menu items.
//!
//! Kept by the menu store ([`menu_store`](crate::menu_store)); searched and ranked by
//! [`search`](crate::search) and [`sort`](crate::sort).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    /// Short code printed on tickets, e.g. `LAT`.
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub available: bool,
}

impl MenuItem {
    pub fn new(
        id: MenuItemId,
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
            available: true,
        }
    }
}

/// Payload for adding an item to the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl MenuItemCreate {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

/// Payload for editing a menu item. `None` fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

/// Custom menu-store actions.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Show or hide the item on the menu. Returns the previous availability.
    SetAvailable(bool),
}
