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

/// A dish on the cafeteria menu.
///
/// # Document Store
/// Kept in the `menuItems` collection. See
/// [`impl Document for MenuItem`](#impl-Document-for-MenuItem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub allergens: Vec<String>,
    /// Minutes to prepare one portion.
    pub prep_time: u32,
    pub image: Option<String>,
}

/// Raw menu form input, as typed by staff.
///
/// Turned into a [`MenuItemCreate`] by
/// [`validation::parse_menu_item`](crate::validation::parse_menu_item).
#[derive(Debug, Clone, Default)]
pub struct MenuItemForm {
    pub name: String,
    pub price: String,
    pub description: String,
    /// Comma-separated tags, e.g. `"Gluten, Dairy"`. May be empty.
    pub allergens: String,
    pub prep_time: String,
    pub image: Option<String>,
}

/// Validated payload for adding a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub allergens: Vec<String>,
    pub prep_time: u32,
    pub image: Option<String>,
}

/// Partial record for menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub prep_time: Option<u32>,
    pub image: Option<Option<String>>,
}

impl From<MenuItemCreate> for MenuItemUpdate {
    fn from(form: MenuItemCreate) -> Self {
        Self {
            name: Some(form.name),
            price: Some(form.price),
            description: Some(form.description),
            allergens: Some(form.allergens),
            prep_time: Some(form.prep_time),
            image: Some(form.image),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MenuFilter {
    Name(String),
}
