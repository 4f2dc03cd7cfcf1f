//! # Cart
//!
//! The in-progress order of one session. Nothing here touches the store; the cart is
//! turned into [`LineItem`]s when the order is submitted and cleared afterwards.

use crate::model::{LineItem, MenuItem, MenuItemId};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub item: MenuItem,
    /// Always at least 1; an entry that would drop to 0 is removed.
    pub quantity: u32,
}

impl CartEntry {
    fn prep_minutes(&self) -> u32 {
        self.item.prep_time.saturating_mul(self.quantity)
    }
}

/// Menu items and quantities, kept in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one portion of `item`.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.entries.iter_mut().find(|e| e.item.id == item.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(CartEntry {
                item: item.clone(),
                quantity: 1,
            }),
        }
        debug!(item = %item.id, quantity = self.quantity_of(item.id), "Cart add");
    }

    /// Adjust the quantity of `id` by `delta`. The entry is removed once it reaches zero.
    /// Unknown ids are ignored.
    pub fn change_quantity(&mut self, id: MenuItemId, delta: i64) {
        let Some(pos) = self.entries.iter().position(|e| e.item.id == id) else {
            return;
        };
        let next = i64::from(self.entries[pos].quantity).saturating_add(delta);
        if next <= 0 {
            self.entries.remove(pos);
        } else {
            self.entries[pos].quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_item(&mut self, id: MenuItemId) {
        self.entries.retain(|e| e.item.id != id);
    }

    /// Quantity of `id` in the cart, 0 when absent.
    pub fn quantity_of(&self, id: MenuItemId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item.id == id)
            .map_or(0, |e| e.quantity)
    }

    pub fn total_price(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.item.price * f64::from(e.quantity))
            .sum()
    }

    /// Expected wait: the slowest line, where a line takes prep time x quantity.
    pub fn total_prep_minutes(&self) -> u32 {
        self.entries
            .iter()
            .map(CartEntry::prep_minutes)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot the cart as order lines.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.entries
            .iter()
            .map(|e| LineItem {
                menu_item_id: e.item.id,
                name: e.item.name.clone(),
                price: e.item.price,
                quantity: e.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: u32, price: f64, prep_time: u32) -> MenuItem {
        MenuItem {
            id: MenuItemId(id),
            name: format!("Dish {id}"),
            price,
            description: String::new(),
            allergens: Vec::new(),
            prep_time,
            image: None,
        }
    }

    #[test]
    fn test_adding_twice_increments_quantity() {
        let mut cart = Cart::new();
        let pizza = dish(1, 12.0, 20);
        cart.add_item(&pizza);
        cart.add_item(&pizza);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(pizza.id), 2);
        assert_eq!(cart.total_price(), 24.0);
    }

    #[test]
    fn test_total_price_sums_lines() {
        let mut cart = Cart::new();
        cart.add_item(&dish(1, 12.5, 20));
        cart.add_item(&dish(1, 12.5, 20));
        cart.add_item(&dish(2, 8.0, 10));
        assert_eq!(cart.total_price(), 33.0);
    }

    #[test]
    fn test_prep_time_is_slowest_line() {
        let mut cart = Cart::new();
        let slow = dish(1, 10.0, 20);
        cart.add_item(&slow);
        cart.add_item(&slow);
        cart.add_item(&dish(2, 5.0, 10));
        assert_eq!(cart.total_prep_minutes(), 40);

        assert_eq!(Cart::new().total_prep_minutes(), 0);
    }

    #[test]
    fn test_change_quantity_removes_at_zero() {
        let mut cart = Cart::new();
        let salad = dish(3, 7.0, 5);
        cart.add_item(&salad);
        cart.change_quantity(salad.id, 2);
        assert_eq!(cart.quantity_of(salad.id), 3);

        cart.change_quantity(salad.id, -5);
        assert_eq!(cart.quantity_of(salad.id), 0);
        assert!(cart.is_empty());

        // Unknown ids are a no-op.
        cart.change_quantity(MenuItemId(99), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        let soup = dish(4, 9.0, 8);
        cart.add_item(&soup);

        cart.change_quantity(soup.id, i64::MAX);
        assert_eq!(cart.quantity_of(soup.id), u32::MAX);

        cart.add_item(&soup);
        assert_eq!(cart.quantity_of(soup.id), u32::MAX);

        cart.change_quantity(soup.id, i64::MIN);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_line_items_keep_order() {
        let mut cart = Cart::new();
        cart.add_item(&dish(2, 5.0, 5));
        cart.add_item(&dish(1, 6.0, 5));
        cart.add_item(&dish(3, 7.0, 5));
        cart.remove_item(MenuItemId(1));

        let ids: Vec<MenuItemId> = cart.line_items().iter().map(|l| l.menu_item_id).collect();
        assert_eq!(ids, vec![MenuItemId(2), MenuItemId(3)]);

        cart.clear();
        assert!(cart.is_empty());
    }
}
