//! The cart staff fill before an order exists.

use super::menu::MenuItem;
use super::order::{round_cents, LineItem, Order};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("cart is empty")]
    Empty,
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("{0} is not available")]
    Unavailable(String),
    #[error("too many of {0} in one line")]
    QuantityOverflow(String),
}

/// Lines picked from the menu, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `item` with the given option label.
    ///
    /// Adding an item+option pair already in the cart increases that line's quantity.
    pub fn add(&mut self, item: &MenuItem, option: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if !item.available {
            return Err(CartError::Unavailable(item.name.clone()));
        }
        let existing = self
            .lines
            .iter_mut()
            .find(|line| line.item_code == item.code && line.option == option);
        match existing {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CartError::QuantityOverflow(item.code.clone()))?;
                line.line_total = round_cents(line.quantity as f64 * line.unit_price);
            }
            None => self.lines.push(LineItem::new(
                item.code.clone(),
                item.name.clone(),
                option,
                quantity,
                item.price,
            )),
        }
        Ok(())
    }

    /// Removes the item+option line. Returns whether a line was removed.
    pub fn remove(&mut self, item_code: &str, option: &str) -> bool {
        let before = self.lines.len();
        self.lines
            .retain(|line| !(line.item_code == item_code && line.option == option));
        self.lines.len() != before
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        round_cents(self.lines.iter().map(|line| line.line_total).sum())
    }

    /// Turns the cart into a `PENDING` order. The cart itself is left untouched so a failed
    /// placement can be retried.
    pub fn checkout(
        &self,
        code: impl Into<String>,
        customer: Option<&str>,
        tax_rate: f64,
    ) -> Result<Order, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }
        Ok(Order::new(code, customer, self.lines.clone(), tax_rate))
    }
}
