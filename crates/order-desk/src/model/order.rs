//! Orders and their line items.
//!
//! `Order` implements [`ActorEntity`](record_actor::ActorEntity) (see
//! [`order_store`](crate::order_store)), so the value that waits in the active queue is the
//! same value the order store keeps. The store assigns `record_id` when the order is saved.

use super::status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Customer name used when none is given.
pub const WALK_IN: &str = "Walk-in";

/// Monetary comparisons are made to the cent.
pub const CENT_TOLERANCE: f64 = 0.005;

/// Rounds an amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn same_amount(a: f64, b: f64) -> bool {
    (a - b).abs() < CENT_TOLERANCE
}

/// Store-assigned identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_code: String,
    pub name: String,
    /// Size, temperature, milk and so on. Empty when the item has no options.
    pub option: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

impl LineItem {
    /// Builds a line with `line_total = quantity × unit_price`, rounded to the cent.
    pub fn new(
        item_code: impl Into<String>,
        name: impl Into<String>,
        option: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            name: name.into(),
            option: option.into(),
            quantity,
            unit_price,
            line_total: round_cents(quantity as f64 * unit_price),
        }
    }
}

/// Reasons an order cannot be admitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderDefect {
    #[error("order code is empty")]
    EmptyCode,
    #[error("order {0} has no items")]
    NoItems(String),
    #[error("item {0} has quantity 0")]
    ZeroQuantity(String),
    #[error("line total for {0} does not match quantity × unit price")]
    LineTotalMismatch(String),
    #[error("subtotal {subtotal:.2} does not match the sum of lines {expected:.2}")]
    SubtotalMismatch { subtotal: f64, expected: f64 },
    #[error("total {total:.2} is not subtotal + tax ({expected:.2})")]
    TotalMismatch { total: f64, expected: f64 },
    #[error("amounts cannot be negative")]
    NegativeAmount,
    #[error("order {code} is {status}, only PENDING orders can be queued")]
    NotPending { code: String, status: OrderStatus },
    #[error("order {0} is already in the queue")]
    DuplicateCode(String),
}

/// One customer transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the order store on save.
    pub record_id: Option<OrderId>,
    pub code: String,
    pub customer: String,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new unpaid `PENDING` order and computes its totals.
    ///
    /// A missing or blank customer becomes [`WALK_IN`]. Tax is `subtotal × tax_rate` rounded
    /// to the cent.
    pub fn new(
        code: impl Into<String>,
        customer: Option<&str>,
        items: Vec<LineItem>,
        tax_rate: f64,
    ) -> Self {
        let customer = match customer.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => WALK_IN.to_string(),
        };
        let subtotal = round_cents(items.iter().map(|line| line.line_total).sum());
        let tax = round_cents(subtotal * tax_rate);
        Self {
            record_id: None,
            code: code.into(),
            customer,
            items,
            subtotal,
            tax,
            total: round_cents(subtotal + tax),
            paid: false,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Checks the amount invariants: every line total is quantity × unit price, the subtotal is
    /// the sum of the lines, and total = subtotal + tax. Each side is taken to the cent.
    pub fn validate(&self) -> Result<(), OrderDefect> {
        if self.code.trim().is_empty() {
            return Err(OrderDefect::EmptyCode);
        }
        if self.items.is_empty() {
            return Err(OrderDefect::NoItems(self.code.clone()));
        }
        if self.subtotal < 0.0 || self.tax < 0.0 || self.total < 0.0 {
            return Err(OrderDefect::NegativeAmount);
        }
        for line in &self.items {
            if line.quantity == 0 {
                return Err(OrderDefect::ZeroQuantity(line.item_code.clone()));
            }
            if line.unit_price < 0.0 {
                return Err(OrderDefect::NegativeAmount);
            }
            let expected = round_cents(line.quantity as f64 * line.unit_price);
            if !same_amount(line.line_total, expected) {
                return Err(OrderDefect::LineTotalMismatch(line.item_code.clone()));
            }
        }
        let expected = round_cents(self.items.iter().map(|line| line.line_total).sum());
        if !same_amount(self.subtotal, expected) {
            return Err(OrderDefect::SubtotalMismatch {
                subtotal: self.subtotal,
                expected,
            });
        }
        let expected = round_cents(self.subtotal + self.tax);
        if !same_amount(self.total, expected) {
            return Err(OrderDefect::TotalMismatch {
                total: self.total,
                expected,
            });
        }
        Ok(())
    }

    /// One-line description used in logs and receipts.
    pub fn summary(&self) -> String {
        format!(
            "{} {} x{} {:.2} {}{}",
            self.code,
            self.customer,
            self.item_count(),
            self.total,
            self.status,
            if self.paid { " paid" } else { "" }
        )
    }
}

/// Status change recorded in the order store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
    pub paid: bool,
}

/// Custom order-store actions.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Returns [`Order::summary`] of the stored record.
    Describe,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte_and_espresso() -> Vec<LineItem> {
        vec![
            LineItem::new("LAT", "Latte", "Large", 2, 4.50),
            LineItem::new("ESP", "Espresso", "", 1, 3.25),
        ]
    }

    #[test]
    fn test_new_order_computes_totals() {
        let order = Order::new("A001", Some("Alex"), latte_and_espresso(), 0.08);

        assert_eq!(order.subtotal, 12.25);
        assert_eq!(order.tax, 0.98);
        assert_eq!(order.total, 13.23);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.paid);
        assert!(order.record_id.is_none());
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_blank_customer_becomes_walk_in() {
        let none = Order::new("A001", None, latte_and_espresso(), 0.0);
        let blank = Order::new("A002", Some("   "), latte_and_espresso(), 0.0);
        assert_eq!(none.customer, WALK_IN);
        assert_eq!(blank.customer, WALK_IN);
    }

    #[test]
    fn test_validate_catches_tampered_amounts() {
        let mut order = Order::new("A001", Some("Alex"), latte_and_espresso(), 0.08);
        order.total += 1.0;
        assert!(matches!(
            order.validate(),
            Err(OrderDefect::TotalMismatch { .. })
        ));

        let mut order = Order::new("A001", Some("Alex"), latte_and_espresso(), 0.08);
        order.items[0].line_total = 1.0;
        assert_eq!(
            order.validate(),
            Err(OrderDefect::LineTotalMismatch("LAT".to_string()))
        );

        let mut order = Order::new("A001", Some("Alex"), latte_and_espresso(), 0.08);
        order.items[1].quantity = 0;
        order.items[1].line_total = 0.0;
        assert_eq!(
            order.validate(),
            Err(OrderDefect::ZeroQuantity("ESP".to_string()))
        );
    }

    #[test]
    fn test_sub_cent_prices_validate() {
        let sugar = LineItem::new("SUG", "Sugar", "", 1, 0.125);
        assert_eq!(sugar.line_total, 0.13);

        let order = Order::new("A001", None, vec![sugar], 0.0);
        assert_eq!(order.validate(), Ok(()));

        let lines = vec![
            LineItem::new("SUG", "Sugar", "", 3, 0.125),
            LineItem::new("LEM", "Lemon", "", 1, 0.005),
        ];
        let order = Order::new("A002", Some("Alex"), lines, 0.08);
        assert_eq!(order.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_orders() {
        let order = Order::new("A001", None, Vec::new(), 0.08);
        assert_eq!(order.validate(), Err(OrderDefect::NoItems("A001".to_string())));

        let order = Order::new("  ", None, latte_and_espresso(), 0.08);
        assert_eq!(order.validate(), Err(OrderDefect::EmptyCode));
    }

    #[test]
    fn test_summary_mentions_payment() {
        let mut order = Order::new("A001", Some("Alex"), latte_and_espresso(), 0.0);
        assert_eq!(order.summary(), "A001 Alex x3 12.25 PENDING");
        order.paid = true;
        order.status = OrderStatus::Completed;
        assert_eq!(order.summary(), "A001 Alex x3 12.25 COMPLETED paid");
    }
}
