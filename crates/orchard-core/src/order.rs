//! # Order
//!
//! The mutable order container and its aggregate computations.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Order Operations                               │
//! │                                                                     │
//! │  Caller Action            Operation              State Change       │
//! │  ─────────────            ─────────              ────────────       │
//! │                                                                     │
//! │  Pick Product ──────────► add_item() ──────────► products.push(p)   │
//! │                                                                     │
//! │  View Totals ───────────► calculate_sub_total()  (read only)        │
//! │                           calculate_tax()        (read only)        │
//! │                           calculate_total()      (read only)        │
//! │                           total_weight()         (read only)        │
//! │                                                                     │
//! │  NOTE: There is no removal operation. The product list is           │
//! │        append-only and exclusively owned by the order.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aggregates are recomputed on every call. With no removal and no
//! per-product mutation there is nothing to cache or invalidate.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::money::Money;
use crate::types::Product;

/// A customer order.
///
/// ## Invariants
/// - `products` preserves insertion order and only ever grows
/// - `creation_date` is fixed at construction
/// - `status` is a free-text label with no enforced transitions
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Free-text order state ("opened", "paid", ...). Any string is
    /// accepted; there is deliberately no status state machine.
    pub status: String,

    /// Calendar date the order was created.
    creation_date: NaiveDate,

    /// Products in the order, in insertion order.
    products: Vec<Product>,
}

impl Order {
    /// Creates a new empty order dated today (local calendar date).
    pub fn new(status: impl Into<String>) -> Self {
        Self::with_creation_date(status, Local::now().date_naive())
    }

    /// Creates a new empty order with an explicit creation date.
    pub fn with_creation_date(status: impl Into<String>, creation_date: NaiveDate) -> Self {
        Order {
            status: status.into(),
            creation_date,
            products: Vec::new(),
        }
    }

    /// Appends one product to the end of the order.
    ///
    /// ## Behavior
    /// - No duplicate check: the same product can appear multiple times
    /// - No status constraint: an order accepts items in any status
    /// - Takes ownership of the product; the order's list is never
    ///   shared with external containers
    pub fn add_item(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Total order price without taxes, in exact integer cents.
    ///
    /// Returns [`Money::zero`] for an empty order.
    pub fn calculate_sub_total(&self) -> Money {
        self.products.iter().map(Product::unit_price).sum()
    }

    /// Total paid in taxes, in fractional cents.
    ///
    /// Each product contributes `unit_price × tax_percent`; the result
    /// genuinely carries fractional cents and stays f64 until display.
    /// Returns 0.0 for an empty order.
    pub fn calculate_tax(&self) -> f64 {
        self.products.iter().map(Product::unit_tax).sum()
    }

    /// Total order price considering taxes, in fractional cents.
    pub fn calculate_total(&self) -> f64 {
        self.calculate_sub_total().cents() as f64 + self.calculate_tax()
    }

    /// Total shipping weight of the order in kilograms.
    ///
    /// Returns 0.0 for an empty order.
    pub fn total_weight(&self) -> f64 {
        self.products.iter().map(Product::shipping_weight).sum()
    }

    /// Calendar date the order was created.
    #[inline]
    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Products in the order, in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the order.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.products.len()
    }

    /// Checks if the order holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> Product {
        Product::new("banana", "fruit", 0.5, 215, 0.07).unwrap()
    }

    fn mango() -> Product {
        Product::new("mango", "fruit", 2.0, 319, 0.11).unwrap()
    }

    #[test]
    fn test_empty_order_aggregates() {
        let order = Order::new("opened");

        assert!(order.is_empty());
        assert_eq!(order.item_count(), 0);
        assert!(order.calculate_sub_total().is_zero());
        assert_eq!(order.calculate_tax(), 0.0);
        assert_eq!(order.calculate_total(), 0.0);
        assert_eq!(order.total_weight(), 0.0);
    }

    #[test]
    fn test_two_product_aggregates() {
        let mut order = Order::new("opened");
        order.add_item(banana());
        order.add_item(mango());

        // banana 215¢ @ 7%, mango 319¢ @ 11%
        assert_eq!(order.calculate_sub_total().cents(), 534);
        assert!((order.calculate_tax() - 50.14).abs() < 1e-9);
        assert!((order.calculate_total() - 584.14).abs() < 1e-9);
        assert_eq!(order.total_weight(), 2.5);
    }

    #[test]
    fn test_add_item_is_append_only_and_order_preserving() {
        let mut order = Order::new("opened");

        order.add_item(banana());
        order.add_item(mango());
        order.add_item(banana());

        assert_eq!(order.item_count(), 3);

        let names: Vec<&str> = order.products().iter().map(Product::name).collect();
        assert_eq!(names, ["banana", "mango", "banana"]);
    }

    #[test]
    fn test_duplicates_accumulate() {
        let mut order = Order::new("opened");
        order.add_item(banana());
        order.add_item(banana());

        assert_eq!(order.calculate_sub_total().cents(), 430);
        assert_eq!(order.total_weight(), 1.0);
    }

    #[test]
    fn test_default_creation_date_is_today() {
        let order = Order::new("opened");
        assert_eq!(order.creation_date(), Local::now().date_naive());
    }

    #[test]
    fn test_explicit_creation_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let order = Order::with_creation_date("paid", date);

        assert_eq!(order.creation_date(), date);
        assert_eq!(order.status, "paid");
    }

    #[test]
    fn test_status_is_free_text() {
        let mut order = Order::new("openned"); // any label goes, typos included
        order.status = "shipped-ish".to_string();

        order.add_item(banana());
        assert_eq!(order.item_count(), 1);
    }

    #[test]
    fn test_each_order_owns_a_fresh_product_list() {
        let a = Order::new("opened");
        let mut b = Order::new("opened");

        b.add_item(banana());

        assert!(a.is_empty());
        assert_eq!(b.item_count(), 1);
    }
}
