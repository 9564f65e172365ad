//! # Domain Types
//!
//! Core domain types for Orchard.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────────┐         ┌──────────────────────┐         │
//! │  │       Product        │         │        Order         │         │
//! │  │  ──────────────────  │ 0..n ◄──│  ──────────────────  │         │
//! │  │  name       (eq ✓)   │         │  status (free text)  │         │
//! │  │  category   (eq ✓)   │         │  creation_date       │         │
//! │  │  shipping_weight     │         │  products            │         │
//! │  │  unit_price_cents    │         │  (see order module)  │         │
//! │  │  tax_percent         │         └──────────────────────┘         │
//! │  └──────────────────────┘                                          │
//! │                                                                     │
//! │  Product equality is name+category only, case-insensitive.         │
//! │  Weight, price and tax rate never participate in equality.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! A `Product` is validated once at construction and can never change
//! afterwards: all fields are private and there are no setters, so a
//! `Product` in hand always satisfies its invariants.

use serde::Serialize;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Product
// =============================================================================

/// A validated catalog item.
///
/// ## Invariants (enforced by [`Product::new`])
/// - `shipping_weight > 0` (kilograms)
/// - `unit_price_cents > 0` (smallest currency unit)
/// - `0 < tax_percent < 1` (both bounds exclusive)
///
/// Violating any invariant fails construction; no partially-constructed
/// Product ever exists.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Display name. Participates in equality, case-insensitively.
    name: String,

    /// Classification label. Participates in equality, case-insensitively.
    category: String,

    /// Shipping weight in kilograms. Strictly positive.
    shipping_weight: f64,

    /// Unit price in cents (smallest currency unit). Strictly positive.
    unit_price_cents: i64,

    /// Tax rate as a fraction, strictly between 0 and 1 (0.07 = 7%).
    tax_percent: f64,
}

impl Product {
    /// Constructs a validated Product.
    ///
    /// Validators run in field order (shipping_weight, unit_price,
    /// tax_percent) and short-circuit on the first failure.
    ///
    /// ## Example
    /// ```rust
    /// use orchard_core::Product;
    ///
    /// let banana = Product::new("banana", "fruit", 0.5, 215, 0.07)?;
    /// assert_eq!(banana.unit_price().cents(), 215);
    ///
    /// // Invariant violations fail construction:
    /// assert!(Product::new("rock", "mineral", -1.0, 100, 0.05).is_err());
    /// # Ok::<(), orchard_core::ValidationError>(())
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        shipping_weight: f64,
        unit_price_cents: i64,
        tax_percent: f64,
    ) -> ValidationResult<Self> {
        validation::positive_weight("Product", "shipping_weight", shipping_weight)?;
        validation::positive_cents("Product", "unit_price", unit_price_cents)?;
        validation::unit_fraction("Product", "tax_percent", tax_percent)?;

        Ok(Product {
            name: name.into(),
            category: category.into(),
            shipping_weight,
            unit_price_cents,
            tax_percent,
        })
    }

    /// Display name shown to the customer.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification label (e.g. "fruit").
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Shipping weight in kilograms.
    #[inline]
    pub fn shipping_weight(&self) -> f64 {
        self.shipping_weight
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price in cents (smallest currency unit).
    #[inline]
    pub const fn unit_price_cents(&self) -> i64 {
        self.unit_price_cents
    }

    /// Tax rate as a fraction of the unit price.
    #[inline]
    pub fn tax_percent(&self) -> f64 {
        self.tax_percent
    }

    /// Tax owed on one unit, in fractional cents.
    #[inline]
    pub fn unit_tax(&self) -> f64 {
        self.unit_price_cents as f64 * self.tax_percent
    }
}

/// Equality compares `name` and `category` only, case-insensitively.
///
/// Two listings of the same item in the same category are "the same
/// product" even when their weight, price, or tax rate differ.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.category.to_lowercase() == other.category.to_lowercase()
    }
}

/// Eq holds because the float fields are excluded from equality.
impl Eq for Product {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_valid_construction() {
        let banana = Product::new("banana", "fruit", 0.5, 215, 0.07).unwrap();

        assert_eq!(banana.name(), "banana");
        assert_eq!(banana.category(), "fruit");
        assert_eq!(banana.shipping_weight(), 0.5);
        assert_eq!(banana.unit_price_cents(), 215);
        assert_eq!(banana.unit_price(), Money::from_cents(215));
        assert_eq!(banana.tax_percent(), 0.07);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        for weight in [0.0, -0.5, f64::NAN] {
            let err = Product::new("banana", "fruit", weight, 215, 0.07).unwrap_err();
            assert_eq!(
                err,
                ValidationError::NotPositive {
                    owner: "Product",
                    field: "shipping_weight",
                }
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_price() {
        for price in [0, -215] {
            let err = Product::new("banana", "fruit", 0.5, price, 0.07).unwrap_err();
            assert_eq!(
                err,
                ValidationError::NotPositive {
                    owner: "Product",
                    field: "unit_price",
                }
            );
        }
    }

    #[test]
    fn test_rejects_tax_outside_unit_interval() {
        for tax in [0.0, 1.0, -0.07, 1.2, f64::NAN] {
            let err = Product::new("banana", "fruit", 0.5, 215, tax).unwrap_err();
            assert_eq!(
                err,
                ValidationError::NotInUnitInterval {
                    owner: "Product",
                    field: "tax_percent",
                }
            );
        }
    }

    #[test]
    fn test_equality_is_case_insensitive_name_and_category() {
        let mango = Product::new("mango", "fruit", 2.0, 319, 0.11).unwrap();
        let expensive_mango = Product::new("Mango", "Fruit", 4.0, 800, 0.20).unwrap();

        // Same name+category (case-folded) → equal despite differing
        // weight, price, and tax rate.
        assert_eq!(mango, expensive_mango);
    }

    #[test]
    fn test_inequality_on_name_or_category() {
        let mango = Product::new("mango", "fruit", 2.0, 319, 0.11).unwrap();
        let banana = Product::new("banana", "fruit", 2.0, 319, 0.11).unwrap();
        let mango_juice = Product::new("mango", "beverage", 2.0, 319, 0.11).unwrap();

        assert_ne!(mango, banana);
        assert_ne!(mango, mango_juice);
    }

    #[test]
    fn test_unit_tax() {
        let mango = Product::new("mango", "fruit", 2.0, 319, 0.11).unwrap();
        assert!((mango.unit_tax() - 35.09).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_all_fields() {
        let banana = Product::new("banana", "fruit", 0.5, 215, 0.07).unwrap();
        let json = serde_json::to_value(&banana).unwrap();

        assert_eq!(json["name"], "banana");
        assert_eq!(json["category"], "fruit");
        assert_eq!(json["unit_price_cents"], 215);
    }
}
