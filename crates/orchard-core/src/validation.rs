//! # Validation Module
//!
//! Numeric invariant validation for orchard-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Constructor-Time Pipeline                       │
//! │                                                                     │
//! │  Product::new(name, category, weight, price, tax)                   │
//! │       │                                                             │
//! │       ├── positive_weight("Product", "shipping_weight", weight)     │
//! │       ├── positive_cents("Product", "unit_price", price)            │
//! │       └── unit_fraction("Product", "tax_percent", tax)              │
//! │       │                                                             │
//! │       └── all Ok → Product exists; any Err → nothing exists         │
//! │                                                                     │
//! │  Validators run in declaration order and short-circuit on the       │
//! │  first failure. Each is pure and total: same input, same answer,    │
//! │  always terminates, never partially applies.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator takes the owning type name and the attribute name so
//! the error message can identify exactly which field failed, on which
//! kind of value.
//!
//! ## Usage
//! ```rust
//! use orchard_core::validation::{positive_cents, unit_fraction};
//!
//! positive_cents("Product", "unit_price", 215).unwrap();
//! assert!(unit_fraction("Product", "tax_percent", 1.5).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Positivity Validators
// =============================================================================

/// Validates that a weight (or any real-valued measure) is strictly positive.
///
/// ## Rules
/// - Must be greater than zero
/// - NaN fails (it is not greater than zero)
///
/// ## Example
/// ```rust
/// use orchard_core::validation::positive_weight;
///
/// assert!(positive_weight("Product", "shipping_weight", 0.5).is_ok());
/// assert!(positive_weight("Product", "shipping_weight", 0.0).is_err());
/// assert!(positive_weight("Product", "shipping_weight", -1.0).is_err());
/// ```
pub fn positive_weight(
    owner: &'static str,
    field: &'static str,
    value: f64,
) -> ValidationResult<()> {
    // `!(value > 0.0)` rather than `value <= 0.0` so NaN is rejected too
    if !(value > 0.0) {
        return Err(ValidationError::NotPositive { owner, field });
    }

    Ok(())
}

/// Validates that an amount in cents is strictly positive.
///
/// ## Rules
/// - Must be greater than zero
/// - Zero is NOT allowed (a product must cost something)
///
/// ## Example
/// ```rust
/// use orchard_core::validation::positive_cents;
///
/// assert!(positive_cents("Product", "unit_price", 215).is_ok());
/// assert!(positive_cents("Product", "unit_price", 0).is_err());
/// assert!(positive_cents("Product", "unit_price", -100).is_err());
/// ```
pub fn positive_cents(
    owner: &'static str,
    field: &'static str,
    value: i64,
) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { owner, field });
    }

    Ok(())
}

// =============================================================================
// Fraction Validators
// =============================================================================

/// Validates that a rate lies strictly inside the unit interval (0, 1).
///
/// ## Rules
/// - Both bounds are exclusive: 0.0 and 1.0 fail
/// - NaN fails
///
/// ## Example
/// ```rust
/// use orchard_core::validation::unit_fraction;
///
/// assert!(unit_fraction("Product", "tax_percent", 0.07).is_ok());
/// assert!(unit_fraction("Product", "tax_percent", 0.0).is_err());
/// assert!(unit_fraction("Product", "tax_percent", 1.0).is_err());
/// ```
pub fn unit_fraction(
    owner: &'static str,
    field: &'static str,
    value: f64,
) -> ValidationResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(ValidationError::NotInUnitInterval { owner, field });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_weight() {
        assert!(positive_weight("Product", "shipping_weight", 0.5).is_ok());
        assert!(positive_weight("Product", "shipping_weight", 4.0).is_ok());

        assert!(positive_weight("Product", "shipping_weight", 0.0).is_err());
        assert!(positive_weight("Product", "shipping_weight", -0.5).is_err());
        assert!(positive_weight("Product", "shipping_weight", f64::NAN).is_err());
    }

    #[test]
    fn test_positive_cents() {
        assert!(positive_cents("Product", "unit_price", 1).is_ok());
        assert!(positive_cents("Product", "unit_price", 215).is_ok());

        assert!(positive_cents("Product", "unit_price", 0).is_err());
        assert!(positive_cents("Product", "unit_price", -215).is_err());
    }

    #[test]
    fn test_unit_fraction() {
        assert!(unit_fraction("Product", "tax_percent", 0.07).is_ok());
        assert!(unit_fraction("Product", "tax_percent", 0.999).is_ok());

        assert!(unit_fraction("Product", "tax_percent", 0.0).is_err());
        assert!(unit_fraction("Product", "tax_percent", 1.0).is_err());
        assert!(unit_fraction("Product", "tax_percent", -0.1).is_err());
        assert!(unit_fraction("Product", "tax_percent", 1.5).is_err());
        assert!(unit_fraction("Product", "tax_percent", f64::NAN).is_err());
    }

    #[test]
    fn test_error_identifies_owner_and_field() {
        let err = positive_cents("Product", "unit_price", -1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Product unit_price attribute must be greater than zero."
        );
    }
}
