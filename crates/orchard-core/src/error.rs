//! # Error Types
//!
//! Domain-specific error types for orchard-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Flow                                 │
//! │                                                                     │
//! │  Product::new(name, category, weight, price, tax)                   │
//! │       │                                                             │
//! │       ├── weight <= 0 ──► ValidationError::NotPositive              │
//! │       ├── price  <= 0 ──► ValidationError::NotPositive              │
//! │       └── tax ∉ (0,1) ──► ValidationError::NotInUnitInterval        │
//! │                                                                     │
//! │  Errors are never caught inside the workspace; they propagate       │
//! │  straight to the caller and no partially-built Product exists.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (owning type, attribute name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Numeric invariant violations detected during value construction.
///
/// These errors occur when an attribute value doesn't meet its declared
/// invariant. The message always names the owning type and the offending
/// attribute so the caller can report the failure without extra lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be strictly greater than zero.
    ///
    /// Applied to `shipping_weight` and `unit_price`.
    #[error("{owner} {field} attribute must be greater than zero.")]
    NotPositive {
        owner: &'static str,
        field: &'static str,
    },

    /// Value must lie strictly between 0 and 1 (both bounds exclusive).
    ///
    /// Applied to `tax_percent`.
    #[error("{owner} {field} attribute must be between 0 and 1.")]
    NotInUnitInterval {
        owner: &'static str,
        field: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
