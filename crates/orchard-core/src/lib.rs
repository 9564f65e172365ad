//! # orchard-core: Pure Business Logic for Orchard
//!
//! This crate is the **heart** of Orchard. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Orchard Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/demo (driver)                      │   │
//! │  │    build products ──► fill order ──► print totals           │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ orchard-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐    │   │
//! │  │   │  types  │  │  order  │  │  money  │  │ validation │    │   │
//! │  │   │ Product │  │  Order  │  │  Money  │  │   rules    │    │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘    │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`Product`] value object
//! - [`order`] - The [`Order`] container and its aggregate computations
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Numeric invariant validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Unit prices are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use orchard_core::{Order, Product};
//!
//! let banana = Product::new("banana", "fruit", 0.5, 215, 0.07)?;
//!
//! let mut order = Order::new("opened");
//! order.add_item(banana);
//!
//! // Subtotal is exact integer cents; tax carries fractional cents.
//! assert_eq!(order.calculate_sub_total().cents(), 215);
//! assert!((order.calculate_tax() - 15.05).abs() < 1e-9);
//! # Ok::<(), orchard_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orchard_core::Product` instead of
// `use orchard_core::types::Product`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use order::Order;
pub use types::Product;
