//! # Orchard Demo
//!
//! Console walkthrough of the core domain: builds three fruit products,
//! fills one order, and prints the computed totals.
//!
//! ## Usage
//! ```bash
//! cargo run -p orchard-demo
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p orchard-demo
//! ```
//!
//! ## Output
//! ```text
//! Comparison between mango and expensive mango: true
//! Total order price: $15.44
//! Subtotal order price: $13.34
//! Value paid in taxes: $2.10
//! Total weight order: 6.5 kg
//! ```

use chrono::Local;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use orchard_core::money::format_fractional_cents;
use orchard_core::{Order, Product, ValidationError};

fn main() -> Result<(), ValidationError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("building demo order");

    let banana = Product::new("banana", "fruit", 0.5, 215, 0.07)?;
    let mango = Product::new("mango", "fruit", 2.0, 319, 0.11)?;

    // Same name+category as mango (case-folded), so it compares equal
    // despite the very different weight, price, and tax rate.
    let expensive_mango = Product::new("Mango", "Fruit", 4.0, 800, 0.20)?;

    let mut order = Order::with_creation_date("opened", Local::now().date_naive());

    order.add_item(banana);
    order.add_item(mango.clone());
    order.add_item(expensive_mango.clone());

    debug!(
        items = order.item_count(),
        status = %order.status,
        date = %order.creation_date(),
        "order assembled"
    );

    println!(
        "Comparison between mango and expensive mango: {}",
        mango == expensive_mango
    );

    println!(
        "Total order price: {}",
        format_fractional_cents(order.calculate_total())
    );
    println!("Subtotal order price: {}", order.calculate_sub_total());
    println!(
        "Value paid in taxes: {}",
        format_fractional_cents(order.calculate_tax())
    );
    println!("Total weight order: {} kg", order.total_weight());

    Ok(())
}
