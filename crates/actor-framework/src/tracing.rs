//! # Observability & Tracing
//!
//! Structured logging for every service built on the framework.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) and every request
//! with an `entity_type` field; typed clients open an `instrument` span per
//! call. Together they show a request's full path through the services:
//!
//! ```text
//! DEBUG create_order{account_id=AccountId("01J...") requested_lines=2}:get_account{..}:get{..}: Get entity_type="Account" id=01J... found=true
//! DEBUG create_order{..}:get_products{requested=2}:get_many{..}: GetMany entity_type="Product" requested=2 found=1
//! WARN create_order{..}: Unknown product left out of order product_id=ghost
//! INFO Created entity_type="Order" id=01J... size=1
//! INFO create_order{..}: Order placed order_id=01J... total_price=14 lines=1
//! ```
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=actor_framework=debug,shop=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) is used.
/// Must be called at most once per process.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
