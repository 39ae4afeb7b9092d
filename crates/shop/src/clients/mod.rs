//! Typed clients for the shop services.
//!
//! [`AccountClient`], [`CatalogClient`] and [`OrderStore`] each wrap the
//! `ResourceClient` of one actor. [`OrderClient`] holds no actor of its own:
//! it composes the other three to place and list orders.

pub mod account_client;
pub mod catalog_client;
pub mod order_client;
pub mod order_store;

pub use account_client::AccountClient;
pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
pub use order_store::OrderStore;
