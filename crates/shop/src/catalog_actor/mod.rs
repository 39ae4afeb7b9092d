//! # Catalog Actor
//!
//! The catalog service: the authoritative source of product names,
//! descriptions and prices. Prices may change at any time through
//! [`CatalogClient::update_product`](crate::clients::CatalogClient::update_product);
//! orders placed earlier keep the prices they were placed at.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::config::ShopConfig;
use crate::model::{Product, ProductId};
use actor_framework::ResourceActor;

/// Creates a new Catalog actor and its client.
pub fn new(config: &ShopConfig) -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(config.mailbox_capacity, ProductId::generate);
    let client = CatalogClient::new(config.bound(generic_client));

    (actor, client)
}
