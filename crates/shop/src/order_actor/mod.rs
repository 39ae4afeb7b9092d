//! # Order Actor
//!
//! The order store: an append-only collection of placed orders. Orders are
//! assembled by the [`OrderClient`](crate::clients::OrderClient) and handed
//! to this actor complete, id included, through `Put`; the store never
//! creates, edits or deletes orders on its own.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type shared by the store and the orchestrator
//! - [`new()`] - Factory function that creates the actor and the store client
//!
//! ## Integrity
//!
//! Before an order becomes visible the store checks that every line has a
//! positive quantity and that `total_price` equals the sum of its lines.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderStore;
use crate::config::ShopConfig;
use crate::model::{Order, OrderId};
use actor_framework::ResourceActor;

/// Creates a new Order actor and its store client.
pub fn new(config: &ShopConfig) -> (ResourceActor<Order>, OrderStore) {
    let (actor, generic_client) = ResourceActor::new(config.mailbox_capacity, OrderId::new);
    let store = OrderStore::new(config.bound(generic_client));

    (actor, store)
}
