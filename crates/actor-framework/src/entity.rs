//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Account, Product,
//! Order, ...) implements to be hosted by the generic [`ResourceActor`](crate::ResourceActor).
//! It names the identifier, the create/update DTOs and the list query of the
//! resource, and provides the hooks the actor calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs before a created or put entity becomes
//!   visible. The default accepts everything.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// Identifiers are `Ord` so the actor keeps its store sorted: list results come
/// back in id order, which for time-ordered ids (ULIDs) is creation order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance when the actor assigns the id.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Filter used by list requests.
    type Query: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message; every hook reports
    /// through it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier the entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called before a new entity is stored, for both create and put.
    /// Returning an error leaves the store untouched.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this entity belongs in the result of a list request.
    fn matches(&self, query: &Self::Query) -> bool;
}
