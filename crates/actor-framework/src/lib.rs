//! # Actor Framework
//!
//! Building blocks for running resource services as in-process actors.
//!
//! Each service owns one kind of resource (accounts, products, orders) and
//! runs as a [`ResourceActor`] in its own Tokio task. Other code reaches it only
//! through a cloneable [`ResourceClient`], so every interaction is a
//! request/response call: the caller sends a [`ResourceRequest`] and awaits
//! the answer on a oneshot channel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource type, its DTOs and validation hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - sequential message processing over an owned store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed calls with optional deadlines
//!
//! ## Request Kinds
//!
//! | Request | Purpose |
//! |---------|---------|
//! | `Create` | Actor assigns the id and builds the entity |
//! | `Put` | Caller supplies a complete entity; existing ids are rejected |
//! | `Get` | One entity by id |
//! | `GetMany` | Best-effort batch lookup, unknown ids are absent from the result |
//! | `List` | All entities matching a query |
//! | `Update` | Apply a patch and return the new state |
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles one message at a time
//! - Different actors run in parallel
//! - No shared mutable state; callers hold clients, actors hold data
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts the answers of a service so the code that
//! composes several services can be tested without spawning any actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
