//! # System Lifecycle
//!
//! Starts, wires and stops the shop's actors.
//!
//! ## Wiring
//!
//! [`OrderSystem::new`] creates the account, catalog and order actors, spawns
//! each on the Tokio runtime and hands out their clients. The orchestrating
//! [`OrderClient`](crate::clients::OrderClient) receives clones of the account
//! and catalog clients; it has no actor of its own. The dependency graph is
//! acyclic, so channel closure is enough to stop everything.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors finish** - remaining messages are processed, final state logged
//! 4. **Await completion** - [`OrderSystem::shutdown`] joins every actor task
//!
//! A client cloned out of the system keeps its actor alive; drop such clones
//! before calling `shutdown`.

pub mod order_system;

pub use order_system::*;
