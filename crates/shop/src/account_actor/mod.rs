//! # Account Actor
//!
//! The account service: owns customer accounts and answers lookups by id.
//! Orders are only placed for accounts this service knows about.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`AccountError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use shop::account_actor;
//! use shop::config::ShopConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = account_actor::new(&ShopConfig::default());
//!     tokio::spawn(actor.run());
//!
//!     let account = client.create_account("Alice").await?;
//!     let found = client.get_account(&account.id).await?;
//!     assert_eq!(found.name, "Alice");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AccountClient;
use crate::config::ShopConfig;
use crate::model::{Account, AccountId};
use actor_framework::ResourceActor;

/// Creates a new Account actor and its client.
pub fn new(config: &ShopConfig) -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(config.mailbox_capacity, AccountId::generate);
    let client = AccountClient::new(config.bound(generic_client));

    (actor, client)
}
