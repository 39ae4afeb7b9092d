//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod account;
pub mod order;
pub mod product;

pub use account::*;
pub use order::*;
pub use product::*;
