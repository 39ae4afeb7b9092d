//! # Generic Messages
//!
//! The request envelope exchanged between a `ResourceClient` and its
//! `ResourceActor`. Every variant carries a oneshot responder, so a request is
//! a blocking call from the caller's point of view.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: the actor assigns the id and builds the entity from [`ActorEntity::Create`].
/// - **Put**: the caller supplies a complete entity with its own id. Append-only.
/// - **Get**: fetch one entity by id.
/// - **GetMany**: best-effort batch fetch; unknown ids are left out of the result.
/// - **List**: every entity matching an [`ActorEntity::Query`].
/// - **Update**: apply an [`ActorEntity::Update`] and return the new state.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Put {
        item: T,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
