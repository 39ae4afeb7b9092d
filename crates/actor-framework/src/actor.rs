//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server half of a resource
//! service. It owns the entity store and the receiving end of the request
//! channel, and processes messages one at a time so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: clone the client freely; the actor stops once every clone is dropped.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = Infallible;
///     type Query = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, text })
///     }
///     async fn on_update(&mut self, update: Infallible) -> Result<(), Self::Error> {
///         match update {}
///     }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Note>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run());
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Id generator used for `Create` requests.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "shop::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    if respond_to.is_closed() {
                        warn!(entity_type, "Caller gone, Create skipped");
                        continue;
                    }
                    let id = (self.next_id)();
                    let result = match T::from_create_params(id, params) {
                        Ok(item) => self.insert(entity_type, item).await.map(|(_, item)| item),
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    if let Err(Ok(item)) = respond_to.send(result) {
                        self.roll_back(entity_type, item.id());
                    }
                }
                ResourceRequest::Put { item, respond_to } => {
                    debug!(entity_type, id = %item.id(), "Put");
                    if respond_to.is_closed() {
                        warn!(entity_type, id = %item.id(), "Caller gone, Put skipped");
                        continue;
                    }
                    let result = if self.store.contains_key(item.id()) {
                        warn!(entity_type, id = %item.id(), "Already exists");
                        Err(FrameworkError::AlreadyExists(item.id().to_string()))
                    } else {
                        self.insert(entity_type, item).await.map(|(id, _)| id)
                    };
                    if let Err(Ok(id)) = respond_to.send(result) {
                        self.roll_back(entity_type, &id);
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, found = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if respond_to.is_closed() {
                        warn!(entity_type, %id, "Caller gone, Update skipped");
                        continue;
                    }
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks mutate a copy so a failed update leaves the stored entity intact
                        let mut updated = item.clone();
                        if let Err(e) = updated.on_update(update).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = updated.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Removes an entity whose creation could not be reported to its caller.
    fn roll_back(&mut self, entity_type: &str, id: &T::Id) {
        self.store.remove(id);
        warn!(entity_type, %id, size = self.store.len(), "Caller gone, creation rolled back");
    }

    /// Runs `on_create` and stores the entity if the hook accepts it.
    async fn insert(
        &mut self,
        entity_type: &str,
        mut item: T,
    ) -> Result<(T::Id, T), FrameworkError> {
        if let Err(e) = item.on_create().await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        let id = item.id().clone();
        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok((id, item))
    }
}
