//! # ActorClient Trait
//!
//! Common read operations for resource-specific clients, built on top of a
//! generic `ResourceClient` and reported through the client's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Account { id: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("account service unavailable: {0}")]
/// struct AccountError(String);
///
/// #[async_trait]
/// impl ActorEntity for Account {
///     type Id = String;
///     type Create = ();
///     type Update = Infallible;
///     type Query = ();
///     type Error = AccountError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, update: Infallible) -> Result<(), Self::Error> { match update {} }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// struct AccountClient {
///     inner: ResourceClient<Account>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Account> for AccountClient {
///     type Error = AccountError;
///
///     fn inner(&self) -> &ResourceClient<Account> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         AccountError(e.to_string())
///     }
/// }
///
/// async fn usage(client: AccountClient) {
///     // get(), get_many() and list() are provided automatically
///     let _ = client.get("acct_1".to_string()).await;
///     let _ = client.get_many(vec![]).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity whose id is in `ids`; unknown ids are skipped.
    ///
    /// An empty id list is answered locally without contacting the actor.
    #[tracing::instrument(skip(self))]
    async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, Self::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!("Sending request");
        self.inner().get_many(ids).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }
}
