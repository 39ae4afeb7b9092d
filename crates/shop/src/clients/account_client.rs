//! # Account Client
//!
//! Provides a high‑level API for interacting with the `Account` actor.
//! It wraps a `ResourceClient<Account>` and exposes domain‑specific methods.
use crate::account_actor::AccountError;
use crate::model::{Account, AccountCreate, AccountId};
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(e) => match e.downcast::<AccountError>() {
                Ok(e) => *e,
                Err(e) => AccountError::ValidationError(e.to_string()),
            },
            other => AccountError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl AccountClient {
    #[instrument(skip(self))]
    pub async fn create_account(&self, name: &str) -> Result<Account, AccountError> {
        debug!("Sending request");
        self.inner
            .create(AccountCreate {
                name: name.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Looks up an account, turning an unknown id into [`AccountError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| AccountError::NotFound(id.clone()))
    }
}
