//! Entity trait implementation for the Account domain type.
//!
//! See the trait implementation on [`Account`] for method documentation.

use super::AccountError;
use crate::model::{Account, AccountCreate, AccountId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = AccountCreate;
    type Update = Infallible;
    type Query = ();
    type Error = AccountError;

    fn id(&self) -> &AccountId {
        &self.id
    }

    /// Creates a new Account; the name is trimmed and must not be empty.
    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, AccountError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(AccountError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    async fn on_update(&mut self, update: Infallible) -> Result<(), AccountError> {
        match update {}
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }
}
