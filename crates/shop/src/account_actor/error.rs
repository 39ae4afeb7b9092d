//! Error types for the Account actor.

use crate::model::AccountId;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// No account with this id exists.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// The account data provided is invalid.
    #[error("Account validation error: {0}")]
    ValidationError(String),

    /// The account service could not be reached or did not answer in time.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
