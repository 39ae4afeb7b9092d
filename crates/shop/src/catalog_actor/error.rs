//! Error types for the Catalog actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No product with this id exists.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// The catalog service could not be reached or did not answer in time.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
