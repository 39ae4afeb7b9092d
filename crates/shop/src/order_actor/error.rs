//! Error types for placing and listing orders.

use crate::account_actor::AccountError;
use crate::catalog_actor::CatalogError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Every variant aborts the operation as a whole: when an error is returned,
/// no order has been stored.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The account does not exist or the account service failed.
    #[error("Account invalid: {0}")]
    AccountInvalid(#[from] AccountError),

    /// The catalog service failed while pricing the order. Unknown product
    /// ids are not an error; they are left out of the order.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    /// Reading from or writing to the order store failed.
    #[error("Order storage error: {0}")]
    StorageError(String),

    /// The order was rejected by the store's integrity checks.
    #[error("Order validation error: {0}")]
    ValidationError(String),
}
