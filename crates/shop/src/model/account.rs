use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Accounts.
///
/// Assigned by the account service as a ULID string. Lookups accept any
/// string, so an id that was never issued is simply "not found".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string())
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer account, owned by the account service.
///
/// # Actor Framework
/// See [`impl ActorEntity for Account`](#impl-ActorEntity-for-Account) for the
/// creation payload ([`AccountCreate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
}

/// Payload for creating a new account.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub name: String,
}
