//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SHOP_MAILBOX_CAPACITY` | `32` | Request queue length of each service actor |
//! | `SHOP_REQUEST_TIMEOUT_MS` | `5000` | Deadline for every downstream call, `0` disables it |
//! | `SHOP_LOG` | `info` | Log filter used when `RUST_LOG` is unset |

use actor_framework::{ActorEntity, ResourceClient};
use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub mailbox_capacity: usize,
    pub request_timeout: Option<Duration>,
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            request_timeout: Some(Duration::from_millis(5000)),
            log_filter: "info".to_string(),
        }
    }
}

impl ShopConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source; unset variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("SHOP_MAILBOX_CAPACITY") {
            config.mailbox_capacity = match value.parse::<usize>() {
                Ok(0) => return Err(invalid("SHOP_MAILBOX_CAPACITY", value, "must be positive")),
                Ok(capacity) => capacity,
                Err(e) => return Err(invalid("SHOP_MAILBOX_CAPACITY", value, e)),
            };
        }

        if let Some(value) = lookup("SHOP_REQUEST_TIMEOUT_MS") {
            config.request_timeout = match value.parse::<u64>() {
                Ok(0) => None,
                Ok(millis) => Some(Duration::from_millis(millis)),
                Err(e) => return Err(invalid("SHOP_REQUEST_TIMEOUT_MS", value, e)),
            };
        }

        if let Some(value) = lookup("SHOP_LOG") {
            config.log_filter = value;
        }

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Applies the configured request deadline to a service client.
    pub fn bound<T: ActorEntity>(&self, client: ResourceClient<T>) -> ResourceClient<T> {
        match self.request_timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }
}

fn invalid(name: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.to_string(),
    }
}
