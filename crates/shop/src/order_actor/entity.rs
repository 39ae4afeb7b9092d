//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::OrderError;
use crate::model::{total_of, Order, OrderId, OrderQuery};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    // Orders arrive fully built through `Put`; there is nothing to create or update.
    type Create = Infallible;
    type Update = Infallible;
    type Query = OrderQuery;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(_id: OrderId, params: Infallible) -> Result<Self, OrderError> {
        match params {}
    }

    /// Integrity checks run before the order is stored.
    async fn on_create(&mut self) -> Result<(), OrderError> {
        if let Some(line) = self.products.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "line for product {} has quantity 0",
                line.id
            )));
        }
        let expected = total_of(&self.products);
        if self.total_price != expected {
            return Err(OrderError::ValidationError(format!(
                "total_price {} does not match line total {}",
                self.total_price, expected
            )));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible) -> Result<(), OrderError> {
        match update {}
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::ForAccount(account_id) => &self.account_id == account_id,
        }
    }
}
