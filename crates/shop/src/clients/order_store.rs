//! # Order Store
//!
//! Typed access to the `Order` actor: append an order, read an account's
//! orders. There is no update or delete.
use crate::model::{AccountId, Order, OrderId, OrderQuery};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderStore {
    inner: ResourceClient<Order>,
}

impl OrderStore {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderStore {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(e) => match e.downcast::<OrderError>() {
                Ok(e) => *e,
                Err(e) => OrderError::StorageError(e.to_string()),
            },
            other => OrderError::StorageError(other.to_string()),
        }
    }
}

impl OrderStore {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn put_order(&self, order: Order) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.put(order).await.map_err(Self::map_error)
    }

    /// All orders of one account, oldest first.
    #[instrument(skip(self))]
    pub async fn get_orders_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<Order>, OrderError> {
        self.list(OrderQuery::ForAccount(account_id.clone())).await
    }
}
