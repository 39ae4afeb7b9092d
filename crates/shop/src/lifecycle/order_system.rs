use crate::clients::{AccountClient, CatalogClient, OrderClient};
use crate::config::ShopConfig;
use crate::{account_actor, catalog_actor, order_actor};
use tokio::task::JoinHandle;
use tracing::info;

/// The running shop: one actor per service plus the clients to reach them.
pub struct OrderSystem {
    pub account_client: AccountClient,
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns all actors. Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let (account_actor, account_client) = account_actor::new(config);
        let (catalog_actor, catalog_client) = catalog_actor::new(config);
        let (order_actor, order_store) = order_actor::new(config);

        let handles = vec![
            tokio::spawn(account_actor.run()),
            tokio::spawn(catalog_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        let order_client =
            OrderClient::new(order_store, account_client.clone(), catalog_client.clone());

        info!(
            mailbox_capacity = config.mailbox_capacity,
            request_timeout = ?config.request_timeout,
            "Order system started"
        );

        Self {
            account_client,
            catalog_client,
            order_client,
            handles,
        }
    }

    /// Drops the clients and waits for every actor to stop.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        let Self {
            account_client,
            catalog_client,
            order_client,
            handles,
        } = self;
        drop(order_client);
        drop(account_client);
        drop(catalog_client);

        for handle in handles {
            handle.await?;
        }
        info!("Order system stopped");
        Ok(())
    }
}
