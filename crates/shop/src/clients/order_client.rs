//! # Order Client
//!
//! The order orchestrator. It owns no state; every call is composed from
//! fresh lookups against the account service, the catalog and the order
//! store.
//!
//! ## Placing an order
//!
//! 1. The account must exist, otherwise [`OrderError::AccountInvalid`].
//! 2. Requested lines are normalized: when a product id is requested more
//!    than once only its first line counts, and a product whose first line
//!    has quantity 0 is not ordered.
//! 3. All requested products are priced with one batched catalog call
//!    ([`OrderError::CatalogUnavailable`] if it fails). Product ids the
//!    catalog does not return are left out of the order and logged.
//! 4. The total is computed once from the priced lines and the order is
//!    appended to the store.
//!
//! ## Listing orders
//!
//! Stored line items are shown with the catalog's current name, description
//! and price. Quantities and the stored `total_price` are never changed, so a
//! listed order can show a price that differs from what was paid. If the
//! catalog cannot be reached the stored snapshots are returned as they are.
use crate::clients::{AccountClient, CatalogClient, OrderStore};
use crate::model::{AccountId, Order, OrderLine, OrderedProduct, Product, ProductId};
use crate::order_actor::OrderError;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// Places and lists orders on behalf of a front end.
#[derive(Clone)]
pub struct OrderClient {
    store: OrderStore,
    accounts: AccountClient,
    catalog: CatalogClient,
}

impl OrderClient {
    pub fn new(store: OrderStore, accounts: AccountClient, catalog: CatalogClient) -> Self {
        Self {
            store,
            accounts,
            catalog,
        }
    }

    /// Places an order for `account_id` and returns it as stored.
    ///
    /// Nothing is stored when an error is returned.
    #[instrument(skip(self, lines), fields(requested_lines = lines.len()))]
    pub async fn create_order(
        &self,
        account_id: &AccountId,
        lines: &[OrderLine],
    ) -> Result<Order, OrderError> {
        let account = self.accounts.get_account(account_id).await?;
        debug!("Account verified");

        let requested = first_lines(lines);
        let ids: BTreeSet<ProductId> = requested.iter().map(|(id, _)| id.clone()).collect();
        let products = self.catalog.get_products(&ids).await?;
        let priced: HashMap<&ProductId, &Product> = products.iter().map(|p| (&p.id, p)).collect();

        let mut ordered = Vec::with_capacity(requested.len());
        for (id, quantity) in &requested {
            match priced.get(id) {
                Some(product) => ordered.push(OrderedProduct::snapshot(product, *quantity)),
                None => warn!(product_id = %id, "Unknown product left out of order"),
            }
        }

        let order = Order::place(account.id, ordered);
        self.store.put_order(order.clone()).await?;

        info!(
            order_id = %order.id,
            total_price = %order.total_price,
            lines = order.products.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// Returns the account's orders, oldest first, with line items showing
    /// current catalog data.
    #[instrument(skip(self))]
    pub async fn list_orders_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.store.get_orders_for_account(account_id).await?;

        let ids: BTreeSet<ProductId> = orders.iter().flat_map(Order::product_ids).cloned().collect();
        if ids.is_empty() {
            return Ok(orders);
        }

        match self.catalog.get_products(&ids).await {
            Ok(products) => {
                let current: HashMap<&ProductId, &Product> =
                    products.iter().map(|p| (&p.id, p)).collect();
                for line in orders.iter_mut().flat_map(|o| o.products.iter_mut()) {
                    if let Some(product) = current.get(&line.id) {
                        line.redecorate(product);
                    }
                }
            }
            Err(e) => warn!(error = %e, "Catalog unavailable, showing stored line items"),
        }

        debug!(orders = orders.len(), "Orders listed");
        Ok(orders)
    }
}

/// Keeps the first line of each product id, in request order, and drops
/// products whose first line has quantity 0.
fn first_lines(lines: &[OrderLine]) -> Vec<(ProductId, u32)> {
    let mut seen: HashSet<&ProductId> = HashSet::with_capacity(lines.len());
    lines
        .iter()
        .filter(|&line| seen.insert(&line.product_id))
        .filter(|line| line.quantity > 0)
        .map(|line| (line.product_id.clone(), line.quantity))
        .collect()
}
