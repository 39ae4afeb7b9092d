use actor_framework::mock::{
    create_mock_client, expect_get, expect_get_many, expect_put, MockClient,
};
use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use shop::account_actor::AccountError;
use shop::catalog_actor::CatalogError;
use shop::clients::{AccountClient, CatalogClient, OrderClient, OrderStore};
use shop::config::ShopConfig;
use shop::model::{Account, AccountId, Order, OrderLine, OrderedProduct, Product, ProductId};
use shop::order_actor::{self, OrderError};
use std::time::Duration;

/// Real `OrderClient` with every collaborator mocked.
struct Harness {
    accounts: MockClient<Account>,
    catalog: MockClient<Product>,
    store: MockClient<Order>,
    client: OrderClient,
}

impl Harness {
    fn new() -> Self {
        let accounts = MockClient::<Account>::new();
        let catalog = MockClient::<Product>::new();
        let store = MockClient::<Order>::new();
        let client = OrderClient::new(
            OrderStore::new(store.client()),
            AccountClient::new(accounts.client()),
            CatalogClient::new(catalog.client()),
        );
        Self {
            accounts,
            catalog,
            store,
            client,
        }
    }

    fn verify(&self) {
        self.accounts.verify();
        self.catalog.verify();
        self.store.verify();
    }
}

fn alice() -> Account {
    Account {
        id: AccountId::from("alice"),
        name: "Alice".to_string(),
    }
}

fn product(id: &str, price: i64) -> Product {
    Product::new(ProductId::from(id), id.to_uppercase(), format!("about {id}"), Decimal::new(price, 0))
}

fn stored_order(lines: Vec<OrderedProduct>) -> Order {
    Order::place(AccountId::from("alice"), lines)
}

#[tokio::test]
async fn test_unknown_account_aborts_before_pricing() {
    let mut h = Harness::new();
    h.accounts.expect_get().return_ok(None);

    let result = h
        .client
        .create_order(&AccountId::from("ghost"), &[OrderLine::new("a", 1)])
        .await;

    assert_eq!(
        result,
        Err(OrderError::AccountInvalid(AccountError::NotFound(
            AccountId::from("ghost")
        )))
    );
    // No catalog or store expectations: any call would be reported here.
    h.verify();
}

#[tokio::test]
async fn test_account_service_failure_is_account_invalid() {
    let mut h = Harness::new();
    h.accounts
        .expect_get()
        .return_err(FrameworkError::Timeout(std::time::Duration::from_millis(5)));

    let result = h
        .client
        .create_order(&AccountId::from("alice"), &[OrderLine::new("a", 1)])
        .await;

    assert!(matches!(result, Err(OrderError::AccountInvalid(_))));
    h.verify();
}

#[tokio::test]
async fn test_unknown_products_are_dropped() {
    let mut h = Harness::new();
    h.accounts.expect_get().return_ok(Some(alice()));
    h.catalog.expect_get_many().return_ok(vec![product("a", 7)]);
    h.store.expect_put().return_ok(Default::default());

    let order = h
        .client
        .create_order(
            &AccountId::from("alice"),
            &[OrderLine::new("a", 2), OrderLine::new("b", 3)],
        )
        .await
        .unwrap();

    assert_eq!(order.products.len(), 1);
    assert_eq!(order.products[0].id, ProductId::from("a"));
    assert_eq!(order.products[0].quantity, 2);
    assert_eq!(order.products[0].name, "A");
    assert_eq!(order.total_price, Decimal::new(14, 0));
    assert_eq!(order.account_id, AccountId::from("alice"));
    h.verify();
}

#[tokio::test]
async fn test_catalog_failure_aborts_without_storing() {
    let mut h = Harness::new();
    h.accounts.expect_get().return_ok(Some(alice()));
    h.catalog
        .expect_get_many()
        .return_err(FrameworkError::ActorClosed);

    let result = h
        .client
        .create_order(&AccountId::from("alice"), &[OrderLine::new("a", 1)])
        .await;

    assert!(matches!(
        result,
        Err(OrderError::CatalogUnavailable(
            CatalogError::ActorCommunicationError(_)
        ))
    ));
    h.verify();
}

#[tokio::test]
async fn test_store_failure_is_storage_error() {
    let mut h = Harness::new();
    h.accounts.expect_get().return_ok(Some(alice()));
    h.catalog.expect_get_many().return_ok(vec![product("a", 1)]);
    h.store.expect_put().return_err(FrameworkError::ActorDropped);

    let result = h
        .client
        .create_order(&AccountId::from("alice"), &[OrderLine::new("a", 1)])
        .await;

    assert!(matches!(result, Err(OrderError::StorageError(_))));
    h.verify();
}

#[tokio::test]
async fn test_list_redecorates_lines_but_keeps_totals() {
    let mut h = Harness::new();
    let placed = stored_order(vec![
        OrderedProduct::snapshot(&product("a", 10), 2),
        OrderedProduct::snapshot(&product("b", 5), 1),
    ]);
    h.store.expect_list().return_ok(vec![placed.clone()]);

    let mut repriced = product("a", 12);
    repriced.name = "A v2".to_string();
    // "b" has left the catalog: its stored snapshot stays.
    h.catalog.expect_get_many().return_ok(vec![repriced]);

    let orders = h
        .client
        .list_orders_for_account(&AccountId::from("alice"))
        .await
        .unwrap();

    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.total_price, Decimal::new(25, 0));
    assert_eq!(order.products[0].name, "A v2");
    assert_eq!(order.products[0].price, Decimal::new(12, 0));
    assert_eq!(order.products[0].quantity, 2);
    assert_eq!(order.products[1], placed.products[1]);
    h.verify();
}

#[tokio::test]
async fn test_list_degrades_when_catalog_is_down() {
    let mut h = Harness::new();
    let placed = stored_order(vec![OrderedProduct::snapshot(&product("a", 10), 1)]);
    h.store.expect_list().return_ok(vec![placed.clone()]);
    h.catalog
        .expect_get_many()
        .return_err(FrameworkError::ActorClosed);

    let orders = h
        .client
        .list_orders_for_account(&AccountId::from("alice"))
        .await
        .unwrap();

    assert_eq!(orders, vec![placed]);
    h.verify();
}

#[tokio::test]
async fn test_list_without_orders_skips_catalog() {
    let mut h = Harness::new();
    h.store.expect_list().return_ok(Vec::new());

    let orders = h
        .client
        .list_orders_for_account(&AccountId::from("nobody"))
        .await
        .unwrap();

    assert!(orders.is_empty());
    h.verify();
}

#[tokio::test]
async fn test_list_store_failure_is_storage_error() {
    let mut h = Harness::new();
    h.store.expect_list().return_err(FrameworkError::ActorClosed);

    let result = h
        .client
        .list_orders_for_account(&AccountId::from("alice"))
        .await;

    assert!(matches!(result, Err(OrderError::StorageError(_))));
    h.verify();
}

/// The catalog sees each product id once, even when it appears in several
/// orders or several times in one request.
#[tokio::test]
async fn test_product_ids_are_fetched_once() {
    let mut store = MockClient::<Order>::new();
    let accounts = MockClient::<Account>::new();
    let (catalog_client, mut catalog) = create_mock_client::<Product>(10);

    store.expect_list().return_ok(vec![
        stored_order(vec![
            OrderedProduct::snapshot(&product("b", 1), 1),
            OrderedProduct::snapshot(&product("a", 1), 1),
        ]),
        stored_order(vec![OrderedProduct::snapshot(&product("a", 1), 4)]),
    ]);

    let client = OrderClient::new(
        OrderStore::new(store.client()),
        AccountClient::new(accounts.client()),
        CatalogClient::new(catalog_client),
    );
    let task = tokio::spawn(async move {
        client
            .list_orders_for_account(&AccountId::from("alice"))
            .await
    });

    let (ids, responder) = expect_get_many(&mut catalog)
        .await
        .expect("Expected GetMany request");
    assert_eq!(ids, vec![ProductId::from("a"), ProductId::from("b")]);
    responder.send(Ok(vec![product("a", 3)])).unwrap();

    let orders = task.await.unwrap().unwrap();
    assert_eq!(orders[0].products[1].price, Decimal::new(3, 0));
    assert_eq!(orders[1].products[0].price, Decimal::new(3, 0));
    store.verify();
}

/// The order handed to the store is exactly the order returned to the caller.
#[tokio::test]
async fn test_returned_order_is_the_stored_order() {
    let (account_client, mut accounts) = create_mock_client::<Account>(10);
    let (store_client, mut store) = create_mock_client::<Order>(10);
    let mut catalog = MockClient::<Product>::new();
    catalog
        .expect_get_many()
        .return_ok(vec![product("a", 4), product("b", 6)]);

    let client = OrderClient::new(
        OrderStore::new(store_client),
        AccountClient::new(account_client),
        CatalogClient::new(catalog.client()),
    );
    let task = tokio::spawn(async move {
        client
            .create_order(
                &AccountId::from("alice"),
                &[OrderLine::new("b", 1), OrderLine::new("a", 2)],
            )
            .await
    });

    let (account_id, responder) = expect_get(&mut accounts)
        .await
        .expect("Expected Get request");
    assert_eq!(account_id, AccountId::from("alice"));
    responder.send(Ok(Some(alice()))).unwrap();

    let (stored, responder) = expect_put(&mut store)
        .await
        .expect("Expected Put request");
    responder.send(Ok(stored.id)).unwrap();

    let returned = task.await.unwrap().unwrap();
    assert_eq!(returned.id, stored.id);
    assert_eq!(returned.account_id, stored.account_id);
    assert_eq!(returned.products, stored.products);
    assert_eq!(returned.total_price, stored.total_price);
    assert_eq!(returned, stored);
    assert_eq!(stored.total_price, Decimal::new(14, 0));
    let ids: Vec<&str> = stored.products.iter().map(|p| p.id.0.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    catalog.verify();
}

/// A store write that misses its deadline leaves nothing behind, even when
/// the store gets to the queued request afterwards.
#[tokio::test]
async fn test_timed_out_store_write_persists_nothing() {
    let mut accounts = MockClient::<Account>::new();
    let mut catalog = MockClient::<Product>::new();
    accounts.expect_get().return_ok(Some(alice()));
    catalog.expect_get_many().return_ok(vec![product("a", 1)]);

    let config = ShopConfig {
        request_timeout: Some(Duration::from_millis(20)),
        ..ShopConfig::default()
    };
    let (store_actor, store) = order_actor::new(&config);
    let client = OrderClient::new(
        store.clone(),
        AccountClient::new(accounts.client()),
        CatalogClient::new(catalog.client()),
    );

    let result = client
        .create_order(&AccountId::from("alice"), &[OrderLine::new("a", 1)])
        .await;
    assert!(matches!(result, Err(OrderError::StorageError(_))));

    // Store starts late and finds the abandoned Put first in its queue
    let handle = tokio::spawn(store_actor.run());
    let stored = store
        .get_orders_for_account(&AccountId::from("alice"))
        .await
        .unwrap();
    assert!(stored.is_empty());

    drop(client);
    drop(store);
    handle.await.unwrap();
    accounts.verify();
    catalog.verify();
}
