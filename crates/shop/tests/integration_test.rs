use rust_decimal::Decimal;
use shop::account_actor::AccountError;
use shop::config::ShopConfig;
use shop::lifecycle::OrderSystem;
use shop::model::{AccountId, OrderLine, Product, ProductCreate, ProductUpdate};
use shop::order_actor::OrderError;

async fn add_product(system: &OrderSystem, name: &str, price: Decimal) -> Product {
    system
        .catalog_client
        .create_product(ProductCreate {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_full_order_flow() {
    let system = OrderSystem::new(&ShopConfig::default());

    let account = system.account_client.create_account("Alice").await.unwrap();
    let pen = add_product(&system, "Pen", Decimal::new(150, 2)).await;
    let pad = add_product(&system, "Notepad", Decimal::new(399, 2)).await;

    let order = system
        .order_client
        .create_order(
            &account.id,
            &[
                OrderLine::new(pen.id.clone(), 4),
                OrderLine::new("no-such-product", 1),
                OrderLine::new(pad.id.clone(), 2),
            ],
        )
        .await
        .unwrap();

    // 1.50 * 4 + 3.99 * 2
    assert_eq!(order.total_price, Decimal::new(1398, 2));
    assert_eq!(order.products.len(), 2);
    assert_eq!(order.products[0].id, pen.id);
    assert_eq!(order.products[1].id, pad.id);

    let listed = system
        .order_client
        .list_orders_for_account(&account.id)
        .await
        .unwrap();
    assert_eq!(listed, vec![order]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_change_shows_in_lines_not_in_total() {
    let system = OrderSystem::new(&ShopConfig::default());

    let account = system.account_client.create_account("Bob").await.unwrap();
    let lamp = add_product(&system, "Lamp", Decimal::new(20, 0)).await;

    let placed = system
        .order_client
        .create_order(&account.id, &[OrderLine::new(lamp.id.clone(), 3)])
        .await
        .unwrap();
    assert_eq!(placed.total_price, Decimal::new(60, 0));

    system
        .catalog_client
        .update_product(
            &lamp.id,
            ProductUpdate {
                name: Some("Desk Lamp".to_string()),
                price: Some(Decimal::new(25, 0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let listed = system
        .order_client
        .list_orders_for_account(&account.id)
        .await
        .unwrap();

    let line = &listed[0].products[0];
    assert_eq!(line.name, "Desk Lamp");
    assert_eq!(line.price, Decimal::new(25, 0));
    assert_eq!(line.quantity, 3);
    assert_eq!(listed[0].total_price, Decimal::new(60, 0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_account_stores_nothing() {
    let system = OrderSystem::new(&ShopConfig::default());
    let mug = add_product(&system, "Mug", Decimal::new(8, 0)).await;
    let ghost = AccountId::from("ghost");

    let result = system
        .order_client
        .create_order(&ghost, &[OrderLine::new(mug.id.clone(), 1)])
        .await;
    assert_eq!(
        result,
        Err(OrderError::AccountInvalid(AccountError::NotFound(ghost.clone())))
    );

    let listed = system
        .order_client
        .list_orders_for_account(&ghost)
        .await
        .unwrap();
    assert!(listed.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_identical_requests_create_distinct_orders() {
    let system = OrderSystem::new(&ShopConfig::default());

    let account = system.account_client.create_account("Carol").await.unwrap();
    let tea = add_product(&system, "Tea", Decimal::new(450, 2)).await;
    let lines = [OrderLine::new(tea.id.clone(), 2)];

    let first = system.order_client.create_order(&account.id, &lines).await.unwrap();
    let second = system.order_client.create_order(&account.id, &lines).await.unwrap();
    assert_ne!(first.id, second.id);

    let listed = system
        .order_client
        .list_orders_for_account(&account.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].id < listed[1].id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_are_listed_per_account() {
    let system = OrderSystem::new(&ShopConfig::default());

    let dave = system.account_client.create_account("Dave").await.unwrap();
    let erin = system.account_client.create_account("Erin").await.unwrap();
    let soap = add_product(&system, "Soap", Decimal::new(3, 0)).await;

    system
        .order_client
        .create_order(&dave.id, &[OrderLine::new(soap.id.clone(), 1)])
        .await
        .unwrap();

    let erins = system
        .order_client
        .list_orders_for_account(&erin.id)
        .await
        .unwrap();
    assert!(erins.is_empty());

    let daves = system
        .order_client
        .list_orders_for_account(&dave.id)
        .await
        .unwrap();
    assert_eq!(daves.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders() {
    let system = OrderSystem::new(&ShopConfig::default());

    let account = system.account_client.create_account("Frank").await.unwrap();
    let nail = add_product(&system, "Nail", Decimal::new(10, 2)).await;

    let mut tasks = Vec::new();
    for quantity in 1..=10u32 {
        let client = system.order_client.clone();
        let account_id = account.id.clone();
        let line = OrderLine::new(nail.id.clone(), quantity);
        tasks.push(tokio::spawn(async move {
            client.create_order(&account_id, &[line]).await
        }));
    }
    for task in tasks {
        let order = task.await.unwrap().unwrap();
        assert_eq!(
            order.total_price,
            Decimal::new(10, 2) * Decimal::from(order.products[0].quantity)
        );
    }

    let listed = system
        .order_client
        .list_orders_for_account(&account.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 10);

    system.shutdown().await.unwrap();
}
