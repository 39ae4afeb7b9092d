//! # Shop demo
//!
//! Starts the [`OrderSystem`], registers an account and a small catalog,
//! places an order (one requested product does not exist and is left out),
//! raises a price and lists the account's orders: the listed line shows the
//! new price while the order total stays what was paid.

use actor_framework::tracing::setup_tracing;
use rust_decimal::Decimal;
use shop::config::ShopConfig;
use shop::lifecycle::OrderSystem;
use shop::model::{OrderLine, ProductCreate, ProductUpdate};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting shop");
    let system = OrderSystem::new(&config);

    let account = system.account_client.create_account("Alice").await?;
    info!(account_id = %account.id, "Account created");

    let keyboard = system
        .catalog_client
        .create_product(ProductCreate {
            name: "Keyboard".to_string(),
            description: "Mechanical, tenkeyless".to_string(),
            price: Decimal::new(8900, 2),
        })
        .await?;
    let cable = system
        .catalog_client
        .create_product(ProductCreate {
            name: "USB-C cable".to_string(),
            description: "1m, braided".to_string(),
            price: Decimal::new(999, 2),
        })
        .await?;

    let span = tracing::info_span!("order_processing");
    let order = async {
        system
            .order_client
            .create_order(
                &account.id,
                &[
                    OrderLine::new(keyboard.id.clone(), 1),
                    OrderLine::new(cable.id.clone(), 2),
                    OrderLine::new("discontinued-mouse", 1),
                ],
            )
            .await
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, total_price = %order.total_price, "Order placed");

    system
        .catalog_client
        .update_product(
            &keyboard.id,
            ProductUpdate {
                price: Some(Decimal::new(9900, 2)),
                ..Default::default()
            },
        )
        .await?;

    let orders = system
        .order_client
        .list_orders_for_account(&account.id)
        .await?;
    println!("{}", serde_json::to_string_pretty(&orders)?);

    system.shutdown().await?;
    info!("Shop stopped");
    Ok(())
}
