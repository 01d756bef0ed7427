use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ddd_checkout::application::{CustomerAppService, ProductAppService};
use ddd_checkout::config::AppConfig;
use ddd_checkout::db::{self, SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository};
use ddd_checkout::domain::customer::{
    Address, LogFirstWhenCustomerIsCreated, LogSecondWhenCustomerIsCreated, LogWhenAddressIsChanged,
};
use ddd_checkout::domain::order::{service as order_service, OrderItem};
use ddd_checkout::domain::product::SendEmailWhenProductIsCreated;
use ddd_checkout::domain::{CheckoutEvent, EventKind, Repository};
use ddd_checkout::event_dispatch::EventDispatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Structured logging; RUST_LOG overrides the default filter.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("🚀 Starting checkout demo");

    // === 1. Database ===
    let pool = db::connect(&config.database).await?;
    let customers = Arc::new(SqliteCustomerRepository::new(pool.clone()));
    let products = Arc::new(SqliteProductRepository::new(pool.clone()));
    let orders = SqliteOrderRepository::new(pool.clone());

    // === 2. Event handlers ===
    let mut dispatcher: EventDispatcher<CheckoutEvent> = EventDispatcher::new();
    dispatcher.register(EventKind::CustomerCreated, Arc::new(LogFirstWhenCustomerIsCreated));
    dispatcher.register(EventKind::CustomerCreated, Arc::new(LogSecondWhenCustomerIsCreated));
    dispatcher.register(EventKind::AddressChanged, Arc::new(LogWhenAddressIsChanged));
    dispatcher.register(EventKind::ProductCreated, Arc::new(SendEmailWhenProductIsCreated));
    let dispatcher = Arc::new(dispatcher);

    let customer_service = CustomerAppService::new(customers.clone(), dispatcher.clone());
    let product_service = ProductAppService::new(products.clone(), dispatcher.clone());

    // === 3. Customer and catalog ===
    let customer = customer_service.register_customer("Customer 1", None).await?;
    let mut customer = customer_service
        .change_address(customer.id(), Address::new("Street 1", 123, "11300-000", "São Paulo")?)
        .await?;
    customer.activate()?;
    customers.update(&customer).await?;

    let product1 = product_service.create_product("Product 1", 10.0).await?;
    let product2 = product_service.create_product("Product 2", 15.0).await?;

    // === 4. Order lifecycle ===
    let item1 = OrderItem::new("1", product1.name(), product1.price(), product1.id(), 2)?;
    let mut order = order_service::place_order(&mut customer, vec![item1.clone()])?;
    orders.create(&order).await?;
    customers.update(&customer).await?;
    tracing::info!(order_id = %order.id(), total = order.total(), "✅ Order placed");

    let item2 = OrderItem::new("2", product2.name(), product2.price(), product2.id(), 1)?;
    order.change_items(vec![item1, item2])?;
    orders.update(&order).await?;

    let stored = orders.find(order.id()).await?;
    tracing::info!(
        order_id = %stored.id(),
        items = stored.items().len(),
        total = stored.total(),
        "✅ Order reloaded"
    );

    let all_orders = orders.find_all().await?;
    let reloaded_customer = customers.find(customer.id()).await?;
    tracing::info!(
        orders = all_orders.len(),
        grand_total = order_service::total(&all_orders),
        reward_points = reloaded_customer.reward_points(),
        "🎉 Demo complete!"
    );

    Ok(())
}
