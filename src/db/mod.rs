// ============================================================================
// Persistence - SQLite repositories over sqlx
// ============================================================================
//
// Maps domain entities to rows and back. One table per aggregate, plus
// order_items for the Order aggregate's children.
//
// ============================================================================

mod customer_repository;
mod models;
mod order_repository;
mod product_repository;
mod schema;

pub use customer_repository::SqliteCustomerRepository;
pub use order_repository::SqliteOrderRepository;
pub use product_repository::SqliteProductRepository;
pub use schema::ensure_schema;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::domain::RepositoryError;

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Storage(Box::new(err))
    }
}

/// Open a pool for `config` and make sure the schema exists.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.effective_max_connections());
    if config.is_in_memory() {
        // Closing the only connection would drop the database with it.
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    ensure_schema(&pool).await?;

    tracing::info!(
        url = %config.url,
        max_connections = config.effective_max_connections(),
        "Connected to database"
    );

    Ok(pool)
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    use crate::config::DatabaseConfig;
    use crate::domain::customer::{Address, Customer};
    use crate::domain::product::Product;
    use crate::domain::Repository;
    use super::{SqliteCustomerRepository, SqliteProductRepository};

    /// Fresh in-memory database with the schema applied.
    pub async fn memory_pool() -> SqlitePool {
        super::connect(&DatabaseConfig::default())
            .await
            .expect("in-memory database should open")
    }

    /// Customer "123" and products "123"/"124", the rows order tests reference.
    pub async fn seed_catalog(pool: &SqlitePool) -> (Customer, Product, Product) {
        let mut customer = Customer::new("123", "Customer 1").unwrap();
        customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap());
        SqliteCustomerRepository::new(pool.clone())
            .create(&customer)
            .await
            .unwrap();

        let products = SqliteProductRepository::new(pool.clone());
        let product1 = Product::new("123", "Product 1", 10.0).unwrap();
        let product2 = Product::new("124", "Product 2", 15.0).unwrap();
        products.create(&product1).await.unwrap();
        products.create(&product2).await.unwrap();

        (customer, product1, product2)
    }
}
