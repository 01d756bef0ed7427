use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::product::Product;
use crate::domain::{Repository, RepositoryError};
use super::models::ProductModel;

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for SqliteProductRepository {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let row = ProductModel::from(product);

        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(&row.id)
            .bind(&row.name)
            .bind(row.price)
            .execute(&self.pool)
            .await?;

        tracing::info!(product_id = %row.id, "✅ Product created");
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let row = ProductModel::from(product);

        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&row.name)
            .bind(row.price)
            .bind(&row.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Product", row.id));
        }

        tracing::info!(product_id = %row.id, "Product updated");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let row: Option<ProductModel> =
            sqlx::query_as("SELECT id, name, price FROM products WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.ok_or_else(|| RepositoryError::not_found("Product", id))?
            .into_domain()
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductModel> = sqlx::query_as("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ProductModel::into_domain).collect()
    }
}
