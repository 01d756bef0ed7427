use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::customer::Customer;
use crate::domain::{Repository, RepositoryError};
use super::models::CustomerModel;

// ============================================================================
// SQLite Customer Repository
// ============================================================================

#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Customer> for SqliteCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let row = CustomerModel::from(customer);

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zip, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.name)
        .bind(&row.street)
        .bind(row.number)
        .bind(&row.zip)
        .bind(&row.city)
        .bind(row.active)
        .bind(row.reward_points)
        .execute(&self.pool)
        .await?;

        tracing::info!(customer_id = %row.id, "✅ Customer created");
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let row = CustomerModel::from(customer);

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, street = ?, number = ?, zip = ?, city = ?, active = ?, reward_points = ?
            WHERE id = ?
            "#,
        )
        .bind(&row.name)
        .bind(&row.street)
        .bind(row.number)
        .bind(&row.zip)
        .bind(&row.city)
        .bind(row.active)
        .bind(row.reward_points)
        .bind(&row.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Customer", row.id));
        }

        tracing::info!(customer_id = %row.id, "Customer updated");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let row: Option<CustomerModel> = sqlx::query_as(
            r#"
            SELECT id, name, street, number, zip, city, active, reward_points
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_domain(),
            None => Err(RepositoryError::not_found("Customer", id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows: Vec<CustomerModel> = sqlx::query_as(
            "SELECT id, name, street, number, zip, city, active, reward_points FROM customers",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Loaded customers");
        rows.into_iter().map(CustomerModel::into_domain).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
