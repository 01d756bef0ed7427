use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

use crate::domain::order::Order;
use crate::domain::{Repository, RepositoryError};
use super::models::{OrderItemModel, OrderModel};

// ============================================================================
// SQLite Order Repository
// ============================================================================
//
// The Order aggregate spans two tables: orders and order_items.
//
// Every write runs inside one transaction:
// - create: order row + all item rows
// - update: order row, then delete + reinsert of the item set
//
// A failure anywhere rolls the whole write back, so an order is never left
// with a partial or empty item set.
//
// ============================================================================

const SELECT_ITEMS_FOR_ORDER: &str = r#"
    SELECT id, order_id, product_id, name, price, quantity
    FROM order_items
    WHERE order_id = ?
    ORDER BY rowid
"#;

#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Insert the order's current items in aggregate order.
async fn insert_items(conn: &mut SqliteConnection, order: &Order) -> Result<(), sqlx::Error> {
    for item in order.items() {
        let row = OrderItemModel::from_item(order.id(), item);

        sqlx::query(
            r#"
            INSERT INTO order_items (id, order_id, product_id, name, price, quantity)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.order_id)
        .bind(&row.product_id)
        .bind(&row.name)
        .bind(row.price)
        .bind(row.quantity)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

#[async_trait]
impl Repository<Order> for SqliteOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        let row = OrderModel::from(order);
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(&row.id)
            .bind(&row.customer_id)
            .bind(row.total)
            .execute(&mut *tx)
            .await?;

        insert_items(&mut *tx, order).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %row.id,
            customer_id = %row.customer_id,
            item_count = order.items().len(),
            total = row.total,
            "✅ Order created"
        );
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), RepositoryError> {
        let row = OrderModel::from(order);
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(&row.customer_id)
            .bind(row.total)
            .bind(&row.id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(RepositoryError::not_found("Order", row.id));
        }

        let removed = sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(&row.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        insert_items(&mut *tx, order).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %row.id,
            removed_items = removed,
            item_count = order.items().len(),
            total = row.total,
            "Order items replaced"
        );
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let row: Option<OrderModel> =
            sqlx::query_as("SELECT id, customer_id, total FROM orders WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(row) = row else {
            tracing::debug!(order_id = %id, "Order not found");
            return Err(RepositoryError::not_found("Order", id));
        };

        let items: Vec<OrderItemModel> = sqlx::query_as(SELECT_ITEMS_FOR_ORDER)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        row.into_domain(items)
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderModel> = sqlx::query_as("SELECT id, customer_id, total FROM orders")
            .fetch_all(&self.pool)
            .await?;

        let item_rows: Vec<OrderItemModel> = sqlx::query_as(
            "SELECT id, order_id, product_id, name, price, quantity FROM order_items ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItemModel>> = HashMap::new();
        for item in item_rows {
            items_by_order.entry(item.order_id.clone()).or_default().push(item);
        }

        tracing::debug!(count = rows.len(), "Loaded orders");

        rows.into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                row.into_domain(items)
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
