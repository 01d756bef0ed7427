use serde::Serialize;

use super::errors::OrderError;
use super::order_item::{items_total, OrderItem};

// ============================================================================
// Order Aggregate
// ============================================================================
//
// Invariants:
// 1. id and customer_id are non-empty
// 2. at least one item
// 3. total always equals the sum of the current items' totals
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
    total: f64,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        let customer_id = customer_id.into();

        if id.trim().is_empty() {
            return Err(OrderError::EmptyId);
        }
        if customer_id.trim().is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        validate_items(&items)?;

        let total = items_total(&items);
        Ok(Self {
            id,
            customer_id,
            items,
            total,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Replace the whole item set. The order is left untouched on error.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        validate_items(&items)?;
        self.total = items_total(&items);
        self.items = items;
        Ok(())
    }
}

fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyItems);
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
