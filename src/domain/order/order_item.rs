use serde::Serialize;

use super::errors::OrderError;

// ============================================================================
// Order Item - child entity, owned exclusively by its Order
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, OrderError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.trim().is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(OrderError::EmptyItemName);
        }
        if self.product_id.trim().is_empty() {
            return Err(OrderError::EmptyProductId);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(OrderError::InvalidPrice(self.price));
        }
        if self.quantity <= 0 {
            return Err(OrderError::InvalidQuantity(self.quantity));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// price × quantity
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Sum of item totals. An empty slice totals 0.
pub fn items_total(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::total).sum()
}

// ============================================================================
// Unit Tests
// ============================================================================
