// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Id is required")]
    EmptyId,

    #[error("CustomerId is required")]
    EmptyCustomerId,

    #[error("Items are required")]
    EmptyItems,

    #[error("Item name is required")]
    EmptyItemName,

    #[error("ProductId is required")]
    EmptyProductId,

    #[error("Quantity must be greater than 0: {0}")]
    InvalidQuantity(i32),

    #[error("Price must not be negative: {0}")]
    InvalidPrice(f64),

    #[error("Could not award reward points: {0}")]
    RewardPoints(#[from] crate::domain::customer::CustomerError),
}
