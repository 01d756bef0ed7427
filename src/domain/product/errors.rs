// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Price must not be negative: {0}")]
    InvalidPrice(f64),

    #[error("Invalid percentage: {0}")]
    InvalidPercentage(f64),
}
