// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// - OrderItem (child entity owned by its order)
// - Order aggregate with total calculation
// - Errors (OrderError enum)
// - Factory, repository contract and domain service
//
// ============================================================================

pub mod aggregate;
pub mod errors;
pub mod factory;
pub mod order_item;
pub mod repository;
pub mod service;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;
pub use factory::*;
pub use order_item::*;
pub use repository::*;
