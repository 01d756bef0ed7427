// ============================================================================
// Product Domain - Business Logic for the Product Entity
// ============================================================================

pub mod entity;
pub mod errors;
pub mod events;
pub mod factory;
pub mod handlers;
pub mod repository;
pub mod service;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use events::*;
pub use factory::*;
pub use handlers::*;
pub use repository::*;
