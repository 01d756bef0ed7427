// ============================================================================
// Customer Domain - Business Logic for the Customer Entity
// ============================================================================
//
// - Value objects (Address)
// - Entity (Customer)
// - Events (CustomerCreated, AddressChanged) and their log handlers
// - Errors (CustomerError enum)
// - Factory and repository contract
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod events;
pub mod factory;
pub mod handlers;
pub mod repository;
pub mod value_objects;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use events::*;
pub use factory::*;
pub use handlers::*;
pub use repository::*;
pub use value_objects::*;
