// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Entities and value objects
// - Events and handlers
// - Errors
// - Factory
// - Repository contract
// - Domain services
//
// This layer knows nothing about SQL. Persistence lives in src/db/.
//
// ============================================================================

pub mod customer;
pub mod events;
pub mod order;
pub mod product;
pub mod repository;

pub use events::{CheckoutEvent, EventKind};
pub use repository::{Repository, RepositoryError};
