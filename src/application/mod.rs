// ============================================================================
// Application Services
// ============================================================================
//
// Orchestrates: Entity → Repository → Event Dispatcher
//
// Persistence and notification run one after the other. A handler failure
// does not undo a write that already succeeded.
//
// ============================================================================

pub mod customer_service;
pub mod product_service;

pub use customer_service::CustomerAppService;
pub use product_service::ProductAppService;
