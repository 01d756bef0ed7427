// ============================================================================
// Event Dispatch Infrastructure
// ============================================================================
//
// Generic, in-process observer machinery.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any event union)
mod core;
mod dispatcher;

pub use self::core::*;
pub use self::dispatcher::*;
