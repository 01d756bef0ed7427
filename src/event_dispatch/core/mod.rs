// ============================================================================
// Event Dispatch Core - Generic Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Customer, Product, Order)
// - Events are a typed union; handlers are keyed by the union's kind
//
// ============================================================================

pub mod event;
pub mod handler;

pub use event::{DomainEvent, EventEnvelope};
pub use handler::EventHandler;
