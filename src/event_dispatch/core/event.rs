use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

// ============================================================================
// Domain Event Trait
// ============================================================================

/// A union of every event an application can dispatch.
///
/// `Kind` is the discriminator handlers are registered against. It replaces
/// name-based lookup: one variant per event type.
pub trait DomainEvent: Clone + fmt::Debug + Send + Sync + 'static {
    type Kind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;
}

// ============================================================================
// Event Envelope
// ============================================================================

/// Wraps an event payload with the metadata every event carries.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EventEnvelope<E> {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub event_data: E,
}

impl<E: DomainEvent> EventEnvelope<E> {
    pub fn new(event_data: E) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            event_data,
        }
    }

    pub fn kind(&self) -> E::Kind {
        self.event_data.kind()
    }
}

impl<E: Serialize> EventEnvelope<E> {
    /// JSON rendering of the payload only, for log lines.
    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.event_data)
    }
}

// ============================================================================
// Tests
// ============================================================================
