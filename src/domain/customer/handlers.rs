use anyhow::bail;

use crate::domain::events::CheckoutEvent;
use crate::event_dispatch::{EventEnvelope, EventHandler};

// ============================================================================
// Customer Event Handlers
// ============================================================================

pub struct LogFirstWhenCustomerIsCreated;

impl EventHandler<CheckoutEvent> for LogFirstWhenCustomerIsCreated {
    fn handle(&self, event: &EventEnvelope<CheckoutEvent>) -> anyhow::Result<()> {
        let CheckoutEvent::CustomerCreated(created) = &event.event_data else {
            bail!("expected CustomerCreated, got {:?}", event.kind());
        };

        tracing::info!(
            customer_id = %created.customer_id,
            occurred_at = %event.occurred_at,
            "This is the first log of the event: CustomerCreated"
        );
        Ok(())
    }
}

pub struct LogSecondWhenCustomerIsCreated;

impl EventHandler<CheckoutEvent> for LogSecondWhenCustomerIsCreated {
    fn handle(&self, event: &EventEnvelope<CheckoutEvent>) -> anyhow::Result<()> {
        let CheckoutEvent::CustomerCreated(created) = &event.event_data else {
            bail!("expected CustomerCreated, got {:?}", event.kind());
        };

        tracing::info!(
            customer_id = %created.customer_id,
            occurred_at = %event.occurred_at,
            "This is the second log of the event: CustomerCreated"
        );
        Ok(())
    }
}

pub struct LogWhenAddressIsChanged;

impl EventHandler<CheckoutEvent> for LogWhenAddressIsChanged {
    fn handle(&self, event: &EventEnvelope<CheckoutEvent>) -> anyhow::Result<()> {
        let CheckoutEvent::AddressChanged(changed) = &event.event_data else {
            bail!("expected AddressChanged, got {:?}", event.kind());
        };

        tracing::info!(
            "Customer address: {}, {} changed to: {}",
            changed.customer_id,
            changed.customer_name,
            changed.new_address
        );
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
