use anyhow::bail;

use crate::domain::events::CheckoutEvent;
use crate::event_dispatch::{EventEnvelope, EventHandler};

pub struct SendEmailWhenProductIsCreated;

impl EventHandler<CheckoutEvent> for SendEmailWhenProductIsCreated {
    fn handle(&self, event: &EventEnvelope<CheckoutEvent>) -> anyhow::Result<()> {
        let CheckoutEvent::ProductCreated(created) = &event.event_data else {
            bail!("expected ProductCreated, got {:?}", event.kind());
        };

        tracing::info!(
            product_id = %created.product_id,
            name = %created.name,
            price = created.price,
            "Sending email to ....."
        );
        Ok(())
    }
}
