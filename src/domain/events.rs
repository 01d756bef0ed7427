use serde::{Deserialize, Serialize};

use crate::event_dispatch::DomainEvent;
use super::customer::{AddressChanged, CustomerCreated};
use super::product::ProductCreated;

// ============================================================================
// Checkout Events - Union of every dispatchable domain event
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CustomerCreated,
    AddressChanged,
    ProductCreated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CheckoutEvent {
    CustomerCreated(CustomerCreated),
    AddressChanged(AddressChanged),
    ProductCreated(ProductCreated),
}

impl DomainEvent for CheckoutEvent {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        match self {
            CheckoutEvent::CustomerCreated(_) => EventKind::CustomerCreated,
            CheckoutEvent::AddressChanged(_) => EventKind::AddressChanged,
            CheckoutEvent::ProductCreated(_) => EventKind::ProductCreated,
        }
    }
}

impl From<CustomerCreated> for CheckoutEvent {
    fn from(event: CustomerCreated) -> Self {
        CheckoutEvent::CustomerCreated(event)
    }
}

impl From<AddressChanged> for CheckoutEvent {
    fn from(event: AddressChanged) -> Self {
        CheckoutEvent::AddressChanged(event)
    }
}

impl From<ProductCreated> for CheckoutEvent {
    fn from(event: ProductCreated) -> Self {
        CheckoutEvent::ProductCreated(event)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_dispatch::EventEnvelope;

    #[test]
    fn test_kind_matches_variant() {
        let created: CheckoutEvent = CustomerCreated {
            customer_id: "c1".into(),
            name: "Customer 1".into(),
        }
        .into();
        let changed: CheckoutEvent = AddressChanged {
            customer_id: "c1".into(),
            customer_name: "Customer 1".into(),
            new_address: "Street 1, 123, 11300-000 São Paulo".into(),
        }
        .into();

        assert_eq!(created.kind(), EventKind::CustomerCreated);
        assert_eq!(changed.kind(), EventKind::AddressChanged);
    }

    #[test]
    fn test_event_payload_serializes_with_type_tag() {
        let envelope = EventEnvelope::new(CheckoutEvent::from(ProductCreated {
            product_id: "p1".into(),
            name: "Product 1".into(),
            price: 10.0,
        }));

        let json = envelope.data_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "ProductCreated");
        assert_eq!(value["data"]["name"], "Product 1");

        let back: CheckoutEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, envelope.event_data);
    }
}
