use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::customer::{Address, AddressChanged, Customer, CustomerCreated, CustomerFactory, CustomerRepository};
use crate::domain::CheckoutEvent;
use crate::event_dispatch::{EventDispatcher, EventEnvelope};

// ============================================================================
// Customer Application Service
// ============================================================================

pub struct CustomerAppService {
    repository: Arc<dyn CustomerRepository>,
    dispatcher: Arc<EventDispatcher<CheckoutEvent>>,
}

impl CustomerAppService {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        dispatcher: Arc<EventDispatcher<CheckoutEvent>>,
    ) -> Self {
        Self { repository, dispatcher }
    }

    /// Persist a new customer, then announce it with `CustomerCreated`.
    pub async fn register_customer(&self, name: &str, address: Option<Address>) -> Result<Customer> {
        let customer = match address {
            Some(address) => CustomerFactory::create_with_address(name, address)?,
            None => CustomerFactory::create(name)?,
        };

        self.repository
            .create(&customer)
            .await
            .with_context(|| format!("Failed to store customer {}", customer.id()))?;

        let event = EventEnvelope::new(CheckoutEvent::from(CustomerCreated::from_customer(&customer)));
        self.dispatcher.notify(&event)?;

        tracing::info!(customer_id = %customer.id(), event_id = %event.event_id, "Customer registered");
        Ok(customer)
    }

    /// Replace a stored customer's address, then announce it with
    /// `AddressChanged`.
    pub async fn change_address(&self, customer_id: &str, address: Address) -> Result<Customer> {
        let mut customer = self.repository.find(customer_id).await?;
        customer.change_address(address.clone());

        self.repository
            .update(&customer)
            .await
            .with_context(|| format!("Failed to update customer {}", customer_id))?;

        let event = EventEnvelope::new(CheckoutEvent::from(AddressChanged::new(&customer, &address)));
        self.dispatcher.notify(&event)?;

        Ok(customer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
