use serde::{Deserialize, Serialize};

use super::entity::Customer;
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// A customer was registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub customer_id: String,
    pub name: String,
}

impl CustomerCreated {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id().to_string(),
            name: customer.name().to_string(),
        }
    }
}

/// A customer's address was replaced. `new_address` is the rendered address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressChanged {
    pub customer_id: String,
    pub customer_name: String,
    pub new_address: String,
}

impl AddressChanged {
    pub fn new(customer: &Customer, address: &Address) -> Self {
        Self {
            customer_id: customer.id().to_string(),
            customer_name: customer.name().to_string(),
            new_address: address.to_string(),
        }
    }
}
