use serde::Serialize;

use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    /// New customers start inactive, without an address and with no points.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) -> Result<(), CustomerError> {
        if !points.is_finite() || points < 0.0 {
            return Err(CustomerError::InvalidRewardPoints(points));
        }
        self.reward_points += points;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap()
    }

    #[test]
    fn test_new_customer_defaults() {
        let customer = Customer::new("123", "John").unwrap();

        assert_eq!(customer.id(), "123");
        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
        assert!(!customer.is_active());
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn test_empty_id_is_rejected() {
        assert_eq!(Customer::new("", "John"), Err(CustomerError::EmptyId));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(Customer::new("123", ""), Err(CustomerError::EmptyName));
    }

    #[test]
    fn test_change_name() {
        let mut customer = Customer::new("123", "John").unwrap();

        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");

        assert_eq!(customer.change_name(""), Err(CustomerError::EmptyName));
        assert_eq!(customer.name(), "Jane");
    }

    #[test]
    fn test_activate_requires_address() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        assert_eq!(customer.activate(), Err(CustomerError::AddressRequired));
        assert!(!customer.is_active());

        customer.change_address(address());
        customer.activate().unwrap();
        assert!(customer.is_active());
    }

    #[test]
    fn test_deactivate() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(address());
        customer.activate().unwrap();

        customer.deactivate();

        assert!(!customer.is_active());
    }

    #[test]
    fn test_add_reward_points_accumulates() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        customer.add_reward_points(10.0).unwrap();
        customer.add_reward_points(10.0).unwrap();

        assert_eq!(customer.reward_points(), 20.0);
        assert!(customer.add_reward_points(-1.0).is_err());
        assert_eq!(customer.reward_points(), 20.0);
    }
}
