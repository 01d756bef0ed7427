use uuid::Uuid;

use super::entity::Customer;
use super::errors::CustomerError;
use super::value_objects::Address;

/// Builds customers with freshly generated ids.
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(name: impl Into<String>) -> Result<Customer, CustomerError> {
        Customer::new(Uuid::new_v4().to_string(), name)
    }

    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, CustomerError> {
        let mut customer = Self::create(name)?;
        customer.change_address(address);
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customer() {
        let customer = CustomerFactory::create("John").unwrap();

        assert!(Uuid::parse_str(customer.id()).is_ok());
        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
    }

    #[test]
    fn test_create_customer_with_address() {
        let address = Address::new("Street", 1, "13123-123", "São Paulo").unwrap();

        let customer = CustomerFactory::create_with_address("John", address.clone()).unwrap();

        assert_eq!(customer.name(), "John");
        assert_eq!(customer.address(), Some(&address));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = CustomerFactory::create("A").unwrap();
        let b = CustomerFactory::create("B").unwrap();

        assert_ne!(a.id(), b.id());
    }
}
