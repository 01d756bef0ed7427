use serde::Serialize;
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer postal address. Compared by content; has no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.trim().is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if self.number == 0 {
            return Err(CustomerError::MissingNumber);
        }
        if self.zip.trim().is_empty() {
            return Err(CustomerError::EmptyZip);
        }
        if self.city.trim().is_empty() {
            return Err(CustomerError::EmptyCity);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_renders_all_parts() {
        let address = Address::new("Street 1", 123, "11300-000", "São Paulo").unwrap();

        assert_eq!(address.to_string(), "Street 1, 123, 11300-000 São Paulo");
    }

    #[test]
    fn test_addresses_compare_by_content() {
        let a = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        let b = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        let c = Address::new("Street 2", 1, "Zipcode 1", "City 1").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_address_requires_every_field() {
        assert_eq!(Address::new("", 1, "z", "c"), Err(CustomerError::EmptyStreet));
        assert_eq!(Address::new("s", 0, "z", "c"), Err(CustomerError::MissingNumber));
        assert_eq!(Address::new("s", 1, " ", "c"), Err(CustomerError::EmptyZip));
        assert_eq!(Address::new("s", 1, "z", ""), Err(CustomerError::EmptyCity));
    }
}
