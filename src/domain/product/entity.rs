use serde::Serialize;

use super::errors::ProductError;

// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        validate_price(self.price)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

pub(super) fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new("123", "Product 1", 100.0).unwrap();

        assert_eq!(product.id(), "123");
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn test_invalid_products_are_rejected() {
        assert_eq!(Product::new("", "Product 1", 100.0), Err(ProductError::EmptyId));
        assert_eq!(Product::new("123", "", 100.0), Err(ProductError::EmptyName));
        assert_eq!(Product::new("123", "Product 1", -1.0), Err(ProductError::InvalidPrice(-1.0)));
        assert!(Product::new("123", "Product 1", f64::NAN).is_err());
    }

    #[test]
    fn test_free_product_is_allowed() {
        assert!(Product::new("123", "Sample", 0.0).is_ok());
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(150.0).unwrap();

        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), 150.0);
    }

    #[test]
    fn test_rejected_change_keeps_previous_state() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        assert!(product.change_price(-5.0).is_err());
        assert!(product.change_name(" ").is_err());

        assert_eq!(product.price(), 100.0);
        assert_eq!(product.name(), "Product 1");
    }
}
