use uuid::Uuid;

use super::entity::Product;
use super::errors::ProductError;

/// Builds products with freshly generated ids.
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(name: impl Into<String>, price: f64) -> Result<Product, ProductError> {
        Product::new(Uuid::new_v4().to_string(), name, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product() {
        let product = ProductFactory::create("Product A", 1.0).unwrap();

        assert!(Uuid::parse_str(product.id()).is_ok());
        assert_eq!(product.name(), "Product A");
        assert_eq!(product.price(), 1.0);
    }

    #[test]
    fn test_create_propagates_validation() {
        assert_eq!(
            ProductFactory::create("Product A", -1.0),
            Err(ProductError::InvalidPrice(-1.0))
        );
    }
}
