use super::entity::{validate_price, Product};
use super::errors::ProductError;

/// Raise every product's price by `percentage` percent.
///
/// Every new price is computed and validated before any is assigned, so
/// either every price changes or none do.
pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
    if !percentage.is_finite() || percentage < -100.0 {
        return Err(ProductError::InvalidPercentage(percentage));
    }

    let new_prices = products
        .iter()
        .map(|product| {
            let price = product.price() * percentage / 100.0 + product.price();
            validate_price(price).map(|_| price)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (product, price) in products.iter_mut().zip(new_prices) {
        product.change_price(price)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", 10.0).unwrap(),
            Product::new("p2", "Product 2", 20.0).unwrap(),
        ];

        increase_price(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }

    #[test]
    fn test_increase_price_rejects_invalid_percentage() {
        let mut products = vec![Product::new("p1", "Product 1", 10.0).unwrap()];

        assert!(increase_price(&mut products, f64::INFINITY).is_err());
        assert!(increase_price(&mut products, -150.0).is_err());
        assert_eq!(products[0].price(), 10.0);
    }

    #[test]
    fn test_increase_price_overflow_leaves_every_price_unchanged() {
        let mut products = vec![
            Product::new("p1", "Product 1", 10.0).unwrap(),
            Product::new("p2", "Product 2", f64::MAX / 2.0).unwrap(),
        ];

        let err = increase_price(&mut products, 300.0).unwrap_err();

        assert!(matches!(err, ProductError::InvalidPrice(p) if p.is_infinite()));
        assert_eq!(products[0].price(), 10.0);
        assert_eq!(products[1].price(), f64::MAX / 2.0);
    }

    #[test]
    fn test_increase_price_of_empty_catalog() {
        assert!(increase_price(&mut [], 10.0).is_ok());
    }
}
