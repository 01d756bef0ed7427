use serde::{Deserialize, Serialize};

use super::entity::Product;

/// A product was added to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: String,
    pub name: String,
    pub price: f64,
}

impl ProductCreated {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}
