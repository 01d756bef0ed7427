use crate::domain::repository::Repository;
use super::entity::Product;

/// Persistence contract for products.
pub trait ProductRepository: Repository<Product> {}

impl<T: Repository<Product>> ProductRepository for T {}
