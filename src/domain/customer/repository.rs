use crate::domain::repository::Repository;
use super::entity::Customer;

/// Persistence contract for customers.
pub trait CustomerRepository: Repository<Customer> {}

impl<T: Repository<Customer>> CustomerRepository for T {}
