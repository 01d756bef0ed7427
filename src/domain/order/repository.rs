use crate::domain::repository::Repository;
use super::aggregate::Order;

/// Persistence contract for orders and their items.
///
/// `update` replaces the stored item set with the order's current items.
pub trait OrderRepository: Repository<Order> {}

impl<T: Repository<Order>> OrderRepository for T {}
