use uuid::Uuid;

use crate::domain::customer::Customer;
use super::aggregate::Order;
use super::errors::OrderError;
use super::order_item::OrderItem;

/// Sum of order totals. No orders totals 0.
pub fn total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::total).sum()
}

/// Open a new order for `customer` and award half its total as reward points.
pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyItems);
    }

    let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
    customer.add_reward_points(order.total() / 2.0)?;

    tracing::debug!(
        order_id = %order.id(),
        customer_id = %customer.id(),
        total = order.total(),
        "Placed order"
    );

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: i32) -> OrderItem {
        OrderItem::new(id, "Item", price, "p1", quantity).unwrap()
    }

    #[test]
    fn test_place_order_awards_reward_points() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        let order = place_order(&mut customer, vec![item("i1", 10.0, 1)]).unwrap();

        assert_eq!(customer.reward_points(), 5.0);
        assert_eq!(order.total(), 10.0);
        assert_eq!(order.customer_id(), "c1");
    }

    #[test]
    fn test_place_order_without_items_is_rejected() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        assert_eq!(place_order(&mut customer, vec![]), Err(OrderError::EmptyItems));
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn test_total_of_all_orders() {
        let order1 = Order::new("o1", "c1", vec![item("i1", 100.0, 1), item("i2", 200.0, 2)]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item("i3", 200.0, 2), item("i4", 400.0, 4)]).unwrap();

        assert_eq!(total(&[order1, order2]), 2500.0);
    }

    #[test]
    fn test_total_of_no_orders_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }
}
