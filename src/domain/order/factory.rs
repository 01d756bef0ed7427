use uuid::Uuid;

use super::aggregate::Order;
use super::errors::OrderError;
use super::order_item::OrderItem;

/// Raw input for building an order item.
#[derive(Debug, Clone)]
pub struct OrderItemProps {
    pub id: String,
    pub name: String,
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

/// Raw input for building an order.
#[derive(Debug, Clone)]
pub struct OrderProps {
    pub id: String,
    pub customer_id: String,
    pub items: Vec<OrderItemProps>,
}

pub struct OrderFactory;

impl OrderFactory {
    pub fn create(props: OrderProps) -> Result<Order, OrderError> {
        let items = props
            .items
            .into_iter()
            .map(|item| OrderItem::new(item.id, item.name, item.price, item.product_id, item.quantity))
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(props.id, props.customer_id, items)
    }

    /// Same as [`OrderFactory::create`] with a generated order id.
    pub fn create_for_customer(
        customer_id: impl Into<String>,
        items: Vec<OrderItemProps>,
    ) -> Result<Order, OrderError> {
        Self::create(OrderProps {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_props() -> OrderItemProps {
        OrderItemProps {
            id: Uuid::new_v4().to_string(),
            name: "Product 1".to_string(),
            product_id: Uuid::new_v4().to_string(),
            quantity: 1,
            price: 100.0,
        }
    }

    #[test]
    fn test_create_order() {
        let props = OrderProps {
            id: Uuid::new_v4().to_string(),
            customer_id: Uuid::new_v4().to_string(),
            items: vec![item_props()],
        };

        let order = OrderFactory::create(props.clone()).unwrap();

        assert_eq!(order.id(), props.id);
        assert_eq!(order.customer_id(), props.customer_id);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), 100.0);
    }

    #[test]
    fn test_create_rejects_invalid_item() {
        let mut bad = item_props();
        bad.quantity = 0;

        let result = OrderFactory::create_for_customer("c1", vec![item_props(), bad]);

        assert_eq!(result, Err(OrderError::InvalidQuantity(0)));
    }

    #[test]
    fn test_create_for_customer_generates_id() {
        let order = OrderFactory::create_for_customer("c1", vec![item_props()]).unwrap();

        assert!(Uuid::parse_str(order.id()).is_ok());
    }
}
