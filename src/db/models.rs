use crate::domain::customer::{Address, Customer};
use crate::domain::order::{Order, OrderItem};
use crate::domain::product::Product;
use crate::domain::RepositoryError;

// ============================================================================
// Persistence Models - one struct per table row
// ============================================================================
//
// Rows are converted back through the domain constructors, so a row that
// violates an entity invariant surfaces as RepositoryError::Corrupt instead
// of producing an invalid entity.
//
// ============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerModel {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i64>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: f64,
}

impl From<&Customer> for CustomerModel {
    fn from(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(|a| i64::from(a.number())),
            zip: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }
}

impl CustomerModel {
    pub fn into_domain(self) -> Result<Customer, RepositoryError> {
        let corrupt = |reason: &dyn std::fmt::Display| RepositoryError::corrupt("Customer", &self.id, reason);

        let mut customer = Customer::new(self.id.clone(), self.name.clone()).map_err(|e| corrupt(&e))?;

        match (&self.street, self.number, &self.zip, &self.city) {
            (Some(street), Some(number), Some(zip), Some(city)) => {
                let number = u32::try_from(number).map_err(|e| corrupt(&e))?;
                let address = Address::new(street.clone(), number, zip.clone(), city.clone())
                    .map_err(|e| corrupt(&e))?;
                customer.change_address(address);
            }
            (None, None, None, None) => {}
            _ => return Err(corrupt(&"address is partially stored")),
        }

        if self.active {
            customer.activate().map_err(|e| corrupt(&e))?;
        }
        customer
            .add_reward_points(self.reward_points)
            .map_err(|e| corrupt(&e))?;

        Ok(customer)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

impl ProductModel {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Product::new(self.id.clone(), self.name, self.price)
            .map_err(|e| RepositoryError::corrupt("Product", self.id, e))
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderModel {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
}

impl From<&Order> for OrderModel {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
        }
    }
}

impl OrderModel {
    /// Items are rebuilt first; the Order constructor derives the total from
    /// them.
    pub fn into_domain(self, items: Vec<OrderItemModel>) -> Result<Order, RepositoryError> {
        let items = items
            .into_iter()
            .map(OrderItemModel::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(self.id.clone(), self.customer_id, items)
            .map_err(|e| RepositoryError::corrupt("Order", self.id, e))
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderItemModel {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl OrderItemModel {
    pub fn from_item(order_id: &str, item: &OrderItem) -> Self {
        Self {
            id: item.id().to_string(),
            order_id: order_id.to_string(),
            product_id: item.product_id().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            quantity: item.quantity(),
        }
    }

    pub fn into_domain(self) -> Result<OrderItem, RepositoryError> {
        OrderItem::new(self.id.clone(), self.name, self.price, self.product_id, self.quantity)
            .map_err(|e| RepositoryError::corrupt("OrderItem", self.id, e))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_row() -> CustomerModel {
        CustomerModel {
            id: "c1".into(),
            name: "Customer 1".into(),
            street: Some("Street 1".into()),
            number: Some(1),
            zip: Some("Zipcode 1".into()),
            city: Some("City 1".into()),
            active: true,
            reward_points: 7.5,
        }
    }

    #[test]
    fn test_customer_row_round_trips_through_domain() {
        let customer = customer_row().into_domain().unwrap();

        assert!(customer.is_active());
        assert_eq!(customer.reward_points(), 7.5);
        assert_eq!(customer.address().unwrap().to_string(), "Street 1, 1, Zipcode 1 City 1");

        let row = CustomerModel::from(&customer);
        assert_eq!(row.number, Some(1));
        assert!(row.active);
    }

    #[test]
    fn test_partial_address_is_corrupt() {
        let mut row = customer_row();
        row.city = None;

        let err = row.into_domain().unwrap_err();
        assert!(matches!(err, RepositoryError::Corrupt { entity: "Customer", .. }));
    }

    #[test]
    fn test_active_customer_without_address_is_corrupt() {
        let row = CustomerModel {
            street: None,
            number: None,
            zip: None,
            city: None,
            ..customer_row()
        };

        assert!(row.into_domain().is_err());
    }

    #[test]
    fn test_order_row_without_items_is_corrupt() {
        let row = OrderModel {
            id: "o1".into(),
            customer_id: "c1".into(),
            total: 0.0,
        };

        let err = row.into_domain(vec![]).unwrap_err();
        assert!(err.to_string().contains("Items are required"));
    }

    #[test]
    fn test_invalid_item_row_is_corrupt() {
        let row = OrderItemModel {
            id: "i1".into(),
            order_id: "o1".into(),
            product_id: "p1".into(),
            name: "Item".into(),
            price: 1.0,
            quantity: 0,
        };

        assert!(matches!(
            row.into_domain(),
            Err(RepositoryError::Corrupt { entity: "OrderItem", .. })
        ));
    }
}
