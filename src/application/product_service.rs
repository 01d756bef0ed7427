use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::product::{Product, ProductCreated, ProductFactory, ProductRepository};
use crate::domain::CheckoutEvent;
use crate::event_dispatch::{EventDispatcher, EventEnvelope};

pub struct ProductAppService {
    repository: Arc<dyn ProductRepository>,
    dispatcher: Arc<EventDispatcher<CheckoutEvent>>,
}

impl ProductAppService {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        dispatcher: Arc<EventDispatcher<CheckoutEvent>>,
    ) -> Self {
        Self { repository, dispatcher }
    }

    /// Persist a new product, then announce it with `ProductCreated`.
    pub async fn create_product(&self, name: &str, price: f64) -> Result<Product> {
        let product = ProductFactory::create(name, price)?;

        self.repository
            .create(&product)
            .await
            .with_context(|| format!("Failed to store product {}", product.id()))?;

        let event = EventEnvelope::new(CheckoutEvent::from(ProductCreated::from_product(&product)));
        self.dispatcher.notify(&event)?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::db::test_support::memory_pool;
    use crate::db::SqliteProductRepository;
    use crate::domain::{EventKind, Repository};
    use crate::event_dispatch::EventHandler;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl EventHandler<CheckoutEvent> for Counter {
        fn handle(&self, _event: &EventEnvelope<CheckoutEvent>) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_product_persists_and_notifies() {
        let counter = Arc::new(Counter::default());
        let mut dispatcher: EventDispatcher<CheckoutEvent> = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, counter.clone());
        let repository = Arc::new(SqliteProductRepository::new(memory_pool().await));
        let service = ProductAppService::new(repository.clone(), Arc::new(dispatcher));

        let product = service.create_product("Product 1", 10.0).await.unwrap();

        assert_eq!(repository.find(product.id()).await.unwrap(), product);
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_negative_price_never_reaches_storage() {
        let counter = Arc::new(Counter::default());
        let mut dispatcher: EventDispatcher<CheckoutEvent> = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, counter.clone());
        let repository = Arc::new(SqliteProductRepository::new(memory_pool().await));
        let service = ProductAppService::new(repository.clone(), Arc::new(dispatcher));

        assert!(service.create_product("Product 1", -10.0).await.is_err());

        assert!(repository.find_all().await.unwrap().is_empty());
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }
}
