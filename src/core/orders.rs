use crate::core::catalog::MenuCatalog;
use crate::domain::model::{split_ordered_items, CustomerOrder, OrderForm};
use crate::domain::ports::OrderStore;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::require_form_field;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Places and lists orders on top of an injected store.
///
/// Holds no per-request state; a single instance is shared by all handlers.
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    catalog: MenuCatalog,
    store_timeout: Duration,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, catalog: MenuCatalog, store_timeout: Duration) -> Self {
        Self {
            store,
            catalog,
            store_timeout,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn backend_tag(&self) -> &'static str {
        self.store.backend_tag()
    }

    pub async fn list_orders(&self) -> Result<Vec<CustomerOrder>> {
        let orders = self
            .bounded("list_orders", self.store.list_orders())
            .await?;
        tracing::debug!("Loaded {} orders from {}", orders.len(), self.backend_tag());
        Ok(orders)
    }

    /// Validates the form, prices it against the catalog and stores the order.
    pub async fn place_order(&self, form: OrderForm) -> Result<CustomerOrder> {
        let name = require_form_field("name", &form.name)?;
        let phone = require_form_field("phone", &form.phone)?;
        let raw_items = require_form_field("orderedItems", &form.ordered_items)?;

        let ordered_items = split_ordered_items(raw_items);
        let total_amount = self.catalog.compute_total(&ordered_items);

        let order = CustomerOrder {
            name: name.to_string(),
            phone: phone.to_string(),
            ordered_items,
            total_amount,
        };

        self.bounded("insert_order", self.store.insert_order(&order))
            .await?;

        tracing::info!(
            customer = %order.name,
            items = order.ordered_items.len(),
            total = order.total_amount,
            "🧾 Order placed"
        );
        Ok(order)
    }

    async fn bounded<T, F>(&self, operation: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    "⏱️ Store operation {} exceeded {:?}",
                    operation,
                    self.store_timeout
                );
                Err(OrderError::StoreTimeoutError {
                    operation: operation.to_string(),
                    timeout_ms: self.store_timeout.as_millis() as u64,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::memory::InMemoryOrderStore;
    use async_trait::async_trait;

    fn form(name: Option<&str>, phone: Option<&str>, items: Option<&str>) -> OrderForm {
        OrderForm {
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
            ordered_items: items.map(str::to_string),
        }
    }

    fn service(store: Arc<dyn OrderStore>) -> OrderService {
        OrderService::new(store, MenuCatalog::builtin(), Duration::from_secs(1))
    }

    struct StalledStore;

    #[async_trait]
    impl OrderStore for StalledStore {
        fn backend_tag(&self) -> &'static str {
            "stalled"
        }

        async fn list_orders(&self) -> Result<Vec<CustomerOrder>> {
            std::future::pending().await
        }

        async fn insert_order(&self, _order: &CustomerOrder) -> Result<()> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_place_order_prices_and_stores() {
        let store = Arc::new(InMemoryOrderStore::new());
        let service = service(store.clone());

        let order = service
            .place_order(form(Some("Alice"), Some("123"), Some("Pizza,Soda")))
            .await
            .unwrap();

        assert_eq!(order.ordered_items, vec!["Pizza", "Soda"]);
        assert_eq!(order.total_amount, 170.0);
        assert_eq!(store.list_orders().await.unwrap(), vec![order]);
    }

    #[tokio::test]
    async fn test_unknown_items_are_kept_verbatim() {
        let store = Arc::new(InMemoryOrderStore::new());
        let service = service(store.clone());

        let order = service
            .place_order(form(Some("Bob"), Some("555"), Some("Burger, Unknown")))
            .await
            .unwrap();

        assert_eq!(order.ordered_items, vec!["Burger", " Unknown"]);
        assert_eq!(order.total_amount, 50.0);
    }

    #[tokio::test]
    async fn test_missing_field_stores_nothing() {
        let store = Arc::new(InMemoryOrderStore::new());
        let service = service(store.clone());

        let err = service
            .place_order(form(None, Some("123"), Some("Burger")))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::MissingFieldError { ref field } if field == "name"));

        let err = service
            .place_order(form(Some("Alice"), Some("123"), None))
            .await
            .unwrap_err();
        assert!(
            matches!(err, OrderError::MissingFieldError { ref field } if field == "orderedItems")
        );

        assert!(store.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_orders_are_allowed() {
        let store = Arc::new(InMemoryOrderStore::new());
        let service = service(store.clone());

        for _ in 0..2 {
            service
                .place_order(form(Some("Alice"), Some("123"), Some("Coffee")))
                .await
                .unwrap();
        }

        assert_eq!(service.list_orders().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_store_calls_are_bounded() {
        let service = OrderService::new(
            Arc::new(StalledStore),
            MenuCatalog::builtin(),
            Duration::from_millis(20),
        );

        let err = service.list_orders().await.unwrap_err();
        assert!(matches!(err, OrderError::StoreTimeoutError { ref operation, timeout_ms: 20 } if operation == "list_orders"));

        let err = service
            .place_order(form(Some("Alice"), Some("123"), Some("Burger")))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::StoreTimeoutError { .. }));
    }
}
