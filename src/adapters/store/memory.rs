use crate::domain::model::CustomerOrder;
use crate::domain::ports::OrderStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-local store. Orders are kept in insertion order and lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<CustomerOrder>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.lock().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_orders(&self) -> Result<Vec<CustomerOrder>> {
        Ok(self.orders.lock().await.clone())
    }

    async fn insert_order(&self, order: &CustomerOrder) -> Result<()> {
        self.orders.lock().await.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(name: &str, items: &[&str], total: f64) -> CustomerOrder {
        CustomerOrder {
            name: name.to_string(),
            phone: "123".to_string(),
            ordered_items: items.iter().map(|s| s.to_string()).collect(),
            total_amount: total,
        }
    }

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let store = InMemoryOrderStore::new();
        let alice = order("Alice", &["Pizza", "Soda"], 170.0);

        store.insert_order(&alice).await.unwrap();

        assert_eq!(store.list_orders().await.unwrap(), vec![alice]);
    }

    #[tokio::test]
    async fn test_lists_in_insertion_order() {
        let store = InMemoryOrderStore::new();
        store.insert_order(&order("A", &["Soup"], 35.0)).await.unwrap();
        store.insert_order(&order("B", &["Fries"], 30.0)).await.unwrap();
        store.insert_order(&order("A", &["Soup"], 35.0)).await.unwrap();

        let names: Vec<_> = store
            .list_orders()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert_eq!(store.len().await, 3);
    }
}
