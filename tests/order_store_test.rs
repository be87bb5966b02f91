use anyhow::Result;
use restaurant_orders::adapters::store::mongo::{MongoOrderStore, MongoSettings};
use restaurant_orders::{CustomerOrder, InMemoryOrderStore, OrderError, OrderStore};
use std::time::Duration;

fn alice() -> CustomerOrder {
    CustomerOrder {
        name: "Alice".to_string(),
        phone: "123".to_string(),
        ordered_items: vec!["Pizza".to_string(), "Soda".to_string()],
        total_amount: 170.0,
    }
}

async fn assert_round_trip(store: &dyn OrderStore) -> Result<()> {
    let before = store.list_orders().await?.len();

    store.insert_order(&alice()).await?;

    let orders = store.list_orders().await?;
    assert_eq!(orders.len(), before + 1);
    assert!(orders.contains(&alice()));
    Ok(())
}

#[tokio::test]
async fn test_memory_store_round_trip() -> Result<()> {
    assert_round_trip(&InMemoryOrderStore::new()).await
}

#[tokio::test]
async fn test_mongo_connect_failure_is_connection_error() {
    let settings = MongoSettings {
        uri: "mongodb://127.0.0.1:1".to_string(),
        database: "restaurant_test".to_string(),
        collection: "customers".to_string(),
        timeout: Duration::from_millis(200),
    };

    let result = MongoOrderStore::connect(&settings).await;
    assert!(matches!(
        result,
        Err(OrderError::StoreConnectionError { .. })
    ));
}

/// Needs a running MongoDB:
/// `RESTAURANT_TEST_MONGO_URI=mongodb://localhost:27017 cargo test -- --ignored`
#[tokio::test]
#[ignore]
async fn test_mongo_store_round_trip() -> Result<()> {
    let uri = std::env::var("RESTAURANT_TEST_MONGO_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let settings = MongoSettings {
        uri,
        database: "restaurant_test".to_string(),
        collection: format!("customers_{}", std::process::id()),
        timeout: Duration::from_secs(5),
    };

    let store = MongoOrderStore::connect(&settings).await?;
    assert_round_trip(&store).await?;
    store.shutdown().await;
    Ok(())
}
