pub mod memory;
pub mod mongo;

use std::sync::Arc;

use crate::domain::ports::{ConfigProvider, OrderStore, StoreBackend};
use crate::utils::error::Result;

use memory::InMemoryOrderStore;
use mongo::{MongoOrderStore, MongoSettings};

/// The store chosen at startup, kept concrete so it can be closed on shutdown.
pub enum StoreHandle {
    Mongo(Arc<MongoOrderStore>),
    Memory(Arc<InMemoryOrderStore>),
}

impl StoreHandle {
    pub fn order_store(&self) -> Arc<dyn OrderStore> {
        match self {
            StoreHandle::Mongo(store) => store.clone(),
            StoreHandle::Memory(store) => store.clone(),
        }
    }

    pub async fn close(&self) {
        if let StoreHandle::Mongo(store) = self {
            store.shutdown().await;
        }
    }
}

pub async fn open_store<C: ConfigProvider>(config: &C) -> Result<StoreHandle> {
    tracing::info!("Opening {} order store", config.store_backend());

    match config.store_backend() {
        StoreBackend::Mongo => {
            let settings = MongoSettings {
                uri: config.mongo_uri().to_string(),
                database: config.database().to_string(),
                collection: config.collection().to_string(),
                timeout: config.store_timeout(),
            };
            let store = MongoOrderStore::connect(&settings).await?;
            Ok(StoreHandle::Mongo(Arc::new(store)))
        }
        StoreBackend::Memory => {
            tracing::warn!("⚠️ Using in-memory order store; orders are lost on exit");
            Ok(StoreHandle::Memory(Arc::new(InMemoryOrderStore::new())))
        }
    }
}
