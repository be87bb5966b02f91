//! # MongoDB
//!
//! Orders live in one collection (default `restaurant.customers`), one document
//! per order:
//!
//! - `name`: string
//! - `phone`: string
//! - `orderedItems`: array of strings, exactly as submitted
//! - `totalAmount`: double
//!
//! The driver's `Client` pools connections internally, so a single
//! [`MongoOrderStore`] is created at startup and shared by every request.
use std::time::Duration;

use async_trait::async_trait;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::domain::model::CustomerOrder;
use crate::domain::ports::OrderStore;
use crate::utils::error::{OrderError, Result};

const APP_NAME: &str = "restaurant-orders";

#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MongoOrderStore {
    client: Client,
    orders: Collection<CustomerOrder>,
}

impl MongoOrderStore {
    /// Connects and pings the server. Any failure here is a startup error.
    pub async fn connect(settings: &MongoSettings) -> Result<Self> {
        let mut options = ClientOptions::parse(settings.uri.as_str())
            .await
            .map_err(|e| OrderError::StoreConnectionError {
                message: format!("invalid MongoDB URI: {}", e),
            })?;
        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(settings.timeout);
        options.server_selection_timeout = Some(settings.timeout);

        let client = Client::with_options(options).map_err(|e| OrderError::StoreConnectionError {
            message: e.to_string(),
        })?;

        let database = client.database(&settings.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| OrderError::StoreConnectionError {
                message: format!("ping failed: {}", e),
            })?;

        tracing::info!(
            "✅ Connected to MongoDB ({}.{})",
            settings.database,
            settings.collection
        );

        Ok(Self {
            orders: database.collection(&settings.collection),
            client,
        })
    }

    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client closed");
    }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    fn backend_tag(&self) -> &'static str {
        "mongo"
    }

    async fn list_orders(&self) -> Result<Vec<CustomerOrder>> {
        let unavailable = |e: mongodb::error::Error| OrderError::StoreUnavailableError {
            message: e.to_string(),
        };

        let mut cursor = self.orders.find(doc! {}).await.map_err(unavailable)?;

        let mut orders = Vec::new();
        while cursor.advance().await.map_err(unavailable)? {
            orders.push(cursor.deserialize_current().map_err(unavailable)?);
        }
        Ok(orders)
    }

    async fn insert_order(&self, order: &CustomerOrder) -> Result<()> {
        self.orders
            .insert_one(order)
            .await
            .map_err(|e| OrderError::PersistenceError {
                message: e.to_string(),
            })?;
        Ok(())
    }
}
