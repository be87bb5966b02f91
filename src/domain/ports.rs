use crate::domain::model::{CustomerOrder, MenuItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Persistence for customer orders. One handle is shared by every request.
#[async_trait]
pub trait OrderStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// All orders in whatever order the backend yields them.
    async fn list_orders(&self) -> Result<Vec<CustomerOrder>>;

    async fn insert_order(&self, order: &CustomerOrder) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}' (expected mongo or memory)", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Mongo => f.write_str("mongo"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bind_host(&self) -> &str;
    fn port(&self) -> u16;
    fn store_backend(&self) -> StoreBackend;
    fn mongo_uri(&self) -> &str;
    fn database(&self) -> &str;
    fn collection(&self) -> &str;
    fn store_timeout(&self) -> Duration;
    /// Catalog entries to serve; empty means the built-in menu.
    fn menu_items(&self) -> Vec<MenuItem>;
    fn verbose(&self) -> bool;
    fn log_json(&self) -> bool;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host(), self.port())
    }
}
