pub mod toml_config;

use crate::core::{ConfigProvider, MenuItem, StoreBackend};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "restaurant";
pub const DEFAULT_COLLECTION: &str = "customers";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;
pub const MAX_STORE_TIMEOUT_MS: u64 = 300_000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-orders")]
#[command(about = "Restaurant order-taking web service")]
pub struct CliConfig {
    /// Load settings from a TOML file instead of the flags below
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Order store backend: mongo or memory
    #[arg(long, default_value = "mongo")]
    pub store: StoreBackend,

    #[arg(long, default_value = DEFAULT_MONGO_URI)]
    pub mongo_uri: String,

    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub database: String,

    #[arg(long, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Upper bound for every store call, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STORE_TIMEOUT_MS)]
    pub store_timeout_ms: u64,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bind_host(&self) -> &str {
        &self.bind
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn store_backend(&self) -> StoreBackend {
        self.store
    }

    fn mongo_uri(&self) -> &str {
        &self.mongo_uri
    }

    fn database(&self) -> &str {
        &self.database
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    fn menu_items(&self) -> Vec<MenuItem> {
        Vec::new()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_json(&self) -> bool {
        self.log_json
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_common(self)
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_common<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_non_empty_string("bind", config.bind_host())?;
    validation::validate_positive_number("port", config.port() as usize, 1)?;
    validation::validate_range(
        "store_timeout_ms",
        config.store_timeout().as_millis() as u64,
        1,
        MAX_STORE_TIMEOUT_MS,
    )?;

    if config.store_backend() == StoreBackend::Mongo {
        validation::validate_mongo_uri("mongo_uri", config.mongo_uri())?;
        validation::validate_non_empty_string("database", config.database())?;
        validation::validate_non_empty_string("collection", config.collection())?;
    }

    let menu = config.menu_items();
    for item in &menu {
        validation::validate_non_empty_string("menu.name", &item.name)?;
        validation::validate_price(&format!("menu.{}.price", item.name), item.price)?;
    }
    validation::validate_unique_names("menu.name", menu.iter().map(|item| item.name.as_str()))?;

    Ok(())
}
