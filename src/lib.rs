pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{build_router, serve, AppState};
pub use adapters::store::{memory::InMemoryOrderStore, open_store, StoreHandle};
pub use config::toml_config::TomlConfig;
pub use core::{catalog::MenuCatalog, orders::OrderService};
pub use domain::model::{CustomerOrder, MenuItem, OrderForm};
pub use domain::ports::{ConfigProvider, OrderStore, StoreBackend};
pub use utils::error::{OrderError, Result};
