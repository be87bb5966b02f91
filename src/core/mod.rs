pub mod catalog;
pub mod orders;

pub use crate::domain::model::{CustomerOrder, MenuItem, OrderForm};
pub use crate::domain::ports::{ConfigProvider, OrderStore, StoreBackend};
pub use crate::utils::error::Result;
