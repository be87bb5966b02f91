// Adapters layer: concrete implementations for external systems (storage, http).

pub mod http;
pub mod store;
