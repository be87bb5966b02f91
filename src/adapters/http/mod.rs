//! # HTTP surface
//!
//! Two routes and nothing else:
//!
//! - `GET /` renders the menu, every stored order and the order form.
//! - `POST /add-customer` takes the form, stores the order and answers
//!   `303 See Other` back to `/`.
//!
//! Store failures become 5xx responses; the process keeps serving.
pub mod error;
pub mod handlers;
pub mod render;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::orders::OrderService;
use crate::utils::error::Result;

use handlers::{add_customer_handler, listing_handler};

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self {
            orders: Arc::new(orders),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(listing_handler))
        .route("/add-customer", post(add_customer_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    info!("🚀 Server running on http://{}", address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
