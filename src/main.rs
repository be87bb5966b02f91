use anyhow::Context;
use clap::Parser;
use restaurant_orders::utils::error::ErrorSeverity;
use restaurant_orders::utils::{logger, validation::Validate};
use restaurant_orders::{
    open_store, serve, AppState, CliConfig, ConfigProvider, MenuCatalog, OrderError,
    OrderService, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            run(config).await
        }
        None => run(cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if config.log_json() {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("🚀 Starting restaurant-orders");

    if let Err(e) = config.validate() {
        exit_with(&e, "Configuration validation failed");
    }

    let catalog = MenuCatalog::from_configured(config.menu_items());
    tracing::info!("📋 Menu loaded with {} items", catalog.len());

    let store = match open_store(&config).await {
        Ok(store) => store,
        Err(e) => exit_with(&e, "Failed to open order store"),
    };

    let service = OrderService::new(store.order_store(), catalog, config.store_timeout());
    tracing::info!(
        "🗄️ Order store: {} (timeout {:?})",
        service.backend_tag(),
        config.store_timeout()
    );

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    let result = serve(listener, AppState::new(service)).await;
    store.close().await;

    if let Err(e) = result {
        exit_with(&e, "Server stopped with an error");
    }

    Ok(())
}

fn exit_with(e: &OrderError, context: &str) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
