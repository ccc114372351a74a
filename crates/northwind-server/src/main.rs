//! # Northwind Server
//!
//! Main entry point for the Northwind API.

use northwind_config::ConfigLoader;
use northwind_core::NorthwindResult;
use northwind_server::{
    app::AppBuilder,
    startup::{print_startup_info, shutdown_signal},
    telemetry::init_logging,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    info!("Starting Northwind API server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: northwind_config::AppConfig) -> NorthwindResult<()> {
    print_startup_info(&config);

    let app = AppBuilder::new().with_config(config).build().await?;
    app.serve(shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}
