//! HTTP server for the tip pool engine.
//!
//! Usage: `tip-pool-engine [CONFIG_DIR]` (defaults to `./config`).

use std::process::ExitCode;

use tip_pool_engine::api::{AppState, create_router};
use tip_pool_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "./config".to_string());

    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&loader.logging().filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bind_address = loader.config().bind_address();
    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %bind_address, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(address = %bind_address, "Tip pool engine listening");
    let router = create_router(AppState::new(loader));
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
