use std::env;

use chrono::Local;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use employee_admin::api::{AppState, create_router};
use employee_admin::config::ConfigLoader;
use employee_admin::error::AppResult;

const CONFIG_DIR_VAR: &str = "EMPLOYEE_ADMIN_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Environment variables may also be set externally.
    dotenv().ok();

    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .inspect_err(|e| error!(config_dir = %config_dir, error = %e, "Failed to load configuration"))?;
    let bind_address = config.config().server().bind_address.clone();
    info!(
        config_dir = %config_dir,
        app = %config.config().metadata().name,
        "Starting server"
    );

    let state = AppState::seeded(config, Local::now().date_naive())?;
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .inspect_err(|e| error!(bind_address = %bind_address, error = %e, "Failed to bind"))?;
    info!(bind_address = %bind_address, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
