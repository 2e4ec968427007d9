//! Tournament registration service - entry point.

use registration_api::{
    api::{create_router, AppState},
    config::Config,
    store::RegistrationStore,
};
use sheets_client::{ServiceAccountKey, SheetsClient};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration; missing credentials abort before we listen
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tournament registration service");

    // Parse the service account key (normalizes quoted/escaped key material)
    let key = match ServiceAccountKey::new(
        config.google.service_account_email.clone(),
        &config.google.private_key,
    ) {
        Ok(k) => k,
        Err(e) => {
            error!("Invalid service account key: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize the Sheets client
    let sheets = match SheetsClient::new(
        key,
        config.google.spreadsheet_id.clone(),
        config.google.api_url.clone(),
        config.google.token_url.clone(),
        config.google.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Sheets client: {}", e);
            std::process::exit(1);
        }
    };

    let store = RegistrationStore::new(sheets, config.google.sheet_name.clone());
    let state = AppState::new(store);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
