//! HTTP API for the registration service.

mod handlers;
mod types;

pub use handlers::*;
pub use types::*;

use crate::store::RegistrationStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Sheet-backed registration store
    pub store: Arc<RegistrationStore>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: RegistrationStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/register", post(handlers::register))
        .route("/api/registrations", get(handlers::list_registrations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
