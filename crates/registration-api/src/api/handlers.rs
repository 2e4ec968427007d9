//! HTTP request handlers.

use super::types::{HealthResponse, RegisterRequest, RegisterResponse, RegistrationsResponse};
use super::AppState;
use crate::error::ApiError;
use crate::validate::{screen, Submission};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

const SUCCESS_MESSAGE: &str = "Turnuvaya başarıyla kaydoldunuz!";

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handle a signup submission.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (name, phone) = match screen(&request)? {
        Submission::Bot => {
            // Respond exactly like a real signup so the bot learns nothing
            info!("Honeypot field filled, discarding submission");
            return Ok(success_response());
        }
        Submission::Registration { name, phone } => (name, phone),
    };

    if state.store.check_duplicate(&phone).await? {
        info!(phone = %phone, "Duplicate registration rejected");
        return Err(ApiError::AlreadyRegistered);
    }

    let registration = state.store.add_registration(&name, &phone).await?;
    info!(phone = %registration.phone, "Registration accepted");

    Ok(success_response())
}

/// List all stored registrations.
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<RegistrationsResponse>, ApiError> {
    let registrations = state.store.list_registrations().await?;
    let total = registrations.len();

    Ok(Json(RegistrationsResponse {
        registrations,
        total,
    }))
}

fn success_response() -> (StatusCode, Json<RegisterResponse>) {
    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }),
    )
}
