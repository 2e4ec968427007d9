//! Error types for the registration service.

use crate::api::RegisterResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sheets_client::SheetsError;
use thiserror::Error;
use tracing::error;

/// Registration request errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("name is required")]
    NameRequired,

    #[error("phone number is required")]
    PhoneRequired,

    #[error("not a valid Turkish mobile number")]
    InvalidPhone,

    #[error("phone number is already registered")]
    AlreadyRegistered,

    #[error("sheets error: {0}")]
    Sheets(#[from] SheetsError),
}

impl ApiError {
    /// User-facing message, localized for the Turkish signup form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NameRequired => "İsim gerekli",
            ApiError::PhoneRequired => "Telefon numarası gerekli",
            ApiError::InvalidPhone => "Geçerli bir telefon numarası girin",
            ApiError::AlreadyRegistered => "Bu telefon numarası zaten turnuvaya kayıtlı",
            ApiError::Sheets(_) => "Bir hata oluştu. Lütfen tekrar deneyin.",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NameRequired | ApiError::PhoneRequired | ApiError::InvalidPhone => {
                StatusCode::BAD_REQUEST
            }
            ApiError::AlreadyRegistered => StatusCode::CONFLICT,
            ApiError::Sheets(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Remote failures are logged with detail; the client only ever sees
        // the generic localized message
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Registration request failed");
        }

        let body = RegisterResponse {
            success: false,
            message: self.user_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
