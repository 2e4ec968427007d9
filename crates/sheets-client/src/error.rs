//! Sheets client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication rejected by the Sheets API")]
    Unauthorized,

    #[error("Sheets API quota exceeded")]
    QuotaExceeded,

    #[error("Sheets API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid service account key: {0}")]
    InvalidKey(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),
}
