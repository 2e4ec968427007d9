//! Wire types for the Sheets values API.

use serde::{Deserialize, Serialize};

/// Response body of `spreadsheets.values.get`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(rename = "majorDimension", default)]
    pub major_dimension: Option<String>,

    /// Row-major cell values. Absent when the range is empty.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Request body of `spreadsheets.values.append`.
#[derive(Debug, Serialize)]
pub struct AppendRequest {
    pub values: Vec<Vec<String>>,
}

/// OAuth token endpoint response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    #[serde(default)]
    pub token_type: Option<String>,
}
