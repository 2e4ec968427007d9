//! API request and response types.

use crate::store::Registration;
use serde::{Deserialize, Serialize};

/// Tournament signup submission.
///
/// `website` is the honeypot field: hidden on the form and left empty by
/// real users. All fields default to empty strings so a missing field
/// produces the validator's message rather than a deserialization reject.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub website: String,
}

/// Uniform response body for the signup endpoint.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// List of stored registrations.
#[derive(Debug, Serialize)]
pub struct RegistrationsResponse {
    pub registrations: Vec<Registration>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
