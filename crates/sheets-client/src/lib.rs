//! Google Sheets v4 values client with service-account authentication.

mod auth;
mod client;
mod error;
mod types;

pub use auth::{normalize_private_key, ServiceAccountKey};
pub use client::SheetsClient;
pub use error::SheetsError;
pub use types::*;
