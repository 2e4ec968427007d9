//! Tournament registration service.
//!
//! Accepts signup submissions over HTTP and records them in a Google
//! Sheets-backed store:
//! - Honeypot screening silently discards bot submissions
//! - Phone numbers are normalized to a canonical 10-digit local form
//! - Duplicate numbers are rejected before the row is appended

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod validate;

pub use config::Config;
pub use error::ApiError;
pub use store::{normalize_phone, Registration, RegistrationStore};
