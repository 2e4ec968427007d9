//! Common test utilities for integration tests.

use registration_api::api::AppState;
use registration_api::store::RegistrationStore;
use sheets_client::{ServiceAccountKey, SheetsClient};
use std::sync::OnceLock;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Paths the sheets client hits on the mock server, percent-encoded as sent
pub const PHONE_RANGE_PATH: &str = "/v4/spreadsheets/test-sheet/values/Sheet1%21B%3AB";
pub const ROW_RANGE_PATH: &str = "/v4/spreadsheets/test-sheet/values/Sheet1%21A%3AC";
pub const APPEND_PATH: &str = "/v4/spreadsheets/test-sheet/values/Sheet1%21A%3AC:append";

/// Throwaway RSA key, generated once per test binary.
pub fn test_private_key_pem() -> &'static str {
    static PEM: OnceLock<String> = OnceLock::new();
    PEM.get_or_init(|| {
        use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
        let key =
            rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("generate test key");
        key.to_pkcs1_pem(LineEnding::LF)
            .expect("encode test key")
            .to_string()
    })
}

/// App state wired against a mock Sheets backend.
pub fn test_state(mock_server: &MockServer) -> AppState {
    let key = ServiceAccountKey::new("svc@test.iam.gserviceaccount.com", test_private_key_pem())
        .expect("test key");
    let sheets = SheetsClient::new(
        key,
        "test-sheet",
        mock_server.uri(),
        format!("{}/token", mock_server.uri()),
        Duration::from_secs(5),
    )
    .expect("sheets client");

    AppState::new(RegistrationStore::new(sheets, "Sheet1"))
}

/// Mount the OAuth token endpoint.
pub async fn mount_token_endpoint(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .mount(mock_server)
        .await;
}

/// Mount a token endpoint that must never be called. Any store access on the
/// path under test would trip this expectation.
pub async fn mount_unreachable_store(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(0)
        .mount(mock_server)
        .await;
}
