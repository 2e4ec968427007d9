//! Sheets values API client.

use crate::auth::{ServiceAccountKey, TokenProvider};
use crate::error::SheetsError;
use crate::types::{AppendRequest, ValueRange};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for the values endpoints of a single spreadsheet.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    tokens: TokenProvider,
    base_url: String,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Create a new client bound to one spreadsheet.
    pub fn new(
        key: ServiceAccountKey,
        spreadsheet_id: impl Into<String>,
        base_url: impl Into<String>,
        token_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder().timeout(timeout).build()?;
        let tokens = TokenProvider::new(client.clone(), token_url, key);

        Ok(Self {
            client,
            tokens,
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
        })
    }

    /// Read all cell values in a range (A1 notation, e.g. `Sheet1!B:B`).
    ///
    /// An empty range yields an empty vec rather than an error.
    #[instrument(skip(self))]
    pub async fn values_get(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let token = self.tokens.bearer_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            self.spreadsheet_id,
            encode(range)
        );

        debug!(url = %url, "Reading range");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token.expose_secret()))
            .send()
            .await?;

        let value_range: ValueRange = self.handle_response(response).await?;
        Ok(value_range.values)
    }

    /// Append one row after the last row of data in the range.
    #[instrument(skip(self, row))]
    pub async fn values_append(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        let token = self.tokens.bearer_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.base_url,
            self.spreadsheet_id,
            encode(range)
        );

        debug!(url = %url, "Appending row");

        let response = self
            .client
            .post(&url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .header("Authorization", format!("Bearer {}", token.expose_secret()))
            .json(&AppendRequest { values: vec![row] })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, SheetsError> {
        if response.status().is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(SheetsError::from)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract error information from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> SheetsError {
        let status = response.status();

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Sheets API quota exceeded");
                SheetsError::QuotaExceeded
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("Sheets API rejected credentials");
                SheetsError::Unauthorized
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into());
                SheetsError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
