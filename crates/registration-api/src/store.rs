//! Registration store backed by a Google Sheets spreadsheet.
//!
//! Column layout: A = name, B = normalized phone, C = registration
//! timestamp. The first row is a header and never takes part in duplicate
//! scans or listings.

use chrono::Utc;
use serde::Serialize;
use sheets_client::{SheetsClient, SheetsError};
use tracing::{info, instrument};

const PHONE_COLUMNS: &str = "B:B";
const ROW_COLUMNS: &str = "A:C";

/// A stored registration row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    /// Normalized 10-digit phone number
    pub phone: String,
    pub registered_at: String,
}

/// Client for the registrations sheet.
#[derive(Clone)]
pub struct RegistrationStore {
    sheets: SheetsClient,
    sheet_name: String,
}

impl RegistrationStore {
    pub fn new(sheets: SheetsClient, sheet_name: impl Into<String>) -> Self {
        Self {
            sheets,
            sheet_name: sheet_name.into(),
        }
    }

    fn range(&self, columns: &str) -> String {
        format!("{}!{}", self.sheet_name, columns)
    }

    /// Whether the phone number is already registered.
    ///
    /// Full scan of the phone column. The table stays small enough that one
    /// range read per submission is acceptable; stored values are normalized
    /// again on the way in so legacy rows in any prefix style still match.
    #[instrument(skip(self, phone))]
    pub async fn check_duplicate(&self, phone: &str) -> Result<bool, SheetsError> {
        let rows = self.sheets.values_get(&self.range(PHONE_COLUMNS)).await?;
        let normalized = normalize_phone(phone);

        Ok(rows.iter().skip(1).any(|row| {
            row.first()
                .map(|existing| normalize_phone(existing) == normalized)
                .unwrap_or(false)
        }))
    }

    /// Append a registration row and return the stored record.
    ///
    /// Does not re-check for duplicates; callers sequence `check_duplicate`
    /// before this.
    #[instrument(skip(self, name, phone))]
    pub async fn add_registration(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Registration, SheetsError> {
        let normalized = normalize_phone(phone);
        let registered_at = Utc::now().to_rfc3339();

        self.sheets
            .values_append(
                &self.range(ROW_COLUMNS),
                vec![name.to_string(), normalized.clone(), registered_at.clone()],
            )
            .await?;

        info!(phone = %normalized, "Registration stored");

        Ok(Registration {
            name: name.to_string(),
            phone: normalized,
            registered_at,
        })
    }

    /// All stored registrations, header row excluded.
    #[instrument(skip(self))]
    pub async fn list_registrations(&self) -> Result<Vec<Registration>, SheetsError> {
        let rows = self.sheets.values_get(&self.range(ROW_COLUMNS)).await?;

        Ok(rows
            .into_iter()
            .skip(1)
            .map(|row| {
                let mut cells = row.into_iter();
                Registration {
                    name: cells.next().unwrap_or_default(),
                    phone: cells.next().unwrap_or_default(),
                    registered_at: cells.next().unwrap_or_default(),
                }
            })
            .collect())
    }
}

/// Normalize a phone number to its canonical 10-digit local form.
///
/// Strips spaces, dashes and parentheses, then exactly one recognized
/// country prefix (+90, 0090, leading 0). Already-normalized numbers pass
/// through unchanged.
pub fn normalize_phone(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    if let Some(rest) = cleaned.strip_prefix("+90") {
        rest.to_string()
    } else if let Some(rest) = cleaned.strip_prefix("0090") {
        rest.to_string()
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        rest.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix_variants_agree() {
        let canonical = normalize_phone("5551234567");
        assert_eq!(canonical, "5551234567");

        for variant in [
            "05551234567",
            "+905551234567",
            "00905551234567",
            "+90 555 123 45 67",
            "0555-123-45-67",
            "(0090) 555 123 45 67",
        ] {
            assert_eq!(normalize_phone(variant), canonical, "variant {}", variant);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for phone in ["+90 555 123 45 67", "05551234567", "5551234567"] {
            let once = normalize_phone(phone);
            assert_eq!(normalize_phone(&once), once);
        }
    }

    #[test]
    fn test_normalize_strips_only_one_prefix() {
        // A second 0 after the country prefix belongs to the number
        assert_eq!(normalize_phone("00905551234567"), "5551234567");
        assert_eq!(normalize_phone("0090 0555"), "0555");
    }
}
