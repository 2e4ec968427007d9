//! Submission screening and validation.

use crate::api::RegisterRequest;
use crate::error::ApiError;
use tracing::warn;

/// Outcome of screening a raw submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A legitimate-looking registration with trimmed fields.
    Registration { name: String, phone: String },
    /// The honeypot field was filled; discard silently.
    Bot,
}

/// Screen a raw submission.
///
/// The honeypot check runs first so bots get the success path without any
/// store access. Then name and phone must be non-blank and the phone must
/// look like a Turkish mobile number.
pub fn screen(request: &RegisterRequest) -> Result<Submission, ApiError> {
    if !request.website.is_empty() {
        return Ok(Submission::Bot);
    }

    let name = request.name.trim();
    if name.is_empty() {
        warn!("Submission rejected: blank name");
        return Err(ApiError::NameRequired);
    }

    let phone = request.phone.trim();
    if phone.is_empty() {
        warn!("Submission rejected: blank phone number");
        return Err(ApiError::PhoneRequired);
    }

    if !is_turkish_mobile(phone) {
        warn!(phone = %phone, "Submission rejected: not a Turkish mobile number");
        return Err(ApiError::InvalidPhone);
    }

    Ok(Submission::Registration {
        name: name.to_string(),
        phone: phone.to_string(),
    })
}

/// Turkish mobile number check: an optional +90, 0090 or leading-0 prefix
/// followed by ten digits starting with 5. Only spaces and dashes are
/// tolerated as separators here; normalization is the store's concern.
fn is_turkish_mobile(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let local = if let Some(rest) = cleaned.strip_prefix("+90") {
        rest
    } else if let Some(rest) = cleaned.strip_prefix("0090") {
        rest
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        rest
    } else {
        cleaned.as_str()
    };

    local.len() == 10 && local.starts_with('5') && local.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str, website: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            website: website.to_string(),
        }
    }

    #[test]
    fn test_honeypot_flags_bot() {
        let result = screen(&request("Ali", "5551234567", "http://spam.example"));
        assert_eq!(result.unwrap(), Submission::Bot);
    }

    #[test]
    fn test_honeypot_whitespace_still_flags_bot() {
        // Any non-empty value counts, even whitespace
        let result = screen(&request("Ali", "5551234567", " "));
        assert_eq!(result.unwrap(), Submission::Bot);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            screen(&request("", "5551234567", "")),
            Err(ApiError::NameRequired)
        ));
        assert!(matches!(
            screen(&request("   ", "5551234567", "")),
            Err(ApiError::NameRequired)
        ));
    }

    #[test]
    fn test_blank_phone_rejected() {
        assert!(matches!(
            screen(&request("Ali", "", "")),
            Err(ApiError::PhoneRequired)
        ));
        assert!(matches!(
            screen(&request("Ali", "  ", "")),
            Err(ApiError::PhoneRequired)
        ));
    }

    #[test]
    fn test_valid_phone_formats_accepted() {
        for phone in [
            "5551234567",
            "05551234567",
            "+905551234567",
            "00905551234567",
            "+90 555 123 45 67",
            "0555-123-45-67",
        ] {
            let result = screen(&request("Ali", phone, ""));
            assert!(
                matches!(result, Ok(Submission::Registration { .. })),
                "expected {} to validate",
                phone
            );
        }
    }

    #[test]
    fn test_invalid_phone_rejected() {
        for phone in [
            "1234567890",    // does not start with 5
            "555123456",     // too short
            "55512345678",   // too long
            "+1 555 123 45", // wrong country prefix
            "555123456a",    // non-digit
            "(555) 123 45 67", // parentheses are not valid input separators
        ] {
            assert!(
                matches!(screen(&request("Ali", phone, "")), Err(ApiError::InvalidPhone)),
                "expected {} to be rejected",
                phone
            );
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let result = screen(&request("  Ayşe Yılmaz  ", " 5551234567 ", "")).unwrap();
        assert_eq!(
            result,
            Submission::Registration {
                name: "Ayşe Yılmaz".to_string(),
                phone: "5551234567".to_string(),
            }
        );
    }
}
