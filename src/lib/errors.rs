//! Crate-wide error type for API calls and form handling. Callers distinguish
//! server rejections from transport failures by variant, not by a typed
//! hierarchy; server-supplied messages are displayed verbatim.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Caught client-side before any network call.
    Validation(String),
    Config(String),
    Network(String),
    Timeout(String),
    /// Non-success HTTP status with the decoded error body.
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

/// Distinguishes why a login was rejected over the second factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondFactorSignal {
    Required,
    Invalid,
}

// The backend returns no structured error codes, so CAPTCHA and second-factor
// rejections are recognized by message text. Matching lives here so routes
// never hardcode substrings.
const CAPTCHA_MARKERS: &[&str] = &["captcha"];
const SECOND_FACTOR_MARKERS: &[&str] = &["2fa", "two-factor", "totp", "second factor"];

impl AppError {
    /// Returns true for a server rejection that names the CAPTCHA, which
    /// invalidates the outstanding challenge.
    pub fn is_captcha_rejection(&self) -> bool {
        match self {
            AppError::Http { message, .. } => {
                let lowered = message.to_lowercase();
                CAPTCHA_MARKERS.iter().any(|marker| lowered.contains(marker))
            }
            _ => false,
        }
    }

    /// Detects a second-factor rejection on login and classifies it as a
    /// missing code or a wrong one.
    pub fn second_factor_signal(&self) -> Option<SecondFactorSignal> {
        let AppError::Http { message, .. } = self else {
            return None;
        };
        let lowered = message.to_lowercase();
        if !SECOND_FACTOR_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            return None;
        }
        if lowered.contains("invalid") || lowered.contains("incorrect") {
            Some(SecondFactorSignal::Invalid)
        } else {
            Some(SecondFactorSignal::Required)
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(message: &str) -> AppError {
        AppError::Http {
            status: 400,
            message: message.to_string(),
        }
    }

    #[test]
    fn captcha_rejection_matches_case_insensitively() {
        assert!(http("Invalid CAPTCHA solution.").is_captcha_rejection());
        assert!(http("captcha expired, request a new one").is_captcha_rejection());
        assert!(!http("Incorrect username or password").is_captcha_rejection());
    }

    #[test]
    fn captcha_rejection_ignores_non_http_errors() {
        assert!(!AppError::Network("captcha".to_string()).is_captcha_rejection());
        assert!(!AppError::Validation("captcha".to_string()).is_captcha_rejection());
    }

    #[test]
    fn second_factor_required_vs_invalid() {
        assert_eq!(
            http("2FA code required for this account").second_factor_signal(),
            Some(SecondFactorSignal::Required)
        );
        assert_eq!(
            http("Invalid TOTP code").second_factor_signal(),
            Some(SecondFactorSignal::Invalid)
        );
        assert_eq!(
            http("Incorrect two-factor code").second_factor_signal(),
            Some(SecondFactorSignal::Invalid)
        );
        assert_eq!(
            http("Incorrect username or password").second_factor_signal(),
            None
        );
    }

    #[test]
    fn validation_displays_bare_message() {
        let err = AppError::Validation("Passwords do not match.".to_string());
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn http_display_carries_status_and_message() {
        assert_eq!(
            http("Account locked.").to_string(),
            "Request failed (400): Account locked."
        );
    }
}
