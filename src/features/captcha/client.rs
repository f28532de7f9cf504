//! Client helper for the CAPTCHA endpoint.

use crate::{
    app_lib::{AppError, get_json},
    features::captcha::types::CaptchaChallenge,
};

/// Fetches a fresh challenge. Called on mount and whenever the previous
/// challenge was consumed by a rejected submission.
pub async fn fetch_challenge() -> Result<CaptchaChallenge, AppError> {
    get_json("/auth/captcha/generate", None).await
}
