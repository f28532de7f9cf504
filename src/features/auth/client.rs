//! Client wrappers for the account auth endpoints. These helpers centralize
//! paths and token handling, keeping auth flows consistent and preventing
//! credential leakage into route code.

use crate::{
    app_lib::{AppError, get_json, post_empty, post_form, post_json},
    features::auth::types::{
        ChangePasswordRequest, MessageResponse, PasswordResetConfirmRequest, PasswordResetRequest,
        RegisterRequest, TokenResponse, TotpCodeRequest, TotpSetupResponse, UserProfile,
        VerifyEmailRequest,
    },
};

/// Exchanges credentials for a bearer token. The endpoint expects a
/// form-encoded body; the TOTP code rides along only when the user supplied
/// one.
pub async fn login_token(
    username: &str,
    password: &str,
    totp_code: Option<&str>,
) -> Result<TokenResponse, AppError> {
    let mut fields = vec![
        ("username", username.to_string()),
        ("password", password.to_string()),
    ];
    if let Some(code) = totp_code {
        fields.push(("totp_code", code.to_string()));
    }
    post_form("/auth/login/token", &fields).await
}

/// Creates a new account. The CAPTCHA solution is forwarded untouched; the
/// server validates it.
pub async fn register(request: &RegisterRequest) -> Result<UserProfile, AppError> {
    post_json("/auth/register", request, None).await
}

/// Fetches the profile for the account the token belongs to.
pub async fn fetch_current_user(token: &str) -> Result<UserProfile, AppError> {
    get_json("/auth/users/me", Some(token)).await
}

/// Changes the password for the authenticated account.
pub async fn change_password(
    request: &ChangePasswordRequest,
    token: &str,
) -> Result<UserProfile, AppError> {
    post_json("/auth/users/me/change-password", request, Some(token)).await
}

/// Confirms an email address from the token in the verification link.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<MessageResponse, AppError> {
    post_json("/auth/verify-email", request, None).await
}

/// Starts a password reset. The response message is display-only and does not
/// reveal whether the account exists.
pub async fn request_password_reset(
    request: &PasswordResetRequest,
) -> Result<MessageResponse, AppError> {
    post_json("/auth/password-reset/request", request, None).await
}

/// Completes a password reset with the token the user received.
pub async fn confirm_password_reset(
    request: &PasswordResetConfirmRequest,
) -> Result<MessageResponse, AppError> {
    post_json("/auth/password-reset/confirm", request, None).await
}

/// Provisions a TOTP secret for the authenticated account. The server returns
/// the QR code as a data URI plus the manual-entry secret.
pub async fn totp_setup(token: &str) -> Result<TotpSetupResponse, AppError> {
    post_empty("/auth/2fa/setup", Some(token)).await
}

/// Turns two-factor auth on after the user proves possession of the secret.
pub async fn totp_enable(request: &TotpCodeRequest, token: &str) -> Result<MessageResponse, AppError> {
    post_json("/auth/2fa/enable", request, Some(token)).await
}

/// Turns two-factor auth off; requires a current code.
pub async fn totp_disable(
    request: &TotpCodeRequest,
    token: &str,
) -> Result<MessageResponse, AppError> {
    post_json("/auth/2fa/disable", request, Some(token)).await
}
