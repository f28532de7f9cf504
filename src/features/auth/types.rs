//! Request and response types for the account API. Payloads carry credentials
//! and verification tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Account profile as returned by the API. The client keeps a read-mostly
/// cached copy inside the session; the backend owns the data.
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub is_admin: bool,
    pub locked: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub captcha_id: String,
    pub captcha_solution: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub username: String,
    pub captcha_id: String,
    pub captcha_solution: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    pub username: String,
    pub token: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TotpSetupResponse {
    pub qr_code_data_uri: String,
    pub secret_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TotpCodeRequest {
    pub totp_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_round_trip() {
        let profile = UserProfile {
            id: 7,
            username: "THRALL".to_string(),
            email: "thrall@orgrimmar.example".to_string(),
            email_verified: true,
            is_admin: false,
            locked: false,
        };

        let json = serde_json::to_string(&profile).expect("Failed to serialize");
        assert!(json.contains("THRALL"));
        assert!(json.contains("email_verified"));

        let deserialized: UserProfile = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn test_profile_accepts_backend_shape() {
        let json = r#"{
            "id": 12,
            "username": "JAINA",
            "email": "jaina@theramore.example",
            "email_verified": false,
            "is_admin": true,
            "locked": false
        }"#;

        let profile: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(profile.is_admin);
        assert!(!profile.email_verified);
    }
}
