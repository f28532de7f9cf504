//! Best-effort decoding of the bearer token payload. The token is opaque to
//! the client; the payload is read only to display the session expiry. A
//! token that does not decode simply has no payload.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub exp: Option<u64>,
}

/// Decodes the claims segment of a JWT-shaped token. Returns `None` for
/// anything that is not three dot-separated base64url segments with a JSON
/// object in the middle.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Human-readable expiry for the dashboard, when the token carries one.
pub fn expiry_label(claims: &TokenClaims) -> Option<String> {
    claims.exp.map(format_epoch_seconds)
}

#[cfg(target_arch = "wasm32")]
fn format_epoch_seconds(epoch: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch as f64 * 1000.0));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
fn format_epoch_seconds(epoch: u64) -> String {
    format!("epoch {epoch}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let segment = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("eyJhbGciOiJIUzI1NiJ9.{segment}.c2ln")
    }

    #[test]
    fn decodes_subject_and_expiry() {
        let token = token_with_payload(r#"{"sub":"ARTHAS","exp":1767225600}"#);
        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.sub.as_deref(), Some("ARTHAS"));
        assert_eq!(claims.exp, Some(1767225600));
    }

    #[test]
    fn missing_expiry_is_not_an_error() {
        let token = token_with_payload(r#"{"sub":"ARTHAS"}"#);
        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.exp, None);
        assert_eq!(expiry_label(&claims), None);
    }

    #[test]
    fn malformed_tokens_yield_no_payload() {
        assert!(decode_claims("").is_none());
        assert!(decode_claims("not-a-token").is_none());
        assert!(decode_claims("a.!!!.c").is_none());
        let token = token_with_payload("not json");
        assert!(decode_claims(&token).is_none());
    }
}
