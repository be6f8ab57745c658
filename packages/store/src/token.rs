//! Bearer-token expiry checking.
//!
//! The login token is a JWT whose payload segment carries an `exp` claim
//! in seconds since the Unix epoch. Only the expiry is inspected here; the
//! signature belongs to the backend. Any decode failure counts as expired
//! so a garbled token can never keep a session alive.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: f64,
}

/// Fail-closed expiry check: true for expired, malformed, or empty tokens.
pub fn is_token_expired(token: &str) -> bool {
    match expiry_of(token) {
        Some(exp) => now_secs() > exp,
        None => true,
    }
}

fn expiry_of(token: &str) -> Option<f64> {
    let payload = token.split('.').nth(1)?;
    let bytes = decode_segment(payload)?;
    match serde_json::from_slice::<Claims>(&bytes) {
        Ok(claims) => Some(claims.exp),
        Err(err) => {
            tracing::debug!("token payload rejected: {err}");
            None
        }
    }
}

/// JWT segments are unpadded base64url, but some issuers pad anyway.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .ok()
        .or_else(|| STANDARD.decode(segment).ok())
}

#[cfg(target_arch = "wasm32")]
fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[cfg(not(target_arch = "wasm32"))]
fn now_secs() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_exp(exp: i64) -> String {
        let payload = serde_json::json!({ "sub": "user-1", "exp": exp }).to_string();
        format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn future_expiry_is_live() {
        let token = token_with_exp(now_secs() as i64 + 3600);
        assert!(!is_token_expired(&token));
    }

    #[test]
    fn past_expiry_is_expired() {
        let token = token_with_exp(now_secs() as i64 - 60);
        assert!(is_token_expired(&token));
    }

    #[test]
    fn garbage_is_expired() {
        assert!(is_token_expired(""));
        assert!(is_token_expired("not-a-jwt"));
        assert!(is_token_expired("a.%%%.c"));
    }

    #[test]
    fn missing_exp_claim_is_expired() {
        let payload = serde_json::json!({ "sub": "user-1" }).to_string();
        let token = format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload));
        assert!(is_token_expired(&token));
    }

    #[test]
    fn padded_payload_still_decodes() {
        let payload = serde_json::json!({ "exp": now_secs() as i64 + 3600 }).to_string();
        let token = format!("hdr.{}.sig", STANDARD.encode(payload));
        assert!(!is_token_expired(&token));
    }
}
