use crate::{AuthError, AuthResult};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Claims carried in the token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Role tags granted to the subject
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Decode the payload segment of a three-segment dot-delimited token.
///
/// Only the payload is inspected. Signature and expiry validation belong to
/// the services that issued the token; this side merely needs the identity.
#[track_caller]
pub fn decode_claims(token: &str) -> AuthResult<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AuthError::malformed_token(segments.len()));
    }

    // Issuers emit unpadded base64url; tolerate padded variants too.
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(AuthError::payload_encoding)?;

    serde_json::from_slice(&bytes).map_err(AuthError::payload_json)
}
