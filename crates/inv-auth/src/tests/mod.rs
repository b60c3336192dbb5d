mod access;
mod session_store;

use crate::Claims;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mint a signed three-segment token the way the user service would.
pub(crate) fn mint_token(sub: &str, roles: &[&str]) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: Some(chrono::Utc::now().timestamp() + 3600),
        iat: Some(chrono::Utc::now().timestamp()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}
