use crate::{AuthResult, Claims, decode_claims};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The current authenticated identity and its role set.
///
/// Owned by [`crate::SessionStore`]; everything else reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub subject: String,
    pub roles: BTreeSet<String>,
    pub raw_token: String,
}

impl Session {
    /// Derive a session from a raw token by decoding its payload.
    #[track_caller]
    pub fn from_token(raw_token: &str) -> AuthResult<Self> {
        let claims = decode_claims(raw_token)?;
        Ok(Self::from_claims(claims, raw_token.to_string()))
    }

    pub fn from_claims(claims: Claims, raw_token: String) -> Self {
        Self {
            subject: claims.sub,
            roles: claims.roles.into_iter().collect(),
            raw_token,
        }
    }

    /// Any-of role check: true if this session holds at least one of
    /// `required`.
    pub fn has_any_role<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().any(|role| self.roles.contains(role.as_ref()))
    }
}
