use std::collections::BTreeSet;

use serde::Deserialize;

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Successful login response from the user service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub roles: BTreeSet<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}
