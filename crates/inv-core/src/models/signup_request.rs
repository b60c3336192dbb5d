use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Registration payload for the user service.
///
/// Empty `roles` lets the backend assign its default role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub roles: BTreeSet<String>,
}
