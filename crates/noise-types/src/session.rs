//! Session credential types

use crate::user::{LoginResponse, UserProfile};
use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized user-identity record
pub const USER_KEY: &str = "user";

/// The token / user pair identifying a logged-in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCredential {
    pub token: Option<String>,
    pub user: UserProfile,
}

impl SessionCredential {
    pub fn new(user: UserProfile, token: Option<String>) -> Self {
        Self { token, user }
    }
}

impl From<LoginResponse> for SessionCredential {
    fn from(response: LoginResponse) -> Self {
        Self::new(response.user, response.token)
    }
}
