use crate::error::Result;
use crate::gateway::Gateway;
use noise_types::LoginRequest;
use serde::Serialize;
use serde_json::Value;

/// Credential exchange endpoint; a 401 here means bad credentials
pub const LOGIN_ENDPOINT: &str = "/auth/login";

/// `/auth`
pub struct AuthApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Value> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.gateway.post(LOGIN_ENDPOINT, &body).await
    }

    pub async fn register<B: Serialize + ?Sized>(&self, payload: &B) -> Result<Value> {
        self.gateway.post("/auth/register", payload).await
    }
}
