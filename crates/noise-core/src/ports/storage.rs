//! Session storage port

use crate::Result;
use noise_types::{SessionCredential, UserProfile};

/// Client-side key-value storage for the session credential
///
/// Implementations hold two string entries, `token` and `user`, the way a
/// browser's local storage does. `set` and `clear` must update both entries
/// under a single lock so readers never observe half a credential.
pub trait SessionStore: Send + Sync {
    /// Stored bearer token, if any
    fn token(&self) -> Result<Option<String>>;

    /// Stored user-identity record as raw JSON, if any
    fn user(&self) -> Result<Option<String>>;

    /// Persist a credential. A credential without a token removes any stale one.
    fn set(&self, credential: &SessionCredential) -> Result<()>;

    /// Remove both entries
    fn clear(&self) -> Result<()>;

    /// Parsed user-identity record
    fn profile(&self) -> Result<Option<UserProfile>> {
        match self.user()? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Full credential; present only when a user record is stored
    fn credential(&self) -> Result<Option<SessionCredential>> {
        let Some(user) = self.profile()? else {
            return Ok(None);
        };
        let token = self.token()?.filter(|t| !t.is_empty());
        Ok(Some(SessionCredential::new(user, token)))
    }
}
