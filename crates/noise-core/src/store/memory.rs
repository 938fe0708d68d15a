//! In-memory session store (stands in for browser local storage)

use crate::error::{CoreError, Result};
use crate::ports::SessionStore;
use noise_types::{SessionCredential, TOKEN_KEY, USER_KEY};
use std::collections::HashMap;
use std::sync::RwLock;

/// Simple in-memory key-value store
#[derive(Default)]
pub struct MemorySessionStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a credential
    pub fn with_credential(credential: &SessionCredential) -> Result<Self> {
        let store = Self::new();
        store.set(credential)?;
        Ok(store)
    }

    /// Get a raw entry
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(key).cloned())
    }

    /// Set a raw entry
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Delete a raw entry
    pub fn remove_item(&self, key: &str) -> Result<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.remove(key);
        Ok(())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>> {
        self.get_item(TOKEN_KEY)
    }

    fn user(&self) -> Result<Option<String>> {
        self.get_item(USER_KEY)
    }

    fn set(&self, credential: &SessionCredential) -> Result<()> {
        let user = serde_json::to_string(&credential.user)?;
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(USER_KEY.to_string(), user);
        match &credential.token {
            Some(token) => data.insert(TOKEN_KEY.to_string(), token.clone()),
            None => data.remove(TOKEN_KEY),
        };
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.remove(TOKEN_KEY);
        data.remove(USER_KEY);
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CoreError {
    CoreError::Storage("session store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise_types::{UserProfile, UserRole};

    fn user() -> UserProfile {
        UserProfile {
            user_id: 1,
            username: "admin".to_string(),
            role: UserRole::Admin,
            email: None,
            phone: None,
            responsible_regions: Vec::new(),
            created_at: None,
            last_login: None,
        }
    }

    #[test]
    fn test_basic_operations() {
        let store = MemorySessionStore::new();

        store.set_item("key1", "value").unwrap();
        assert_eq!(store.get_item("key1").unwrap().as_deref(), Some("value"));

        assert_eq!(store.get_item("nonexistent").unwrap(), None);

        store.remove_item("key1").unwrap();
        assert_eq!(store.get_item("key1").unwrap(), None);
    }

    #[test]
    fn test_set_and_clear_credential() {
        let credential = SessionCredential::new(user(), Some("abc".to_string()));
        let store = MemorySessionStore::with_credential(&credential).unwrap();

        assert_eq!(store.token().unwrap().as_deref(), Some("abc"));
        assert_eq!(store.credential().unwrap(), Some(credential));

        store.clear().unwrap();
        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.user().unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_without_token_drops_stale_token() {
        let store = MemorySessionStore::new();
        store.set_item(TOKEN_KEY, "stale").unwrap();

        store.set(&SessionCredential::new(user(), None)).unwrap();

        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.profile().unwrap().map(|u| u.username), Some("admin".to_string()));
    }

    #[test]
    fn test_clear_leaves_unrelated_entries() {
        let store = MemorySessionStore::new();
        store.set_item("theme", "dark").unwrap();
        store.set(&SessionCredential::new(user(), Some("t".to_string()))).unwrap();

        store.clear().unwrap();

        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
    }
}
