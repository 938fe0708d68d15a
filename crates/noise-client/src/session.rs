//! Session controller
//!
//! Owns the authentication transitions: storing the credential after login,
//! and clearing it (then forcing navigation to the login screen) on logout or
//! when the gateway reports an expired session.

use crate::api::LOGIN_ENDPOINT;
use crate::error::{ApiError, Result};
use crate::gateway::{Gateway, SessionEvent};
use noise_core::{Navigator, SessionStore, LOGIN_PATH};
use noise_types::{LoginResponse, SessionCredential, UserProfile};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct SessionController {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionController {
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Apply one session event. Returns `true` when the session was torn down.
    pub fn handle(&self, event: &SessionEvent) -> Result<bool> {
        match event {
            SessionEvent::Expired { method, url, path } => {
                if path == LOGIN_ENDPOINT {
                    debug!("Credentials rejected by {} {}, session untouched", method, url);
                    return Ok(false);
                }

                let current = self.navigator.current_path();
                if current == LOGIN_PATH {
                    debug!("Session expired on {} {} while on login, ignoring", method, url);
                    return Ok(false);
                }

                info!(
                    "Session expired ({} {}), leaving {} for login",
                    method, url, current
                );
                self.store.clear()?;
                self.navigator.redirect(LOGIN_PATH);
                Ok(true)
            }
        }
    }

    /// Consume session events one at a time until every gateway clone is dropped
    pub async fn run(self, mut events: broadcast::Receiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Err(e) = self.handle(&event) {
                        error!("Failed to handle session event {:?}: {}", event, e);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Session listener lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => {
                    debug!("Session event channel closed");
                    break;
                }
            }
        }
    }

    /// Authenticate against the backend and persist the returned credential
    pub async fn login(
        &self,
        gateway: &Gateway,
        username: &str,
        password: &str,
    ) -> Result<UserProfile> {
        let body = gateway.auth().login(username, password).await?;
        let response: LoginResponse =
            serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        let credential = SessionCredential::from(response);
        self.store.set(&credential)?;
        info!(
            "Logged in as {} ({})",
            credential.user.username, credential.user.role
        );

        Ok(credential.user)
    }

    /// Drop the credential and return to the login screen
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        info!("Logged out");
        self.navigator.redirect(LOGIN_PATH);
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<UserProfile>> {
        Ok(self.store.profile()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise_core::{MemorySessionStore, RouteTable, Router};
    use noise_types::{UserRole, TOKEN_KEY, USER_KEY};
    use std::sync::Mutex;

    /// Navigator that only records where it was sent
    struct RecordingNavigator {
        current: Mutex<String>,
        redirects: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn at(path: &str) -> Arc<Self> {
            Arc::new(Self {
                current: Mutex::new(path.to_string()),
                redirects: Mutex::new(Vec::new()),
            })
        }

        fn redirects(&self) -> Vec<String> {
            self.redirects.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> String {
            self.current.lock().unwrap().clone()
        }

        fn redirect(&self, path: &str) {
            *self.current.lock().unwrap() = path.to_string();
            self.redirects.lock().unwrap().push(path.to_string());
        }
    }

    fn signed_in_store() -> Arc<MemorySessionStore> {
        let user = UserProfile {
            user_id: 1,
            username: "admin".to_string(),
            role: UserRole::Admin,
            email: None,
            phone: None,
            responsible_regions: Vec::new(),
            created_at: None,
            last_login: None,
        };
        Arc::new(
            MemorySessionStore::with_credential(&SessionCredential::new(
                user,
                Some("stale".to_string()),
            ))
            .unwrap(),
        )
    }

    fn expired() -> SessionEvent {
        SessionEvent::Expired {
            method: "GET".to_string(),
            url: "http://localhost:5000/api/alerts".to_string(),
            path: "/alerts".to_string(),
        }
    }

    #[test]
    fn test_expired_session_clears_store_and_redirects() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/alerts");
        let controller = SessionController::new(store.clone(), navigator.clone());

        assert!(controller.handle(&expired()).unwrap());

        assert_eq!(store.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get_item(USER_KEY).unwrap(), None);
        assert_eq!(navigator.redirects(), vec!["/login"]);
    }

    #[test]
    fn test_expired_session_on_login_is_ignored() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/login");
        let controller = SessionController::new(store.clone(), navigator.clone());

        assert!(!controller.handle(&expired()).unwrap());

        assert_eq!(store.token().unwrap().as_deref(), Some("stale"));
        assert!(store.user().unwrap().is_some());
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn test_rejected_login_keeps_existing_session() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/dashboard");
        let controller = SessionController::new(store.clone(), navigator.clone());

        let rejected = SessionEvent::Expired {
            method: "POST".to_string(),
            url: "http://localhost:5000/api/auth/login".to_string(),
            path: LOGIN_ENDPOINT.to_string(),
        };
        assert!(!controller.handle(&rejected).unwrap());

        assert_eq!(store.token().unwrap().as_deref(), Some("stale"));
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn test_repeated_expiry_only_redirects_once() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/dashboard");
        let controller = SessionController::new(store.clone(), navigator.clone());

        let handled: Vec<bool> = (0..3)
            .map(|_| controller.handle(&expired()).unwrap())
            .collect();

        assert_eq!(handled, vec![true, false, false]);
        assert_eq!(navigator.redirects().len(), 1);
    }

    #[test]
    fn test_logout_through_router() {
        let store = signed_in_store();
        let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/map"));
        let controller = SessionController::new(store.clone(), router.clone());

        assert_eq!(controller.current_user().unwrap().unwrap().username, "admin");
        controller.logout().unwrap();

        assert!(store.is_empty());
        assert_eq!(router.current_path(), "/login");
        assert!(controller.current_user().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_stops_when_channel_closes() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/reports");
        let controller = SessionController::new(store.clone(), navigator.clone());

        let (tx, rx) = broadcast::channel(4);
        let task = tokio::spawn(controller.run(rx));
        tx.send(expired()).unwrap();
        tx.send(expired()).unwrap();
        drop(tx);
        task.await.unwrap();

        assert!(store.is_empty());
        assert_eq!(navigator.redirects(), vec!["/login"]);
    }
}
