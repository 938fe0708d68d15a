//! Navigation guard
//!
//! A pure function of (session state, resolved target). It never mutates
//! the store; authentication transitions happen elsewhere.

use super::table::ResolvedRoute;
use crate::ports::{SessionStore, LOGIN_PATH, ROOT_PATH};
use tracing::warn;

/// Authentication state as seen by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No user-identity record stored
    Anonymous,
    /// A user-identity record is stored
    Authenticated,
}

impl SessionState {
    /// Read the user-record presence flag. An empty record counts as absent,
    /// and so does a store that cannot be read.
    pub fn from_store(store: &dyn SessionStore) -> Self {
        match store.user() {
            Ok(Some(user)) if !user.is_empty() => SessionState::Authenticated,
            Ok(_) => SessionState::Anonymous,
            Err(e) => {
                warn!("Failed to read session store, treating as anonymous: {}", e);
                SessionState::Anonymous
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

/// What the guard decided for one navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
    RedirectToRoot,
}

impl GuardDecision {
    /// Where to go instead, `None` when the navigation may proceed
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Proceed => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectToRoot => Some(ROOT_PATH),
        }
    }
}

/// **Core guard logic**
pub fn guard(state: SessionState, target: &ResolvedRoute<'_>) -> GuardDecision {
    if target.requires_auth && !state.is_authenticated() {
        GuardDecision::RedirectToLogin
    } else if target.path == LOGIN_PATH && state.is_authenticated() {
        GuardDecision::RedirectToRoot
    } else {
        GuardDecision::Proceed
    }
}
