//! Router - owns the current location and runs the guard on every navigation
//!
//! Flow: request -> resolve -> guard -> (redirect -> resolve -> guard)* -> commit

use super::guard::{guard, GuardDecision, SessionState};
use super::table::{RouteTable, ViewId};
use crate::ports::{Navigator, SessionStore};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Upper bound on guard redirects within one navigation
const MAX_GUARD_HOPS: usize = 4;

/// Result of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path that was asked for
    pub requested: String,
    /// Guard decision for the requested target
    pub decision: GuardDecision,
    /// Path committed as the new location
    pub path: String,
    pub view: Option<ViewId>,
    pub title: Option<&'static str>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        self.decision != GuardDecision::Proceed
    }
}

pub struct Router {
    table: RouteTable,
    store: Arc<dyn SessionStore>,
    current: RwLock<String>,
}

impl Router {
    /// Create a router and perform the initial navigation to `initial_path`
    pub fn new(table: RouteTable, store: Arc<dyn SessionStore>, initial_path: &str) -> Self {
        let router = Self {
            table,
            store,
            current: RwLock::new(String::new()),
        };
        router.navigate(initial_path);
        router
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn session_state(&self) -> SessionState {
        SessionState::from_store(self.store.as_ref())
    }

    /// **Core method: navigation with guard**
    pub fn navigate(&self, path: &str) -> Navigation {
        let state = self.session_state();
        let mut target = self.table.resolve(path);
        let decision = guard(state, &target);

        let mut next = decision;
        for _ in 0..MAX_GUARD_HOPS {
            let Some(redirect) = next.redirect_target() else {
                break;
            };
            debug!("[Router] {} -> {} ({:?})", target.path, redirect, next);
            target = self.table.resolve(redirect);
            next = guard(state, &target);
        }
        if next != GuardDecision::Proceed {
            warn!("[Router] Guard kept redirecting, committing {}", target.path);
        }

        match decision {
            GuardDecision::RedirectToLogin => {
                info!("[Router] Access to {} denied. Redirecting to login.", path)
            }
            GuardDecision::RedirectToRoot => {
                info!("[Router] Already authenticated. Redirecting to root.")
            }
            GuardDecision::Proceed => {}
        }

        self.commit(&target.path);

        Navigation {
            requested: path.to_string(),
            decision,
            path: target.path.clone(),
            view: target.view(),
            title: target.title,
        }
    }

    pub fn current_path(&self) -> String {
        match self.current.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn commit(&self, path: &str) {
        match self.current.write() {
            Ok(mut current) => *current = path.to_string(),
            Err(poisoned) => *poisoned.into_inner() = path.to_string(),
        }
    }
}

impl Navigator for Router {
    fn current_path(&self) -> String {
        Router::current_path(self)
    }

    fn redirect(&self, path: &str) {
        self.navigate(path);
    }
}
