//! Noise Core Library
//!
//! Session storage ports and implementations, plus the route table and
//! navigation guard that gate the authenticated views of the dashboard.

// Re-export pure types from noise-types
pub use noise_types::*;

pub mod error;
pub mod ports;
pub mod routing;
pub mod store;

pub use error::{CoreError, Result};
pub use ports::{Navigator, SessionStore, LOGIN_PATH, ROOT_PATH};
pub use routing::{
    guard, GuardDecision, Navigation, ResolvedRoute, RouteDescriptor, RouteMeta, RouteTable,
    Router, SessionState, ViewId,
};
pub use store::{FileSessionStore, MemorySessionStore};
