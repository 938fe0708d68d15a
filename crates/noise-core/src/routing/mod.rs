//! Routing: route table, navigation guard and router

pub mod guard;
pub mod router;
pub mod table;

pub use guard::{guard, GuardDecision, SessionState};
pub use router::{Navigation, Router};
pub use table::{
    normalize_path, MenuItem, ResolvedRoute, RouteDescriptor, RouteMeta, RouteTable, ViewId,
    ViewLoader,
};
