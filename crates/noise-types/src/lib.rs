//! Noise Types - Pure type definitions for the noise monitor client
//!
//! This crate contains only serde data types with no async runtime or HTTP
//! dependencies, so it can be shared between native tools and WASM front-ends.

pub mod alert;
pub mod dashboard;
pub mod session;
pub mod user;

pub use alert::*;
pub use dashboard::*;
pub use session::*;
pub use user::*;
