//! Port traits (interfaces) for dependency injection

pub mod navigation;
pub mod storage;

pub use navigation::{Navigator, LOGIN_PATH, ROOT_PATH};
pub use storage::SessionStore;
