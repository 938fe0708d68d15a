//! Navigation port

/// Path of the login screen
pub const LOGIN_PATH: &str = "/login";

/// Path of the application root
pub const ROOT_PATH: &str = "/";

/// Something that owns the current location and can be forced elsewhere
pub trait Navigator: Send + Sync {
    /// Path currently displayed
    fn current_path(&self) -> String;

    /// Replace the current location with `path`
    fn redirect(&self, path: &str);
}
