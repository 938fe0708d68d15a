//! Noise Client Library
//!
//! The single outbound channel to the noise monitor backend. Every request
//! goes through [`Gateway`], which attaches the stored bearer token, hands
//! back response bodies and turns a 401 into a [`SessionEvent`] that the
//! [`SessionController`] answers by clearing the session and forcing
//! navigation to the login screen.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;

pub use config::{BuildMode, ClientConfig};
pub use error::{ApiError, Result};
pub use gateway::{
    FailureKind, Gateway, GatewayConfig, Payload, RequestConfig, RequestFailure, SessionEvent,
    DEFAULT_TIMEOUT,
};
pub use session::SessionController;
