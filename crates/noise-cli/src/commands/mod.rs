//! Command implementations

pub mod alerts;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod import;
pub mod monitoring;
pub mod noise;
pub mod reports;
pub mod routes;
