//! Resource operation groups
//!
//! Each group is a thin namespace over [`Gateway`](crate::Gateway): an HTTP
//! verb, a path template and the caller's params or body, nothing more.
//! Inputs are passed through verbatim; validation is the backend's job.

mod alerts;
mod analysis;
mod auth;
mod dashboard;
mod data_import;
mod devices;
mod noise_data;
mod realtime;
mod regions;
mod reports;

pub use alerts::AlertsApi;
pub use analysis::AnalysisApi;
pub use auth::{AuthApi, LOGIN_ENDPOINT};
pub use dashboard::{DashboardApi, MapApi};
pub use data_import::{DataImportApi, IMPORT_FIELD};
pub use devices::DevicesApi;
pub use noise_data::NoiseDataApi;
pub use realtime::RealtimeApi;
pub use regions::RegionsApi;
pub use reports::ReportsApi;
