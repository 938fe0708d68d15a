//! Dashboard summary types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate counters shown on the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_devices: u64,
    #[serde(default)]
    pub online_devices: u64,
    #[serde(default)]
    pub online_rate: f64,
    #[serde(default)]
    pub today_data_count: u64,
    #[serde(default)]
    pub pending_alerts: u64,
    #[serde(default)]
    pub regions_by_type: HashMap<String, u64>,
}

/// Body of `GET /dashboard/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub status: String,
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_alerts: Vec<serde_json::Value>,
}
