//! Alert types

use serde::{Deserialize, Serialize};

/// Processing status of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    #[serde(rename = "未处理")]
    Pending,
    #[serde(rename = "处理中")]
    Processing,
    #[serde(rename = "已处理")]
    Resolved,
    #[serde(rename = "已关闭")]
    Closed,
}

impl std::str::FromStr for AlertStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "未处理" => Ok(AlertStatus::Pending),
            "processing" | "处理中" => Ok(AlertStatus::Processing),
            "resolved" | "已处理" => Ok(AlertStatus::Resolved),
            "closed" | "已关闭" => Ok(AlertStatus::Closed),
            other => Err(format!(
                "unknown alert status '{}' (expected pending, processing, resolved or closed)",
                other
            )),
        }
    }
}

/// Body of `PUT /alerts/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_notes: Option<String>,
}
