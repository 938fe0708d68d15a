//! User types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role assigned to a system user by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "管理员")]
    Admin,
    #[serde(rename = "操作员")]
    Operator,
    #[serde(rename = "普通用户")]
    Viewer,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Operator => write!(f, "operator"),
            UserRole::Viewer => write!(f, "viewer"),
            UserRole::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" | "管理员" => Ok(UserRole::Admin),
            "operator" | "操作员" => Ok(UserRole::Operator),
            "viewer" | "普通用户" => Ok(UserRole::Viewer),
            other => Err(format!(
                "unknown role '{}' (expected admin, operator or viewer)",
                other
            )),
        }
    }
}

/// User-identity record returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub responsible_regions: Vec<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
}

/// User login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsible_regions: Vec<i64>,
}

/// Body of a successful `POST /auth/login`
///
/// The backend does not always issue a bearer token; when it does, it is
/// carried next to the user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserProfile,
    #[serde(default)]
    pub token: Option<String>,
}
