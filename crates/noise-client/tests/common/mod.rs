//! Test helpers: an in-process stub of the monitoring backend

#![allow(dead_code)]

use axum::{
    extract::{Multipart, Path, RawQuery},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use noise_client::{Gateway, GatewayConfig};
use noise_core::{MemorySessionStore, SessionCredential, UserProfile, UserRole};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Token the stub accepts as a live session
pub const FRESH_TOKEN: &str = "fresh-token";
pub const STALE_TOKEN: &str = "stale-token";
pub const PASSWORD: &str = "admin123";

pub struct StubBackend {
    pub addr: SocketAddr,
}

impl StubBackend {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/api/echo", get(echo))
            .route("/api/alerts", get(list_alerts))
            .route("/api/alerts/:id", put(update_alert))
            .route("/api/auth/login", post(login))
            .route("/api/dashboard/stats", get(dashboard_stats))
            .route("/api/data-import", post(import))
            .route("/api/reports/:id", axum::routing::delete(delete_report))
            .route("/api/broken", get(broken))
            .route("/api/empty", get(empty))
            .route("/api/plain", get(plain))
            .route("/api/slow", get(slow))
            .fallback(route_echo);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn gateway(&self, store: Arc<MemorySessionStore>) -> Gateway {
        Gateway::configure(
            GatewayConfig::new(self.base_url()).with_timeout(Duration::from_millis(500)),
            store,
        )
        .unwrap()
    }
}

pub fn admin() -> UserProfile {
    UserProfile {
        user_id: 1,
        username: "admin".to_string(),
        role: UserRole::Admin,
        email: Some("admin@example.com".to_string()),
        phone: None,
        responsible_regions: vec!["市中心".to_string()],
        created_at: None,
        last_login: None,
    }
}

pub fn store_with_token(token: &str) -> Arc<MemorySessionStore> {
    let credential = SessionCredential::new(admin(), Some(token.to_string()));
    Arc::new(MemorySessionStore::with_credential(&credential).unwrap())
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn echo(headers: HeaderMap, RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "authorization": authorization(&headers),
        "content_type": headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "query": query,
    }))
}

async fn list_alerts(headers: HeaderMap) -> impl IntoResponse {
    let expected = format!("Bearer {}", FRESH_TOKEN);
    if authorization(&headers).as_deref() == Some(expected.as_str()) {
        (
            StatusCode::OK,
            Json(json!({"status": "success", "alerts": [{"alert_id": 7, "status": "未处理"}]})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "message": "未授权"})),
        )
    }
}

async fn update_alert(Path(id): Path<u64>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"status": "success", "alert_id": id, "received": body}))
}

async fn delete_report(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({"status": "success", "deleted": id}))
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "admin" && body["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "登录成功",
                "user": {
                    "user_id": 1,
                    "username": "admin",
                    "role": "管理员",
                    "email": "admin@example.com",
                    "phone": null,
                    "responsible_regions": ["市中心"],
                    "created_at": "2024-01-01T08:00:00",
                    "last_login": "2024-03-01T09:30:00"
                },
                "token": FRESH_TOKEN
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "message": "用户名或密码错误"})),
        )
    }
}

async fn dashboard_stats() -> Json<Value> {
    Json(json!({
        "status": "success",
        "stats": {
            "total_devices": 12,
            "online_devices": 9,
            "online_rate": 75.0,
            "today_data_count": 340,
            "pending_alerts": 2,
            "regions_by_type": {"居住区": 3, "商业区": 2}
        },
        "recent_alerts": []
    }))
}

async fn import(headers: HeaderMap, mut multipart: Multipart) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let mime = field.content_type().map(str::to_string);
        let data = field.bytes().await.unwrap();
        fields.push(json!({
            "name": name,
            "file_name": file_name,
            "mime": mime,
            "content": String::from_utf8_lossy(&data),
        }));
    }

    Json(json!({"content_type": content_type, "fields": fields}))
}

async fn broken() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "error", "message": "数据库连接失败"})),
    )
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn plain() -> &'static str {
    "ok"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"status": "late"}))
}

/// Anything else answers with the method and path it was reached by
async fn route_echo(method: Method, uri: Uri) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
    }))
}
