//! API gateway for the noise monitor backend
//!
//! All outbound HTTP goes through one configured client and three
//! interceptors:
//! - `on_outbound_request` attaches the stored bearer token
//! - `on_inbound_response` unwraps the body
//! - `on_inbound_error` logs, classifies 401 as an expired session and
//!   publishes a [`SessionEvent`] before handing the error back
//!
//! The gateway never navigates; whoever subscribes to the session events
//! decides what an expired session means for the UI.

use crate::api::{
    AlertsApi, AnalysisApi, AuthApi, DashboardApi, DataImportApi, DevicesApi, MapApi,
    NoiseDataApi, RealtimeApi, RegionsApi, ReportsApi,
};
use crate::error::{ApiError, Result};
use noise_core::SessionStore;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, warn};

/// Overall timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const SESSION_EVENT_CAPACITY: usize = 64;

/// Construction parameters for [`Gateway::configure`]
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }
}

/// Session-level signals raised by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend answered 401 to a request; `path` is relative to the base URL
    Expired {
        method: String,
        url: String,
        path: String,
    },
}

/// Request body
#[derive(Debug, Default)]
pub enum Payload {
    #[default]
    Empty,
    Json(Value),
    Multipart(Form),
}

/// Per-call parameters, passed through without validation
#[derive(Debug, Default)]
pub struct RequestConfig {
    pub params: Option<Value>,
    pub body: Payload,
    pub headers: HeaderMap,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(mut self, params: Option<&Value>) -> Self {
        self.params = params.cloned();
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Payload::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Payload::Multipart(form);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A failed call, as seen by `on_inbound_error`
#[derive(Debug)]
pub struct RequestFailure {
    pub method: Method,
    pub url: String,
    pub kind: FailureKind,
}

#[derive(Debug)]
pub enum FailureKind {
    /// No response received
    Transport { message: String, timeout: bool },
    /// Response received with a non-success status
    Status { status: StatusCode, body: Value },
}

impl RequestFailure {
    pub fn transport(method: &Method, url: &str, err: &reqwest::Error) -> Self {
        Self {
            method: method.clone(),
            url: url.to_string(),
            kind: FailureKind::Transport {
                message: err.to_string(),
                timeout: err.is_timeout(),
            },
        }
    }

    pub fn status(method: &Method, url: &str, status: StatusCode, body: Value) -> Self {
        Self {
            method: method.clone(),
            url: url.to_string(),
            kind: FailureKind::Status { status, body },
        }
    }
}

struct GatewayInner {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
}

/// The single point of outbound communication with the backend
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

impl Gateway {
    /// Build the gateway. The session channel closes once every clone is dropped.
    pub fn configure(config: GatewayConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(config.default_headers)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);

        Ok(Self {
            inner: Arc::new(GatewayInner {
                http,
                base_url: config.base_url,
                store,
                events,
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.inner.store
    }

    /// Receive session events raised after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }

    // ------------------------------------------------------------------
    // Interceptors
    // ------------------------------------------------------------------

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    /// Never fails; anything else on the request is left alone.
    pub fn on_outbound_request(&self, request: &mut reqwest::Request) {
        let token = match self.inner.store.token() {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return,
            Err(e) => {
                warn!("Failed to read session token, sending request without it: {}", e);
                return;
            }
        };

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Stored session token is not a valid header value, sending request without it"),
        }
    }

    /// Hand back the body only; status and headers stay here
    pub async fn on_inbound_response(
        &self,
        response: Response,
    ) -> std::result::Result<Value, reqwest::Error> {
        let text = response.text().await?;
        Ok(parse_body(&text))
    }

    /// Log the failure, classify it and return it to the caller
    pub fn on_inbound_error(&self, failure: RequestFailure) -> ApiError {
        let RequestFailure { method, url, kind } = failure;

        match kind {
            FailureKind::Transport { message, timeout } => {
                error!(
                    url = %url,
                    method = %method,
                    timeout,
                    message = %message,
                    "API request error"
                );
                ApiError::Transport {
                    method: method.to_string(),
                    url,
                    message,
                    timeout,
                }
            }
            FailureKind::Status { status, body } => {
                let message = error_message(status, &body);
                error!(
                    url = %url,
                    method = %method,
                    status = status.as_u16(),
                    data = %body,
                    message = %message,
                    "API request error"
                );

                if status == StatusCode::UNAUTHORIZED {
                    let event = SessionEvent::Expired {
                        method: method.to_string(),
                        path: url
                            .strip_prefix(self.inner.base_url.as_str())
                            .unwrap_or(&url)
                            .to_string(),
                        url: url.clone(),
                    };
                    if self.inner.events.send(event).is_err() {
                        debug!("No session listener for expired session");
                    }
                    return ApiError::SessionExpired {
                        method: method.to_string(),
                        url,
                        body,
                    };
                }

                ApiError::Status {
                    method: method.to_string(),
                    url,
                    status: status.as_u16(),
                    body,
                    message,
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Request pipeline
    // ------------------------------------------------------------------

    pub async fn request(&self, method: Method, path: &str, config: RequestConfig) -> Result<Value> {
        let url = self.url(path);
        let RequestConfig {
            params,
            body,
            headers,
        } = config;

        let mut builder = self.inner.http.request(method.clone(), &url).headers(headers);
        if let Some(params) = params.as_ref().filter(|p| !p.is_null()) {
            builder = builder.query(params);
        }
        builder = match body {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(&value),
            Payload::Multipart(form) => builder.multipart(form),
        };

        let mut request = builder
            .build()
            .map_err(|e| ApiError::Encode(format!("{} {}: {}", method, url, e)))?;
        self.on_outbound_request(&mut request);

        debug!("{} {}", method, url);
        let response = self
            .inner
            .http
            .execute(request)
            .await
            .map_err(|e| self.on_inbound_error(RequestFailure::transport(&method, &url, &e)))?;

        let status = response.status();
        if status.is_success() {
            return self
                .on_inbound_response(response)
                .await
                .map_err(|e| self.on_inbound_error(RequestFailure::transport(&method, &url, &e)));
        }

        let body = match response.text().await {
            Ok(text) => parse_body(&text),
            Err(_) => Value::Null,
        };
        Err(self.on_inbound_error(RequestFailure::status(&method, &url, status, body)))
    }

    pub async fn get(&self, path: &str, params: Option<&Value>) -> Result<Value> {
        self.request(Method::GET, path, RequestConfig::new().params(params))
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.request(Method::POST, path, RequestConfig::new().json(body)?)
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.request(Method::PUT, path, RequestConfig::new().json(body)?)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, RequestConfig::new()).await
    }

    /// POST a multipart form; the form's content type replaces the JSON default
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value> {
        self.request(Method::POST, path, RequestConfig::new().multipart(form))
            .await
    }

    // ------------------------------------------------------------------
    // Resource groups
    // ------------------------------------------------------------------

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn noise_data(&self) -> NoiseDataApi<'_> {
        NoiseDataApi::new(self)
    }

    pub fn alerts(&self) -> AlertsApi<'_> {
        AlertsApi::new(self)
    }

    pub fn regions(&self) -> RegionsApi<'_> {
        RegionsApi::new(self)
    }

    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    pub fn map(&self) -> MapApi<'_> {
        MapApi::new(self)
    }

    pub fn data_import(&self) -> DataImportApi<'_> {
        DataImportApi::new(self)
    }

    pub fn realtime(&self) -> RealtimeApi<'_> {
        RealtimeApi::new(self)
    }

    pub fn analysis(&self) -> AnalysisApi<'_> {
        AnalysisApi::new(self)
    }
}

/// Empty bodies become `null`, non-JSON bodies are kept as a string
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Prefer the backend's `message` field over the status reason
fn error_message(status: StatusCode, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string())
}
