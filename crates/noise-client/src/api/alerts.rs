use crate::error::Result;
use crate::gateway::Gateway;
use serde::Serialize;
use serde_json::Value;

/// `/alerts`
pub struct AlertsApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> AlertsApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/alerts", params).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, alert_id: u64, data: &B) -> Result<Value> {
        self.gateway.put(&format!("/alerts/{}", alert_id), data).await
    }
}
