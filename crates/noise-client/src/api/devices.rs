use crate::error::Result;
use crate::gateway::Gateway;
use serde_json::Value;

/// `/devices`
pub struct DevicesApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> DevicesApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/devices", params).await
    }

    pub async fn get_statuses(&self) -> Result<Value> {
        self.gateway.get("/devices/statuses", None).await
    }
}
