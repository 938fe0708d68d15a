use crate::error::Result;
use crate::gateway::Gateway;
use serde_json::Value;

/// `/regions`
pub struct RegionsApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> RegionsApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/regions", params).await
    }

    pub async fn get_devices(&self, region_id: u64) -> Result<Value> {
        self.gateway
            .get(&format!("/regions/{}/devices", region_id), None)
            .await
    }
}
