use crate::error::Result;
use crate::gateway::Gateway;
use serde_json::Value;

/// `/dashboard`
pub struct DashboardApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> DashboardApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get_stats(&self) -> Result<Value> {
        self.gateway.get("/dashboard/stats", None).await
    }
}

/// `/map`
pub struct MapApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> MapApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get_data(&self) -> Result<Value> {
        self.gateway.get("/map/data", None).await
    }
}
