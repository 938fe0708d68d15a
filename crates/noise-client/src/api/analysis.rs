use crate::error::Result;
use crate::gateway::Gateway;
use serde_json::Value;

/// `/analysis`
pub struct AnalysisApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> AnalysisApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn trend(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/analysis/trend", params).await
    }

    pub async fn compare(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/analysis/compare", params).await
    }

    pub async fn hourly_pattern(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/analysis/hourly-pattern", params).await
    }

    pub async fn correlation(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/analysis/correlation", params).await
    }
}
