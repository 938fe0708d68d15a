use crate::error::Result;
use crate::gateway::Gateway;
use serde::Serialize;
use serde_json::Value;

/// `/noise-data`
pub struct NoiseDataApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> NoiseDataApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/noise-data", params).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.gateway.post("/noise-data", data).await
    }

    pub async fn get_statistics(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/noise-data/statistics", params).await
    }
}
