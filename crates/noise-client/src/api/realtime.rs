use crate::error::Result;
use crate::gateway::Gateway;
use serde::Serialize;
use serde_json::Value;

/// `/realtime-data`
pub struct RealtimeApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> RealtimeApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/realtime-data", params).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.gateway.post("/realtime-data", data).await
    }
}
