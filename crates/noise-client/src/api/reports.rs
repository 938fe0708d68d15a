use crate::error::Result;
use crate::gateway::Gateway;
use serde::Serialize;
use serde_json::Value;

/// `/reports`
pub struct ReportsApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, params: Option<&Value>) -> Result<Value> {
        self.gateway.get("/reports", params).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.gateway.post("/reports", data).await
    }

    pub async fn delete(&self, report_id: u64) -> Result<Value> {
        self.gateway.delete(&format!("/reports/{}", report_id)).await
    }
}
