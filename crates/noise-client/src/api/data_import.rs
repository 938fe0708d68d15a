use crate::error::{ApiError, Result};
use crate::gateway::Gateway;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;

/// Multipart field the backend reads the upload from
pub const IMPORT_FIELD: &str = "file";

/// `/data-import`
pub struct DataImportApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> DataImportApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Upload a CSV or XLSX file from disk
    pub async fn import_data(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ApiError::Client(format!("Invalid file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        self.import_bytes(&file_name, bytes).await
    }

    /// Upload an in-memory file under `file_name`
    pub async fn import_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name))
            .map_err(|e| ApiError::Client(e.to_string()))?;
        let form = Form::new().part(IMPORT_FIELD, part);

        self.gateway.post_multipart("/data-import", form).await
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => "text/csv",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}
