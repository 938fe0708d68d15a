//! Region and device commands

use crate::app::App;
use crate::output::{items, params, print_json, print_rows};
use anyhow::Result;
use serde_json::json;

pub async fn regions(region_type: Option<String>, district: Option<String>) -> Result<()> {
    let query = params(vec![
        ("type", region_type.map(|t| json!(t))),
        ("district", district.map(|d| json!(d))),
    ]);

    let app = App::init()?;
    if let Some(body) = app
        .fetch("/regions", |gateway| async move {
            gateway.regions().get(query.as_ref()).await
        })
        .await?
    {
        print_rows(
            items(&body, "regions"),
            &["region_id", "region_name", "region_type", "district"],
        );
    }
    Ok(())
}

pub async fn region_devices(region_id: u64) -> Result<()> {
    let app = App::init()?;
    if let Some(body) = app
        .fetch("/regions", |gateway| async move {
            gateway.regions().get_devices(region_id).await
        })
        .await?
    {
        print_rows(
            items(&body, "devices"),
            &["device_id", "device_name", "status", "last_update"],
        );
    }
    Ok(())
}

pub async fn devices(status: Option<String>) -> Result<()> {
    let query = params(vec![("status", status.map(|s| json!(s)))]);

    let app = App::init()?;
    if let Some(body) = app
        .fetch("/devices", |gateway| async move {
            gateway.devices().get(query.as_ref()).await
        })
        .await?
    {
        print_rows(
            items(&body, "devices"),
            &["device_id", "device_name", "region_name", "status"],
        );
    }
    Ok(())
}

pub async fn device_statuses() -> Result<()> {
    let app = App::init()?;
    if let Some(body) = app
        .fetch("/devices", |gateway| async move {
            gateway.devices().get_statuses().await
        })
        .await?
    {
        print_json(&body);
    }
    Ok(())
}
