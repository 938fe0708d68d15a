//! Noise reading commands

use crate::app::App;
use crate::output::{items, params, print_json, print_rows};
use anyhow::Result;
use serde_json::json;

pub async fn list(
    region: Option<u64>,
    device: Option<String>,
    hours: Option<u32>,
    limit: Option<u32>,
) -> Result<()> {
    let query = params(vec![
        ("region_id", region.map(|r| json!(r))),
        ("device_id", device.map(|d| json!(d))),
        ("hours", hours.map(|h| json!(h))),
        ("limit", limit.map(|l| json!(l))),
    ]);

    let app = App::init()?;
    if let Some(body) = app
        .fetch("/noise-data", |gateway| async move {
            gateway.noise_data().get(query.as_ref()).await
        })
        .await?
    {
        print_rows(
            items(&body, "data"),
            &["device_id", "region_name", "noise_value", "timestamp"],
        );
    }
    Ok(())
}

pub async fn stats(region: Option<u64>, hours: Option<u32>) -> Result<()> {
    let query = params(vec![
        ("region_id", region.map(|r| json!(r))),
        ("hours", hours.map(|h| json!(h))),
    ]);

    let app = App::init()?;
    if let Some(body) = app
        .fetch("/statistics", |gateway| async move {
            gateway.noise_data().get_statistics(query.as_ref()).await
        })
        .await?
    {
        print_json(&body);
    }
    Ok(())
}
