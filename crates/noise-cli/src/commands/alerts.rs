//! Alert management commands

use crate::app::App;
use crate::output::{items, message, params, print_rows};
use anyhow::Result;
use colored::Colorize;
use noise_types::{AlertStatus, AlertUpdate};
use serde_json::json;

pub async fn list(
    status: Option<String>,
    level: Option<String>,
    district: Option<String>,
) -> Result<()> {
    let status = status.map(|s| s.parse::<AlertStatus>()).transpose().map_err(anyhow::Error::msg)?;
    let query = params(vec![
        ("status", status.map(|s| json!(s))),
        ("level", level.map(|l| json!(l))),
        ("district", district.map(|d| json!(d))),
    ]);

    let app = App::init()?;
    let Some(body) = app
        .fetch("/alerts", |gateway| async move {
            gateway.alerts().get(query.as_ref()).await
        })
        .await?
    else {
        return Ok(());
    };

    print_rows(
        items(&body, "alerts"),
        &[
            "alert_id",
            "alert_level",
            "alert_type",
            "alert_status",
            "point_name",
            "trigger_time",
        ],
    );
    Ok(())
}

pub async fn update(
    id: u64,
    status: Option<String>,
    notes: Option<String>,
    handler: Option<i64>,
) -> Result<()> {
    let status = status.map(|s| s.parse::<AlertStatus>()).transpose().map_err(anyhow::Error::msg)?;
    if status.is_none() && notes.is_none() && handler.is_none() {
        anyhow::bail!("Nothing to update: pass --status, --notes or --handler");
    }
    let update = AlertUpdate {
        status,
        handler_id: handler,
        process_notes: notes,
    };

    let app = App::init()?;
    let Some(body) = app
        .fetch("/alerts", |gateway| async move {
            gateway.alerts().update(id, &update).await
        })
        .await?
    else {
        return Ok(());
    };

    println!(
        "{} {}",
        "✓".green(),
        message(&body).unwrap_or("Alert updated")
    );
    Ok(())
}
