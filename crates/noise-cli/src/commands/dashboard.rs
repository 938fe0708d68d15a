//! Dashboard and map views

use crate::app::App;
use crate::output::{print_field, print_json, print_rows};
use anyhow::{Context, Result};
use colored::Colorize;
use noise_types::DashboardResponse;

pub async fn stats() -> Result<()> {
    let app = App::init()?;
    let Some(body) = app
        .fetch("/dashboard", |gateway| async move {
            gateway.dashboard().get_stats().await
        })
        .await?
    else {
        return Ok(());
    };

    let response: DashboardResponse =
        serde_json::from_value(body).context("Unexpected dashboard payload")?;
    let stats = response.stats;

    print_field("Devices", stats.total_devices);
    print_field(
        "Online",
        format!("{} ({:.1}%)", stats.online_devices, stats.online_rate).green(),
    );
    print_field("Readings today", stats.today_data_count);
    print_field(
        "Pending alerts",
        if stats.pending_alerts > 0 {
            stats.pending_alerts.to_string().red().bold()
        } else {
            stats.pending_alerts.to_string().normal()
        },
    );

    if !stats.regions_by_type.is_empty() {
        println!();
        println!("   {}", "Regions by type".bold());
        let mut regions: Vec<_> = stats.regions_by_type.iter().collect();
        regions.sort();
        for (kind, count) in regions {
            println!("     {:<10} {}", kind, count);
        }
    }

    if !response.recent_alerts.is_empty() {
        println!();
        println!("   {}", "Recent alerts".bold());
        print_rows(
            &response.recent_alerts,
            &["alert_id", "alert_level", "alert_type", "trigger_time"],
        );
    }

    Ok(())
}

pub async fn map() -> Result<()> {
    let app = App::init()?;
    if let Some(body) = app
        .fetch("/map", |gateway| async move { gateway.map().get_data().await })
        .await?
    {
        print_json(&body);
    }
    Ok(())
}
