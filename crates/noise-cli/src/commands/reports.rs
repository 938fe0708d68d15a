//! Report commands

use crate::app::App;
use crate::output::{items, message, params, print_rows};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

pub async fn list(report_type: Option<String>) -> Result<()> {
    let query = params(vec![("type", report_type.map(|t| json!(t)))]);

    let app = App::init()?;
    if let Some(body) = app
        .fetch("/reports", |gateway| async move {
            gateway.reports().get(query.as_ref()).await
        })
        .await?
    {
        print_rows(
            items(&body, "reports"),
            &["report_id", "report_name", "report_type", "created_at"],
        );
    }
    Ok(())
}

pub async fn delete(id: u64) -> Result<()> {
    let app = App::init()?;
    if let Some(body) = app
        .fetch("/reports", |gateway| async move {
            gateway.reports().delete(id).await
        })
        .await?
    {
        println!(
            "{} {}",
            "✓".green(),
            message(&body).unwrap_or("Report deleted")
        );
    }
    Ok(())
}
