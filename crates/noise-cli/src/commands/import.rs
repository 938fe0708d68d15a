//! Data import command

use crate::app::App;
use crate::output::{message, print_json};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub async fn run(file: &Path) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("File not found: {}", file.display());
    }

    let app = App::init()?;
    println!(
        "{} {}",
        "📤 Uploading".dimmed(),
        file.display().to_string().cyan()
    );

    let path = file.to_path_buf();
    let Some(body) = app
        .fetch("/noise-data", |gateway| async move {
            gateway.data_import().import_data(&path).await
        })
        .await?
    else {
        return Ok(());
    };

    println!(
        "{} {}",
        "✓".green(),
        message(&body).unwrap_or("Import finished")
    );
    print_json(&body);
    Ok(())
}
