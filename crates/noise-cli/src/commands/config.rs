//! Config command - show the resolved client configuration

use anyhow::{Context, Result};
use colored::Colorize;
use noise_client::ClientConfig;
use noise_core::FileSessionStore;

pub async fn show() -> Result<()> {
    let config = ClientConfig::load().context("Failed to load configuration")?;
    let config_path = ClientConfig::default_path()?;
    let session = FileSessionStore::open_default()?;

    println!("{}", "⚙️  Configuration".blue().bold());
    println!();
    println!("   Mode:        {}", config.mode.to_string().cyan());
    println!("   API URL:     {}", config.base_url().cyan());
    println!("   Dev origin:  {}", config.dev_origin);
    println!("   API origin:  {}", config.api_origin);
    println!("   Timeout:     {} ms", config.timeout_ms);
    println!();
    println!(
        "   Config file: {}{}",
        config_path.display().to_string().dimmed(),
        if config_path.exists() { "" } else { " (not found)" }
    );
    println!(
        "   Session:     {}",
        session.path().display().to_string().dimmed()
    );

    Ok(())
}
