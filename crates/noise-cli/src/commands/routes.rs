//! Route table inspection

use anyhow::{Context, Result};
use colored::Colorize;
use noise_core::{FileSessionStore, GuardDecision, RouteTable, Router, ROOT_PATH};
use std::sync::Arc;

pub async fn list() -> Result<()> {
    let table = RouteTable::default();

    println!("{}", "🧭 Routes".blue().bold());
    println!();
    for path in table.paths() {
        let resolved = table.resolve(&path);
        let auth = if resolved.requires_auth {
            "auth".yellow()
        } else {
            "public".green()
        };
        let target = if resolved.path != path {
            format!(" -> {}", resolved.path)
        } else {
            String::new()
        };
        println!(
            "   {:<14} {:<8} {}{}",
            path,
            auth,
            resolved.title.unwrap_or_default(),
            target.dimmed()
        );
    }

    println!();
    println!("{}", "📋 Menu".blue().bold());
    for item in table.menu() {
        println!("   {:<14} {}", item.path, item.title);
    }

    Ok(())
}

pub async fn check(path: &str) -> Result<()> {
    let store = Arc::new(FileSessionStore::open_default().context("Failed to open session store")?);
    let router = Router::new(RouteTable::default(), store, ROOT_PATH);
    let state = router.session_state();
    let nav = router.navigate(path);

    println!("   Session:  {:?}", state);
    println!("   Request:  {}", nav.requested.cyan());
    let decision = match nav.decision {
        GuardDecision::Proceed => "proceed".green(),
        GuardDecision::RedirectToLogin => "redirect to login".yellow(),
        GuardDecision::RedirectToRoot => "redirect to root".yellow(),
    };
    println!("   Decision: {}", decision);
    println!(
        "   Lands on: {} {}",
        nav.path.cyan(),
        nav.title.unwrap_or_default().dimmed()
    );
    if nav.view.is_none() {
        println!("{}", "   No view is mounted at this path".dimmed());
    }

    Ok(())
}
