//! Authentication commands

use crate::app::App;
use crate::output::{message, print_field};
use anyhow::{Context, Result};
use colored::Colorize;
use noise_core::{FileSessionStore, SessionStore, LOGIN_PATH};
use noise_types::{RegisterRequest, UserRole};
use serde_json::Value;

pub async fn login(username: Option<String>, password: Option<String>) -> Result<()> {
    println!("{}", "🔹 Login to Noise Monitor".blue().bold());
    println!();

    let username: String = match username {
        Some(username) => username,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    let password: String = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?,
    };

    println!();
    println!("{}", "🔐 Authenticating...".dimmed());

    let app = App::init()?;
    let result = app
        .controller
        .login(app.gateway(), &username, &password)
        .await;
    let user = match result {
        Ok(user) => user,
        Err(e) if e.status() == Some(401) => {
            let reason = e
                .body()
                .and_then(|body| body.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("Invalid username or password")
                .to_string();
            app.finish().await?;
            anyhow::bail!(reason);
        }
        Err(e) => return Err(e).context("Login failed"),
    };

    // An authenticated visit to the login screen lands on the dashboard
    let landing = app.router.navigate(LOGIN_PATH);
    app.finish().await?;

    println!();
    println!("{}", "✅ Login successful!".green().bold());
    println!();
    println!("   Welcome, {} ({})!", user.username.cyan(), user.role);
    println!("   Landing on {}", landing.path.dimmed());

    Ok(())
}

pub async fn register(
    username: String,
    email: String,
    role: String,
    phone: Option<String>,
    responsible_regions: Vec<i64>,
) -> Result<()> {
    let role: UserRole = role.parse().map_err(anyhow::Error::msg)?;
    let password: String = dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let request = RegisterRequest {
        username,
        password,
        email,
        role,
        phone,
        responsible_regions,
    };

    let app = App::init()?;
    let result = app.gateway().auth().register(&request).await;
    app.finish().await?;
    let body = result.context("Registration failed")?;

    println!(
        "{} {}",
        "✅".green(),
        message(&body).unwrap_or("User registered")
    );
    println!("   Run `noise auth login -u {}` to sign in", request.username.cyan());
    Ok(())
}

pub async fn logout() -> Result<()> {
    let store = FileSessionStore::open_default()?;
    if store.profile()?.is_none() {
        println!("{}", "⚠️  Not logged in".yellow());
        return Ok(());
    }

    let app = App::init()?;
    app.controller.logout().context("Failed to clear session")?;

    println!("{}", "✅ Logged out successfully".green());
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let store = FileSessionStore::open_default()?;
    let Some(credential) = store.credential().context("Failed to read session")? else {
        println!("{}", "⚠️  Not logged in".yellow());
        return Ok(());
    };
    let user = credential.user;

    println!("{}", "👤 User Info".blue().bold());
    println!();
    print_field("ID", user.user_id.to_string().dimmed());
    print_field("Username", user.username.cyan());
    print_field("Role", &user.role);
    if let Some(email) = &user.email {
        print_field("Email", email);
    }
    if let Some(phone) = &user.phone {
        print_field("Phone", phone);
    }
    if !user.responsible_regions.is_empty() {
        print_field("Regions", user.responsible_regions.join(", "));
    }
    if let Some(last_login) = user.last_login {
        print_field("Last login", last_login.format("%Y-%m-%d %H:%M"));
    }
    print_field(
        "Token",
        if credential.token.is_some() {
            "stored".green()
        } else {
            "none".dimmed()
        },
    );

    Ok(())
}
