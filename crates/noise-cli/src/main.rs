//! Noise Monitor CLI
//!
//! Terminal front-end for the urban noise monitoring dashboard.

mod app;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "noise")]
#[command(author, version, about = "Noise Monitor - urban noise monitoring dashboard client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Show dashboard statistics
    Dashboard,

    /// Show map data for monitoring points
    Map,

    /// Alert management
    Alerts {
        #[command(subcommand)]
        action: AlertsAction,
    },

    /// Monitoring regions
    Regions {
        #[command(subcommand)]
        action: RegionsAction,
    },

    /// Monitoring devices
    Devices {
        #[command(subcommand)]
        action: DevicesAction,
    },

    /// Noise readings
    Noise {
        #[command(subcommand)]
        action: NoiseAction,
    },

    /// Report management
    Reports {
        #[command(subcommand)]
        action: ReportsAction,
    },

    /// Import readings from a CSV or XLSX file
    Import {
        /// File to upload
        file: PathBuf,
    },

    /// Inspect the dashboard route table
    Routes {
        #[command(subcommand)]
        action: RoutesAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Login to the monitoring backend
    Login {
        /// Username (optional - will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (optional - will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Register a new user account
    Register {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Role (admin, operator, viewer)
        #[arg(short, long, default_value = "viewer")]
        role: String,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Responsible region IDs
        #[arg(long = "region")]
        regions: Vec<i64>,
    },
    /// Logout
    Logout,
    /// Show current user
    Whoami,
}

#[derive(Subcommand)]
enum AlertsAction {
    /// List alerts
    List {
        /// Filter by status (pending, processing, resolved, closed)
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by level
        #[arg(short, long)]
        level: Option<String>,
        /// Filter by district
        #[arg(short, long)]
        district: Option<String>,
    },
    /// Update an alert
    Update {
        /// Alert ID
        id: u64,
        /// New status (pending, processing, resolved, closed)
        #[arg(short, long)]
        status: Option<String>,
        /// Handling notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Handler user ID
        #[arg(long)]
        handler: Option<i64>,
    },
}

#[derive(Subcommand)]
enum RegionsAction {
    /// List regions
    List {
        /// Filter by region type
        #[arg(short = 't', long = "type")]
        region_type: Option<String>,
        /// Filter by district
        #[arg(short, long)]
        district: Option<String>,
    },
    /// List devices in a region
    Devices {
        /// Region ID
        id: u64,
    },
}

#[derive(Subcommand)]
enum DevicesAction {
    /// List devices
    List {
        /// Filter by status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show device online statuses
    Statuses,
}

#[derive(Subcommand)]
enum NoiseAction {
    /// List noise readings
    List {
        /// Region (monitoring point) ID
        #[arg(short, long)]
        region: Option<u64>,
        /// Device ID
        #[arg(short, long)]
        device: Option<String>,
        /// Only the last N hours
        #[arg(long)]
        hours: Option<u32>,
        /// Maximum number of readings
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show reading statistics
    Stats {
        /// Region (monitoring point) ID
        #[arg(short, long)]
        region: Option<u64>,
        /// Only the last N hours
        #[arg(long)]
        hours: Option<u32>,
    },
}

#[derive(Subcommand)]
enum ReportsAction {
    /// List reports
    List {
        /// Filter by report type
        #[arg(short = 't', long = "type")]
        report_type: Option<String>,
    },
    /// Delete a report
    Delete {
        /// Report ID
        id: u64,
    },
}

#[derive(Subcommand)]
enum RoutesAction {
    /// List every route with its guard metadata
    List,
    /// Run the navigation guard against a path
    Check {
        /// Path to navigate to
        path: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "noise_cli=debug,noise_client=debug,noise_core=debug"
        } else {
            "noise_cli=info,noise_client=warn,noise_core=warn"
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    debug!("Starting Noise Monitor CLI");

    let result = match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { username, password } => {
                commands::auth::login(username, password).await
            }
            AuthAction::Register {
                username,
                email,
                role,
                phone,
                regions,
            } => commands::auth::register(username, email, role, phone, regions).await,
            AuthAction::Logout => commands::auth::logout().await,
            AuthAction::Whoami => commands::auth::whoami().await,
        },
        Commands::Dashboard => commands::dashboard::stats().await,
        Commands::Map => commands::dashboard::map().await,
        Commands::Alerts { action } => match action {
            AlertsAction::List {
                status,
                level,
                district,
            } => commands::alerts::list(status, level, district).await,
            AlertsAction::Update {
                id,
                status,
                notes,
                handler,
            } => commands::alerts::update(id, status, notes, handler).await,
        },
        Commands::Regions { action } => match action {
            RegionsAction::List {
                region_type,
                district,
            } => commands::monitoring::regions(region_type, district).await,
            RegionsAction::Devices { id } => commands::monitoring::region_devices(id).await,
        },
        Commands::Devices { action } => match action {
            DevicesAction::List { status } => commands::monitoring::devices(status).await,
            DevicesAction::Statuses => commands::monitoring::device_statuses().await,
        },
        Commands::Noise { action } => match action {
            NoiseAction::List {
                region,
                device,
                hours,
                limit,
            } => commands::noise::list(region, device, hours, limit).await,
            NoiseAction::Stats { region, hours } => commands::noise::stats(region, hours).await,
        },
        Commands::Reports { action } => match action {
            ReportsAction::List { report_type } => commands::reports::list(report_type).await,
            ReportsAction::Delete { id } => commands::reports::delete(id).await,
        },
        Commands::Import { file } => commands::import::run(&file).await,
        Commands::Routes { action } => match action {
            RoutesAction::List => commands::routes::list().await,
            RoutesAction::Check { path } => commands::routes::check(&path).await,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show().await,
        },
    };

    if let Err(ref e) = result {
        error!("Command failed: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    result
}
