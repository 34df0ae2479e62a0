use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use vmsweep::config::Config;
use vmsweep::gcp::client::{format_gcp_error, GcpClient};
use vmsweep::gcp::projects;
use vmsweep::sweep::{ComputeInstanceLister, ListOutcome, Sweeper, ZoneListing};

/// Concurrent Compute Engine instance sweep across every project and zone
#[derive(Parser, Debug)]
#[command(name = "vmsweep", version, about, long_about = None)]
struct Args {
    /// GCP project to sweep (repeatable)
    #[arg(short, long = "project")]
    projects: Vec<String>,

    /// Zone to sweep (repeatable; defaults to the built-in zone list)
    #[arg(short, long = "zone")]
    zones: Vec<String>,

    /// Sweep every accessible project instead of the configured set
    #[arg(long)]
    all_projects: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return None;
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("vmsweep started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("vmsweep").join("vmsweep.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".vmsweep").join("vmsweep.log");
    }
    PathBuf::from("vmsweep.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let config = Config::load();
    let zones = config.effective_zones(&args.zones);

    let client = GcpClient::new().await?;

    let project_ids = if args.all_projects {
        match projects::list_project_ids(&client).await {
            Ok(ids) if !ids.is_empty() => {
                tracing::info!("Discovered {} projects", ids.len());
                ids
            }
            Ok(_) => {
                tracing::warn!("No projects discovered, falling back to configured set");
                config.effective_projects(&args.projects)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to discover projects: {}, falling back to configured set",
                    e
                );
                config.effective_projects(&args.projects)
            }
        }
    } else {
        config.effective_projects(&args.projects)
    };

    if project_ids.is_empty() {
        anyhow::bail!(
            "No GCP project configured. Set GOOGLE_CLOUD_PROJECT, pass --project, or add projects to the config file"
        );
    }

    tracing::info!(
        "Sweeping {} project(s) across {} zone(s)",
        project_ids.len(),
        zones.len()
    );

    let lister = Arc::new(ComputeInstanceLister::new(client));
    let sweeper = Sweeper::new(lister, zones);
    let listings = sweeper.list_all(&project_ids).await?;

    let failed = listings.iter().filter(|l| l.outcome.is_failed()).count();
    if failed > 0 {
        tracing::warn!("{} of {} partitions failed", failed, listings.len());
    }

    let output = render_listings(&listings);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

/// Marshal the aggregate with the wire field names consumers expect
fn render_listings(listings: &[ZoneListing]) -> Value {
    Value::Array(
        listings
            .iter()
            .map(|listing| match &listing.outcome {
                ListOutcome::Page(page) => json!({
                    "projectID": listing.project_id,
                    "zone": listing.zone,
                    "instances": page.instances,
                    "cursor": page.next_page_token.clone().unwrap_or_default(),
                    "err": Value::Null,
                }),
                ListOutcome::Failed(err) => json!({
                    "projectID": listing.project_id,
                    "zone": listing.zone,
                    "instances": Value::Null,
                    "cursor": "",
                    "err": format_gcp_error(err),
                }),
            })
            .collect(),
    )
}
