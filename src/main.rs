#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod io;
mod model;
mod ui;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use model::{IdScheme, StoreConfig};

/// Construction project dashboard.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// How project and task ids are assigned.
    #[arg(long, value_enum, default_value_t = IdScheme::Monotonic)]
    id_scheme: IdScheme,

    /// Start with a few demonstration projects.
    #[arg(long)]
    sample: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug").
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Initialise the tracing subscriber.
///
/// `RUST_LOG` wins over `--log-level`.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = StoreConfig {
        id_scheme: cli.id_scheme,
    };
    info!(id_scheme = ?config.id_scheme, sample = cli.sample, "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("Site Dashboard"),
        ..Default::default()
    };

    let sample = cli.sample;
    eframe::run_native(
        "Site Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(app::DashboardApp::new(cc, config, sample)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
