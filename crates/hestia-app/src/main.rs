mod cli;
mod dashboard;
mod run;
mod surface;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hestia_common::types::PixelRect;
use hestia_common::ConfigError;
use hestia_config::{toml_loader, HestiaConfig, JsonFileStore, PaletteCatalog};
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::dashboard::Dashboard;
use crate::surface::TerminalSurface;

fn load_config(path: Option<&str>) -> Result<HestiaConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_or_create(Path::new(path)),
        None => toml_loader::load_default(),
    }
}

fn resolve_data_dir(arg: Option<&str>, config: &HestiaConfig) -> Result<PathBuf, ConfigError> {
    match (arg, &config.storage.data_dir) {
        (Some(dir), _) => Ok(PathBuf::from(dir)),
        (None, Some(dir)) => Ok(dir.clone()),
        (None, None) => toml_loader::default_data_dir(),
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read first so its log level can seed the filter
    let (config, load_error) = match load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (HestiaConfig::default(), Some(e)),
    };

    // Initialize logging
    let default_directive = format!("hestia={}", config.logging.level.as_str());
    let log_directive = args.log_level.as_deref().unwrap_or(&default_directive);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "hestia=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("Hestia v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let catalog = hestia_config::load_catalog(&config).unwrap_or_else(|e| {
        tracing::warn!("Palette directory unreadable, using built-ins: {e}");
        PaletteCatalog::builtin()
    });
    tracing::info!("Palette catalog loaded ({} palettes)", catalog.len());

    let data_dir = match resolve_data_dir(args.data_dir.as_deref(), &config) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("No data directory available: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Data directory: {}", data_dir.display());

    let bounds = PixelRect {
        x: 0.0,
        y: 0.0,
        width: config.surface.grid_width,
        height: config.surface.grid_height,
    };
    let show_theme = args.show_theme || config.surface.show_theme;
    let surface = TerminalSurface::stdout(bounds, show_theme);
    let mut dashboard = Dashboard::boot(&config, catalog, JsonFileStore::new(data_dir), surface);

    let command = args.command.unwrap_or(Command::Show { json: false });
    let report = run::execute(&mut dashboard, command);

    match report.text {
        Some(text) => print!("{text}"),
        None => {
            if let Err(e) = dashboard.surface_mut().present() {
                tracing::error!("Failed to draw dashboard: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(notice) = dashboard.last_notice() {
        tracing::debug!(level = %notice.level, "last notice: {}", notice.message);
    }
    if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
