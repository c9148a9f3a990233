mod app_state;
mod assets;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use boxes_config::BoxesConfig;
use boxes_platform::{resolve_asset_dir, AssetPaths};

const DEFAULT_LOG_DIRECTIVE: &str = "boxes=info";

/// Pick the log directive: the CLI flag wins over the config file.
fn log_directive(flag: Option<&str>, config: &BoxesConfig) -> String {
    match flag {
        Some(level) => level.to_string(),
        None if !config.logging.level.is_empty() => format!("boxes={}", config.logging.level),
        None => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

fn main() {
    let args = cli::parse();

    // Config is read before logging is up so its level can apply; the
    // outcome is logged once the subscriber exists.
    let loaded = match args.config.as_deref() {
        Some(path) => boxes_config::load_config_from(Path::new(path)),
        None => boxes_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (BoxesConfig::default(), Some(e)),
    };

    let directive = log_directive(args.log_level.as_deref(), &config);
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Boxes v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let asset_dir = args.assets.as_deref().unwrap_or(&config.assets.directory);
    let asset_paths = AssetPaths::new(resolve_asset_dir(asset_dir));
    tracing::info!(path = %asset_paths.root.display(), "asset directory");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::BoxesApp::new(config, asset_paths);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
