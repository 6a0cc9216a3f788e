//! Innovant terminal catalog browser - entry point.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// TUI catalog browser for the Innovant Engineering & Academy content set.
#[derive(Parser, Debug)]
#[command(name = "innovant")]
#[command(version)]
#[command(about = "Browse the Innovant engineering and course catalog in the terminal")]
pub struct Args {
    /// Route to open at startup (e.g. "/courses/AutoCAD")
    #[arg(default_value = "/")]
    pub path: String,

    /// Skip the startup splash
    #[arg(long)]
    pub no_splash: bool,

    /// Accent theme
    #[arg(long, value_parser = ["orange", "blue", "teal"])]
    pub accent: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed, so color
    // handling is consistent throughout the application.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration with full precedence chain:
    // Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = innovant::config::load_config_with_precedence(args.config.clone())?;
        let merged = innovant::config::merge_config(config_file);
        let with_env = innovant::config::apply_env_overrides(merged);
        innovant::config::apply_cli_overrides(with_env, args.no_splash, args.accent.clone())
    };

    // Held for the life of main: dropping it flushes the log worker.
    let _log_guard = innovant::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    // A broken route table or a failed eager production aborts here,
    // before the terminal is touched.
    let table = innovant::content::site_routes()?;
    let resolver = innovant::router::PageResolver::new(table, config.defer_ticks)?;

    let splash_ticks = config.splash_ms / innovant::view::TICK_INTERVAL.as_millis() as u64;
    let state = innovant::state::AppState::new(resolver, splash_ticks, &args.path);

    let color = innovant::view::ColorConfig::from_env_and_args(args.no_color);
    let theme = innovant::view::AccentTheme::from_name(&config.accent);
    let palette = innovant::view::Palette::new(theme, color);

    innovant::view::run_app(state, palette)?;

    Ok(())
}
