//! Shellpad CLI
//!
//! Diagnostics and live-monitor entry points for the unified input layer.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod monitor;

use shellpad::config::AppConfig;
use shellpad::input::diagnostics::print_gamepad_diagnostics;
use shellpad::input::InputManager;

/// Shellpad - unified gamepad + keyboard input layer for a console-style shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enumerate connected gamepads and their current state
    #[arg(long)]
    diagnostics: bool,

    /// Stop the monitor after this many seconds (0 = run until killed)
    #[arg(long, default_value = "0")]
    duration: u64,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("Starting Shellpad...");
    info!("Configuration file: {}", args.config);

    if args.diagnostics {
        print_gamepad_diagnostics();
        return Ok(());
    }

    let config = AppConfig::load(&args.config)?;
    let input = InputManager::new(&config.input);

    monitor::run(input, &config.monitor, args.duration)?;

    info!("Shellpad shutdown complete");
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
