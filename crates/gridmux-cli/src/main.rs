//! gridmux CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gridmux_cli::cli::Cli;
use gridmux_cli::commands::{self, CliError};
use gridmux_tmux::TmuxError;

/// Exit status for interrupted builds, distinct from generic failure.
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = commands::execute(cli.command) {
        if matches!(e, CliError::Tmux(TmuxError::Interrupted)) {
            tracing::info!("gracefully shutting down");
            std::process::exit(EXIT_INTERRUPTED);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
