//! relq - Relationship Query Tool.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; control with RUST_LOG, e.g. RUST_LOG=relq=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relq=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Parse command line arguments
    let args = relq::Args::parse();

    // Disable colors if requested
    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic
    match relq::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}: {}", "error".red(), e);

            // Return appropriate exit code
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
