//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_location` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing to stdout and setting the exit code
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use ip_location::error_handling::EXIT_INITIALIZATION;
use ip_location::initialization::init_logger_with;
use ip_location::{parse_args, run, Locator};

async fn run_cli() -> Result<i32> {
    let (command, config) = parse_args(std::env::args_os());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // The result screens are always colored, terminal or not
    colored::control::set_override(true);

    let locator = Locator::new(&config).context("Failed to initialize HTTP client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = run(command, &locator, &mut out)
        .await
        .context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(code)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run_cli().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("ip_location error: {:#}", e);
            process::exit(EXIT_INITIALIZATION);
        }
    }
}
