//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Logs go to stderr so they never interleave with the rendered result on stdout.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Show the request and response handling
/// ip_location --ip 8.8.8.8 --log-level debug
///
/// # One JSON object per log line
/// ip_location --ip 8.8.8.8 --log-level info --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    // CLI-provided level takes precedence over RUST_LOG
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("ip_location", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| write_json(buf, record)),
        LogFormat::Plain => builder.format(|buf, record| write_plain(buf, record)),
    };

    // try_init() so a second initialization (tests) is an error rather than a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per line with `ts`, `level`, `target` and `msg`.
fn write_json<W: Write>(buf: &mut W, record: &log::Record) -> io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

/// `<emoji> <target> [<LEVEL>] <msg>` with colored target and level.
fn write_plain<W: Write>(buf: &mut W, record: &log::Record) -> io::Result<()> {
    let level = record.level();
    let colored_level = match level {
        log::Level::Error => level.to_string().red(),
        log::Level::Warn => level.to_string().yellow(),
        log::Level::Info => level.to_string().green(),
        log::Level::Debug => level.to_string().blue(),
        log::Level::Trace => level.to_string().purple(),
    };

    let emoji = match level {
        log::Level::Error => "❌",
        log::Level::Warn => "⚠️",
        log::Level::Info => "✔️",
        log::Level::Debug => "🔍",
        log::Level::Trace => "🔬",
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}
