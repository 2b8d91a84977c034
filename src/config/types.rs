//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of diagnostics written to stderr, from most
/// restrictive (Error) to most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use ip_location::Config;
///
/// let config = Config {
///     api_url: "http://127.0.0.1:8080/json/".to_string(),
///     timeout_seconds: 2,
///     ..Default::default()
/// };
/// assert_eq!(config.timeout_seconds, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider base URL; the address is appended to it
    pub api_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// Options accepted after the command.
///
/// The command itself (`-h/--help` or `-I/--ip <address>`) is taken from the
/// leading arguments by the driver; clap only parses what follows it. Its
/// generated help and version flags are disabled because the driver prints
/// the decorated help screen.
///
/// ```bash
/// ip_location --ip 8.8.8.8 --timeout-seconds 3 --log-level debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ip_location",
    about = "Looks up geolocation information for an IP address.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, hide = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, hide = true)]
    pub log_format: LogFormat,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, hide = true)]
    pub timeout_seconds: u64,

    /// Trailing words after the command; ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            timeout_seconds: cli.timeout_seconds,
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
            ..Default::default()
        }
    }
}
