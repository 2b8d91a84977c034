//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (provider URL, timeout, output layout)
//! - CLI option types and parsing
//! - The library-level [`Config`]

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, LogFormat, LogLevel};
