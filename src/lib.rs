//! ip_location library: geolocation lookup for a single IP address
//!
//! Validates an IPv4/IPv6 literal locally, asks the ip-api.com JSON endpoint
//! where it is, and renders the answer as a colored table with a map link.
//!
//! # Example
//!
//! ```no_run
//! use ip_location::{parse_args, run, Locator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (command, config) = parse_args(["ip_location", "--ip", "8.8.8.8"]);
//! let locator = Locator::new(&config)?;
//! let mut out = Vec::new();
//! let code = run(command, &locator, &mut out).await?;
//! assert_eq!(code, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The lookup is async and needs a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod driver;
pub mod error_handling;
pub mod initialization;
mod locate;
pub mod output;
mod validate;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use driver::{parse_args, run, Command};
pub use error_handling::{AppError, LocateError, UsageError, ValidationError};
pub use locate::{parse_response, Locator, LookupResult};
pub use validate::{is_valid_address, parse_address};
