//! Error type definitions.
//!
//! This module defines every error a run can end with. Each class maps to a
//! distinct process exit code so scripts can tell them apart.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::{PROVIDER_MALFORMED_RESPONSE, PROVIDER_UNKNOWN_ERROR};

/// Exit code for a successful lookup or a help screen.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when logger or HTTP client setup fails.
pub const EXIT_INITIALIZATION: i32 = 1;
/// Exit code for missing or unrecognized arguments.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for an address that is not an IPv4/IPv6 literal.
pub const EXIT_VALIDATION: i32 = 3;
/// Exit code when the provider could not be reached.
pub const EXIT_NETWORK: i32 = 4;
/// Exit code when the provider answered with a failure or an unreadable body.
pub const EXIT_PROVIDER: i32 = 5;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Problems with the shape of the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `-I/--ip` was given without an address.
    #[error("Missing IP address")]
    MissingAddress,

    /// The arguments were not recognized.
    #[error("Invalid argument")]
    InvalidArgument,
}

/// The supplied address is not an IPv4 or IPv6 literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid IP address format")]
pub struct ValidationError {
    /// The rejected input, kept for logging.
    pub input: String,
}

/// Failures of the single provider lookup.
///
/// No variant is retried; the first failure ends the run.
#[derive(Error, Debug)]
pub enum LocateError {
    /// The request could not be completed (DNS, connect, reset, timeout, non-2xx status).
    #[error("Connection failed: {message}")]
    Network {
        /// Transport message including its source chain
        message: String,
        /// Whether the configured timeout elapsed
        timed_out: bool,
    },

    /// The provider answered with a status other than `success`.
    #[error("API Error: {message}")]
    Provider {
        /// Provider-supplied `message`, or "Unknown error"
        message: String,
    },

    /// The response body was not the JSON object the provider documents.
    #[error("API Error: {}", PROVIDER_MALFORMED_RESPONSE)]
    Protocol(#[from] serde_json::Error),
}

impl LocateError {
    /// Builds a network error from a transport failure, flattening the source chain.
    pub fn from_transport(error: &ReqwestError) -> Self {
        let mut message = error.to_string();
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        LocateError::Network {
            message,
            timed_out: error.is_timeout(),
        }
    }

    /// Builds a provider error from the optional `message` field.
    pub fn provider(message: Option<String>) -> Self {
        LocateError::Provider {
            message: message.unwrap_or_else(|| PROVIDER_UNKNOWN_ERROR.to_string()),
        }
    }

    /// True when the provider was reached but its answer was unusable.
    pub fn is_provider_side(&self) -> bool {
        matches!(self, LocateError::Provider { .. } | LocateError::Protocol(_))
    }
}

/// Any error the driver reports to the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad command line.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Malformed address.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Provider lookup failed.
    #[error(transparent)]
    Locate(#[from] LocateError),
}

impl AppError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => EXIT_USAGE,
            AppError::Validation(_) => EXIT_VALIDATION,
            AppError::Locate(e) if e.is_provider_side() => EXIT_PROVIDER,
            AppError::Locate(_) => EXIT_NETWORK,
        }
    }

    /// Usage errors are followed by the help screen.
    pub fn shows_help(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }
}
