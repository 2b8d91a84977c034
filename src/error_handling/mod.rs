//! Error handling.
//!
//! Errors are categorized into:
//! - **Usage**: missing or unrecognized arguments
//! - **Validation**: the address is not an IP literal
//! - **Network**: the provider could not be reached
//! - **Provider**: the provider reported a failure or sent an unreadable body
//!
//! All of them are terminal for the current invocation.

mod types;

// Re-export public API
pub use types::{
    AppError, InitializationError, LocateError, UsageError, ValidationError, EXIT_INITIALIZATION,
    EXIT_NETWORK, EXIT_PROVIDER, EXIT_SUCCESS, EXIT_USAGE, EXIT_VALIDATION,
};
