//! Configuration constants.
//!
//! Defaults for the provider endpoint, request timeout and rendered output.

use std::time::Duration;

/// Base URL of the ip-api.com JSON endpoint; the address is appended to the path.
pub const DEFAULT_API_URL: &str = "http://ip-api.com/json/";

/// Per-request timeout in seconds.
///
/// The lookup is a single blocking call, so this is also the upper bound on how
/// long a run can wait for the provider.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// [`DEFAULT_TIMEOUT_SECS`] as a `Duration`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// User-Agent sent to the provider.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_location/", env!("CARGO_PKG_VERSION"));

/// Value of `status` in a successful provider response.
pub const PROVIDER_STATUS_SUCCESS: &str = "success";

/// Message used when the provider reports a failure without a `message` field.
pub const PROVIDER_UNKNOWN_ERROR: &str = "Unknown error";

/// Message used when the provider body cannot be decoded.
pub const PROVIDER_MALFORMED_RESPONSE: &str = "Malformed response from provider";

/// Zoom level used in the derived Google Maps link.
pub const MAP_ZOOM: u8 = 13;

/// Width of the dividers framing the result table.
pub const DIVIDER_WIDTH: usize = 60;

/// Placeholder rendered for fields missing from the provider response.
pub const MISSING_VALUE: &str = "N/A";

/// Name used in the help text example.
pub const PROGRAM_NAME: &str = "ip_location";
