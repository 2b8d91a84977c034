//! Geolocation lookup against the ip-api.com JSON endpoint.

mod lookup;
mod types;

// Re-export public API
pub use lookup::{parse_response, Locator};
pub use types::{value_text, LookupResult};
