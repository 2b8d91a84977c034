//! Provider response data structures.

use serde::Deserialize;
use serde_json::Value;

/// Fields returned by the provider for a successful query.
///
/// Values are kept exactly as the provider sent them, whatever their JSON
/// type, so an unexpected type in one field never fails the lookup. Absent
/// and `null` values both become `None` and are rendered as `N/A`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Country name
    pub country: Option<Value>,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<Value>,
    /// Region or state short code
    pub region: Option<Value>,
    /// Region or state name
    pub region_name: Option<Value>,
    /// City
    pub city: Option<Value>,
    /// Postal code
    pub zip: Option<Value>,
    /// Latitude
    pub lat: Option<Value>,
    /// Longitude
    pub lon: Option<Value>,
    /// IANA time zone
    pub timezone: Option<Value>,
    /// Internet service provider
    pub isp: Option<Value>,
    /// Organization name
    pub org: Option<Value>,
    /// Autonomous system, e.g. `AS15169 Google LLC`
    #[serde(rename = "as")]
    pub asn: Option<Value>,
    /// The address the provider answered for
    pub query: Option<Value>,
}

/// Envelope of every provider response, successful or not.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderResponse {
    /// `success` or `fail`
    pub status: Option<Value>,
    pub message: Option<Value>,
    #[serde(flatten)]
    pub result: LookupResult,
}

/// Display text of a provider value: strings without quotes, anything else as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
