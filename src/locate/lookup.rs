//! Provider lookup.
//!
//! One GET per run against `{api_url}{address}`, no retries.

use log::{debug, info, warn};

use super::types::{value_text, LookupResult, ProviderResponse};
use crate::config::{Config, PROVIDER_STATUS_SUCCESS};
use crate::error_handling::{InitializationError, LocateError};
use crate::initialization::init_client;

/// Client for the geolocation provider.
#[derive(Debug, Clone)]
pub struct Locator {
    client: reqwest::Client,
    api_url: String,
}

impl Locator {
    /// Builds a locator with its own HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::with_client(client, &config.api_url))
    }

    /// Builds a locator around an existing client.
    pub fn with_client(client: reqwest::Client, api_url: &str) -> Self {
        let api_url = if api_url.ends_with('/') {
            api_url.to_string()
        } else {
            format!("{api_url}/")
        };
        Self { client, api_url }
    }

    /// Full request URL for `address`.
    pub fn endpoint(&self, address: &str) -> String {
        format!("{}{}", self.api_url, address)
    }

    /// Looks up `address`, which the caller has already validated.
    ///
    /// # Errors
    ///
    /// - `LocateError::Network` if the request cannot be completed, times out,
    ///   or the provider answers with a non-2xx status
    /// - `LocateError::Provider` if the provider reports a status other than `success`
    /// - `LocateError::Protocol` if the body is not the expected JSON object
    pub async fn fetch_location(&self, address: &str) -> Result<LookupResult, LocateError> {
        let url = self.endpoint(address);
        info!("Looking up {address}");
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failure(&url, &e))?;

        debug!("Provider answered {}", response.status());
        let response = response
            .error_for_status()
            .map_err(|e| transport_failure(&url, &e))?;

        let body = response
            .text()
            .await
            .map_err(|e| transport_failure(&url, &e))?;

        parse_response(&body)
    }
}

fn transport_failure(url: &str, error: &reqwest::Error) -> LocateError {
    if error.is_timeout() {
        warn!("Request to {url} timed out");
    } else {
        debug!("Request to {url} failed: {error}");
    }
    LocateError::from_transport(error)
}

/// Maps a provider body to a result or a provider/protocol error.
pub fn parse_response(body: &str) -> Result<LookupResult, LocateError> {
    let response: ProviderResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Provider body is not a lookup object: {e}");
        LocateError::from(e)
    })?;

    let status = response.status.as_ref().and_then(|status| status.as_str());
    if status != Some(PROVIDER_STATUS_SUCCESS) {
        debug!(
            "Provider reported status {:?}: {:?}",
            response.status, response.message
        );
        return Err(LocateError::provider(response.message.as_ref().map(value_text)));
    }

    Ok(response.result)
}
