// Shared test helpers for provider mocking and output capture.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::TcpListener;

use ip_location::{run, Command, Config, Locator};
use regex::Regex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Provider body for 8.8.8.8 as ip-api.com returns it.
#[allow(dead_code)] // Used by other test files
pub const GOOGLE_DNS_BODY: &str = r#"{
    "status": "success",
    "country": "United States",
    "countryCode": "US",
    "region": "VA",
    "regionName": "Virginia",
    "city": "Ashburn",
    "zip": "20149",
    "lat": 37.751,
    "lon": -97.822,
    "timezone": "America/Chicago",
    "isp": "Google LLC",
    "org": "Google Public DNS",
    "as": "AS15169 Google LLC",
    "query": "8.8.8.8"
}"#;

/// Removes ANSI color escapes so assertions work whether or not colors are on.
#[allow(dead_code)] // Used by other test files
pub fn strip_ansi(text: &str) -> String {
    let re = Regex::new(r"\x1b\[[0-9;]*m").expect("valid regex");
    re.replace_all(text, "").into_owned()
}

/// Config pointing at a mock provider's `/json/` endpoint.
pub fn mock_config(server: &MockServer, timeout_seconds: u64) -> Config {
    Config {
        api_url: format!("{}/json/", server.uri()),
        timeout_seconds,
        user_agent: "ip_location_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Locator for a mock provider with the given timeout.
pub fn mock_locator(server: &MockServer, timeout_seconds: u64) -> Locator {
    Locator::new(&mock_config(server, timeout_seconds)).expect("Failed to build locator")
}

/// Mounts a JSON answer for `address` that must be requested exactly `times` times.
#[allow(dead_code)] // Used by other test files
pub async fn mount_answer(server: &MockServer, address: &str, status: u16, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/json/{address}")))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "application/json")
                .set_body_string(body),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Locator for a local port nothing is listening on.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_locator() -> Locator {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);

    let config = Config {
        api_url: format!("http://127.0.0.1:{port}/json/"),
        timeout_seconds: 5,
        ..Default::default()
    };
    Locator::new(&config).expect("Failed to build locator")
}

/// Runs `command` and returns the exit code and the plain-text output.
#[allow(dead_code)] // Used by other test files
pub async fn run_captured(command: Command, locator: &Locator) -> (i32, String) {
    let mut out = Vec::new();
    let code = run(command, locator, &mut out)
        .await
        .expect("Writing to a Vec should not fail");
    let text = String::from_utf8(out).expect("Output should be UTF-8");
    (code, strip_ansi(&text))
}
