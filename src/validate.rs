//! Address validation.
//!
//! Purely syntactic: no DNS resolution and no reachability check.

use std::net::IpAddr;

use log::debug;

use crate::error_handling::ValidationError;

/// Parses `text` as an IPv4 dotted-quad or IPv6 colon-hex literal.
///
/// Surrounding whitespace, CIDR suffixes, and IPv6 zone identifiers are rejected.
pub fn parse_address(text: &str) -> Result<IpAddr, ValidationError> {
    text.parse::<IpAddr>().map_err(|e| {
        debug!("Rejected address {text:?}: {e}");
        ValidationError {
            input: text.to_string(),
        }
    })
}

/// Returns true iff `text` is a syntactically valid IPv4 or IPv6 address.
///
/// ```
/// use ip_location::is_valid_address;
///
/// assert!(is_valid_address("8.8.8.8"));
/// assert!(is_valid_address("::1"));
/// assert!(!is_valid_address("8.8.8.256"));
/// ```
pub fn is_valid_address(text: &str) -> bool {
    parse_address(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4() {
        assert!(is_valid_address("8.8.8.8"));
        assert!(is_valid_address("0.0.0.0"));
        assert!(is_valid_address("255.255.255.255"));
        assert!(is_valid_address("192.168.1.1"));
    }

    #[test]
    fn test_valid_ipv6() {
        assert!(is_valid_address("::1"));
        assert!(is_valid_address("::"));
        assert!(is_valid_address("2001:4860:4860::8888"));
        assert!(is_valid_address("fe80::1"));
        assert!(is_valid_address("::ffff:192.0.2.1"));
    }

    #[test]
    fn test_out_of_range_octet() {
        assert!(!is_valid_address("8.8.8.256"));
    }

    #[test]
    fn test_malformed_ipv4() {
        assert!(!is_valid_address("8.8.8"));
        assert!(!is_valid_address("8.8.8.8.8"));
        assert!(!is_valid_address("8.8..8"));
        assert!(!is_valid_address("01.1.1.1"));
        assert!(!is_valid_address("-1.1.1.1"));
    }

    #[test]
    fn test_malformed_ipv6() {
        assert!(!is_valid_address("2001:db8::g"));
        assert!(!is_valid_address("1::2::3"));
        assert!(!is_valid_address(":::"));
        assert!(!is_valid_address("fe80::1%eth0"));
    }

    #[test]
    fn test_non_address_strings() {
        assert!(!is_valid_address("not-an-ip"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("google.com"));
        assert!(!is_valid_address("localhost"));
        assert!(!is_valid_address("10.0.0.0/8"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(!is_valid_address(" 8.8.8.8"));
        assert!(!is_valid_address("8.8.8.8\n"));
    }

    #[test]
    fn test_parse_address_keeps_input_on_error() {
        let err = parse_address("8.8.8.256").unwrap_err();
        assert_eq!(err.input, "8.8.8.256");
        assert_eq!(
            parse_address("::1").ok(),
            Some("::1".parse::<IpAddr>().unwrap())
        );
    }
}
