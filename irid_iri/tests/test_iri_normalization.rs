pub mod common;
pub use common::*;

use proptest::prelude::*;
use irid_iri::Iri;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_case_conversion() {
    parse_and_compare("hTTp://example.com", "http://example.com");
    parse_and_compare("http://ExAmPlE.CoM", "http://example.com");
}

#[test]
fn test_default_port_dropped_on_parse() {
    parse_and_compare("http://example.com:80", "http://example.com");
    parse_and_compare("https://example.com:443/a", "https://example.com/a");
    parse_and_compare("ssh://127.0.0.1:22", "ssh://127.0.0.1");
}

#[test]
fn test_non_default_port_retained() {
    parse_and_compare("http://example.com:8080", "http://example.com:8080");
}

#[test]
fn test_no_authority_schemes_unaffected() {
    parse_and_compare("mailto:john.doe@example.com", "mailto:john.doe@example.com");
    parse_and_compare("tel:555-555-5555", "tel:555-555-5555");
}

#[test]
fn test_query_sorted_on_parse() {
    parse_and_compare("http://example.com?b=2&a=1", "http://example.com?a=1&b=2");
}

// ------------------------------------------------------------------------------------------------
// Automated Property Tests
// ------------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn doesnt_crash(s in "\\PC*") {
        let _ = Iri::from_str(&s);
    }

    #[test]
    fn round_trips_through_as_uri_and_as_string(s in "\\PC*") {
        if let Ok(iri) = Iri::from_str(&s) {
            prop_assert_eq!(Iri::from_str(&iri.as_uri()).unwrap(), iri.clone());
            prop_assert_eq!(Iri::from_str(&iri.as_string()).unwrap(), iri);
        }
    }
}
