use irid_iri::{Host, Port};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_named_host_lowercased() {
    let h = Host::parse("ExAmPlE.CoM").unwrap();
    assert_eq!(h.as_string(), "example.com");
}

#[test]
fn test_ipv4_literal() {
    let h = Host::parse("127.0.0.1").unwrap();
    assert_eq!(h.to_string(), "127.0.0.1");
}

#[test]
fn test_ipv6_literal() {
    let h = Host::parse("[::1]").unwrap();
    assert_eq!(h.to_string(), "[::1]");
}

#[test]
fn test_named_host_equality_is_case_insensitive() {
    assert_eq!(Host::parse("Example.com").unwrap(), Host::parse("example.COM").unwrap());
}

#[test]
fn test_port_range() {
    assert!(Port::from_str("80").is_ok());
    assert!(Port::from_str("65536").is_err());
    assert!(Port::from_str("-1").is_err());
    assert!(Port::from_str("abc").is_err());
}

#[test]
fn test_port_value_round_trips() {
    let p = Port::from_str("8080").unwrap();
    assert_eq!(p.value(), 8080);
    assert_eq!(p.to_string(), "8080");
}
