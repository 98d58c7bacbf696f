use irid_iri::Iri;
use std::str::FromStr;

fn parse_urn(s: &str) -> irid_iri::Urn {
    match Iri::from_str(s).unwrap() {
        Iri::Urn(u) => u,
        other => panic!("expected a Urn, got {other:?}"),
    }
}

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_nid_is_lowercased() {
    let urn = parse_urn("urn:EXAMPLE:foo");
    assert_eq!(urn.nid().value(), "example");
}

#[test]
fn test_r_before_q_on_the_wire_round_trips() {
    let urn = parse_urn("urn:example:foo?+r-content?=q-content");
    assert_eq!(urn.to_string(), "urn:example:foo?+r-content?=q-content");
}

#[test]
fn test_q_before_r_on_the_wire_is_reordered() {
    let urn = parse_urn("urn:example:foo?=q-content?+r-content");
    assert_eq!(urn.to_string(), "urn:example:foo?+r-content?=q-content");
}

#[test]
fn test_r_component_only() {
    let urn = parse_urn("urn:example:foo?+r-content");
    assert_eq!(urn.components().r_component().unwrap().value(), "r-content");
    assert!(urn.components().q_component().is_none());
}

#[test]
fn test_q_component_only() {
    let urn = parse_urn("urn:example:foo?=q-content");
    assert_eq!(urn.components().q_component().unwrap().value(), "q-content");
    assert!(urn.components().r_component().is_none());
}

#[test]
fn test_fragment_follows_q_component() {
    let urn = parse_urn("urn:example:foo?=q-content#frag");
    assert_eq!(urn.fragment().unwrap().value(), "frag");
    assert_eq!(urn.to_string(), "urn:example:foo?=q-content#frag");
}

#[test]
fn test_nid_syntax_is_validated() {
    assert!(Iri::from_str("urn:-bad:foo").is_err());
}
