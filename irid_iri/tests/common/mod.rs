use irid_iri::Iri;
use std::str::FromStr;

pub fn parse_success(iri: &str) {
    println!("> parse_success({:?})", iri);
    let result = Iri::from_str(iri);
    assert!(result.is_ok(), "{:?} should parse", iri);
}

pub fn parse_failure(iri: &str) {
    println!("> parse_failure({:?})", iri);
    let result = Iri::from_str(iri);
    assert!(result.is_err(), "{:?} should not parse", iri);
}

pub fn parse_and_compare(iri: &str, compare_to: &str) {
    println!("> parse_and_compare({:?} == {:?})", iri, compare_to);
    let parsed = Iri::from_str(iri).unwrap();
    assert_eq!(parsed.to_string(), compare_to);
}
