pub mod common;
pub use common::*;

use irid_iri::{Iri, Path};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Scenario 1: case normalization and default port
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_1_case_normalization_and_default_port() {
    parse_and_compare(
        "hTtps://me:me@hOst:443/a/b?a&e=f&b=c#frag",
        "https://me:me@host/a/b?a&b=c&e=f#frag",
    );
}

// ------------------------------------------------------------------------------------------------
// Scenario 2: percent-decoded IRI form vs URI form
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_2_iri_form_vs_uri_form() {
    let iri = Iri::from_str("hTtp://hOst%C2%A3:80/a%C2%A3/b%C3%86c//:://").unwrap();
    assert!(iri.is_url());
    assert_eq!(iri.as_string(), "http://host£/a£/bÆc//:://");
    assert_eq!(iri.as_uri(), "http://host%C2%A3/a%C2%A3/b%C3%86c//:://");
}

// ------------------------------------------------------------------------------------------------
// Scenario 3: URN parsing and r/q reordering
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_3_urn_r_q_reordering() {
    parse_and_compare(
        "urn:examp-lE:foo-bar-baz-qux?=a=b?+CCResolve:cc=uk",
        "urn:examp-le:foo-bar-baz-qux?+CCResolve:cc=uk?=a=b",
    );
}

// ------------------------------------------------------------------------------------------------
// Scenario 4: URN equality across NID casing
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_4_urn_equality_ignores_nid_casing() {
    fn parse_urn(s: &str) -> irid_iri::Urn {
        match Iri::from_str(s).unwrap() {
            Iri::Urn(u) => u,
            _ => panic!("expected a Urn"),
        }
    }
    let a = parse_urn("urn:examp-lE:foo-bar-baz-qux");
    let b = parse_urn("urn:examp-le:foo-bar-baz-qux");
    assert_eq!(a, b);
}

// ------------------------------------------------------------------------------------------------
// Scenario 5: dot-segment removal
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_5_dot_segment_removal() {
    let p = Path::from_str("/a/b/../c/").unwrap();
    assert_eq!(p.remove_dot_segments().to_string(), "/a/c/");

    let p = Path::from_str("/../../../").unwrap();
    assert_eq!(p.remove_dot_segments().to_string(), "/");

    let p = Path::from_str("/a//../b/./c/./").unwrap();
    assert_eq!(p.remove_dot_segments().to_string(), "/a/b/c/");
}

// ------------------------------------------------------------------------------------------------
// Scenario 6: path join
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_6_path_join() {
    let base = Path::from_str("/a/b/c/d").unwrap();
    let tail = Path::from_str("/e/f").unwrap();
    assert_eq!(tail.prepend(&base).to_string(), "/a/b/c/d/e/f");

    let base = Path::from_str("/a/b/c/def").unwrap();
    let tail = Path::from_str("ghi/f").unwrap();
    assert_eq!(tail.prepend(&base).to_string(), "/a/b/c/defghi/f");
}
