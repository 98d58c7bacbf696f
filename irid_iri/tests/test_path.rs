use irid_iri::Path;
use proptest::prelude::*;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_remove_dot_segments_rfc3986_examples() {
    assert_eq!(
        Path::from_str("/a/b/c/./../../g").unwrap().remove_dot_segments().to_string(),
        "/a/g"
    );
    assert_eq!(
        Path::from_str("mid/content=5/../6").unwrap().remove_dot_segments().to_string(),
        "mid/6"
    );
}

#[test]
fn test_reverse_is_involution_on_examples() {
    for s in ["/a/b/c", "a/b", "/", "", "//a//b/"] {
        let p = Path::from_str(s).unwrap();
        assert_eq!(p.reverse().reverse(), p, "failed for {s:?}");
    }
}

#[test]
fn test_prepend_merges_touching_segments() {
    let base = Path::from_str("/a/b/c/def").unwrap();
    let tail = Path::from_str("ghi/f").unwrap();
    assert_eq!(tail.prepend(&base).to_string(), "/a/b/c/defghi/f");
}

#[test]
fn test_prepend_with_slash_boundary_does_not_merge() {
    let base = Path::from_str("/a/b/").unwrap();
    let tail = Path::from_str("c/d").unwrap();
    assert_eq!(tail.prepend(&base).to_string(), "/a/b/c/d");
}

// ------------------------------------------------------------------------------------------------
// Automated Property Tests
// ------------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn doesnt_crash(s in "\\PC*") {
        let _ = Path::from_str(&s);
    }

    #[test]
    fn remove_dot_segments_is_idempotent(s in "(/?([a-z]{1,3}|\\.|\\.\\.)(/([a-z]{1,3}|\\.|\\.\\.))*/?)") {
        if let Ok(p) = Path::from_str(&s) {
            let once = p.remove_dot_segments();
            let twice = once.remove_dot_segments();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn reverse_reverse_is_identity(s in "(/?[a-z]{1,3}(/[a-z]{1,3})*/?)") {
        if let Ok(p) = Path::from_str(&s) {
            prop_assert_eq!(p.reverse().reverse(), p);
        }
    }
}
