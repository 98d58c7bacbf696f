/*!
Parsing entry points. The generic (URL-shaped) grammar is split into its five top-level
components with the RFC 3986 Appendix B regex, then each piece is handed to its own component
parser; the URN grammar (RFC 8141) is split by hand since its shape after the scheme is
fundamentally different (`nid:nss[?+r][?=q][#f]` rather than `//authority/path?query`).
*/

use crate::authority::{Authority, Host, UserInfo};
use crate::error::{Component as ErrComponent, ErrorKind, Result};
use crate::fragment::Fragment;
use crate::path::Path;
use crate::query::Query;
use crate::scheme::Scheme;
use crate::urn::{Nid, UrnComponent, UrnComponents};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // RFC 3986 Appendix B.
    static ref RE_GENERIC: Regex =
        Regex::new(r"^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?$").unwrap();
    static ref RE_URN_SCHEME: Regex = Regex::new(r"(?i)^urn$").unwrap();
}

/// The five top-level components of a generic (URL-shaped) reference, still as raw
/// (percent-encoded) substrings.
pub(crate) struct GenericParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

pub(crate) fn split_generic(s: &str) -> GenericParts<'_> {
    let caps = RE_GENERIC.captures(s).expect("Appendix B regex always matches");
    GenericParts {
        scheme: caps.get(2).map(|m| m.as_str()),
        authority: caps.get(4).map(|m| m.as_str()),
        path: caps.get(5).map(|m| m.as_str()).unwrap_or(""),
        query: caps.get(7).map(|m| m.as_str()),
        fragment: caps.get(9).map(|m| m.as_str()),
    }
}

/// `true` if `s` names the `urn` scheme (RFC 8141), independent of case.
pub(crate) fn is_urn_scheme(s: &str) -> bool {
    RE_URN_SCHEME.is_match(s)
}

pub(crate) fn parse_authority(raw: &str) -> Result<Authority> {
    let (user_info_part, host_port_part) = match raw.rsplit_once('@') {
        Some((ui, rest)) => (Some(ui), rest),
        None => (None, raw),
    };
    let user_info = match user_info_part {
        None => None,
        Some(ui) => {
            if !crate::authority::is_iuserinfo(ui) {
                return Err(ErrorKind::ParseError("userinfo".to_string(), 0).into());
            }
            let (user_name, password) = match ui.split_once(':') {
                Some((u, p)) => (u, Some(p)),
                None => (ui, None),
            };
            Some(UserInfo::new_unchecked(
                crate::pct_encoding::decode_component(user_name, ErrComponent::Authority)?,
                password
                    .map(|p| crate::pct_encoding::decode_component(p, ErrComponent::Authority))
                    .transpose()?,
            ))
        }
    };

    let (host_part, port_part) = if let Some(bracket_end) = host_port_part.find(']') {
        let (host, rest) = host_port_part.split_at(bracket_end + 1);
        let port = rest.strip_prefix(':');
        (host, port)
    } else {
        match host_port_part.rsplit_once(':') {
            Some((h, p)) => (h, Some(p)),
            None => (host_port_part, None),
        }
    };

    let host = Host::parse(host_part)?;
    let port = port_part
        .filter(|p| !p.is_empty())
        .map(|p| p.parse())
        .transpose()?;

    Ok(Authority::new(user_info, host, port))
}

pub(crate) fn parse_path(raw: &str) -> Result<Path> {
    raw.parse()
}

pub(crate) fn parse_query(raw: Option<&str>) -> Result<Option<Query>> {
    raw.map(|q| q.parse()).transpose()
}

pub(crate) fn parse_fragment(raw: Option<&str>) -> Result<Option<Fragment>> {
    raw.map(|f| f.parse()).transpose()
}

pub(crate) fn parse_scheme(raw: Option<&str>) -> Result<Option<Scheme>> {
    raw.map(|s| s.parse()).transpose()
}

/// The parsed components of a `urn:nid:nss[?+r][?=q][#fragment]` reference, not including the
/// leading `urn:` scheme token itself.
pub(crate) struct UrnParts {
    pub nid: Nid,
    pub components: UrnComponents,
    pub fragment: Option<Fragment>,
}

/// Splits the part of a URN body after `nid:` into `(nss, r-component, q-component)`. The first
/// marker encountered (`?+` or `?=`) ends the NSS; whichever of the two markers appears can be
/// followed by the other, in either order, each running to the next marker or to the end of the
/// string.
fn split_rq_components(rest: &str) -> (&str, Option<&str>, Option<&str>) {
    let first_plus = rest.find("?+");
    let first_eq = rest.find("?=");
    let first = match (first_plus, first_eq) {
        (Some(p), Some(q)) => Some(p.min(q)),
        (Some(p), None) => Some(p),
        (None, Some(q)) => Some(q),
        (None, None) => None,
    };
    let Some(first) = first else {
        return (rest, None, None);
    };
    let nss = &rest[..first];
    let after = &rest[first + 2..];
    let first_is_r = rest[first..].starts_with("?+");
    let other_marker = if first_is_r { "?=" } else { "?+" };
    match after.find(other_marker) {
        Some(j) => {
            let first_comp = &after[..j];
            let second_comp = &after[j + 2..];
            if first_is_r {
                (nss, Some(first_comp), Some(second_comp))
            } else {
                (nss, Some(second_comp), Some(first_comp))
            }
        }
        None => {
            if first_is_r {
                (nss, Some(after), None)
            } else {
                (nss, None, Some(after))
            }
        }
    }
}

pub(crate) fn parse_urn_body(body: &str) -> Result<UrnParts> {
    let (without_fragment, fragment_raw) = match body.split_once('#') {
        Some((b, f)) => (b, Some(f)),
        None => (body, None),
    };
    let (nid_str, rest) = without_fragment
        .split_once(':')
        .ok_or_else(|| -> crate::error::Error { ErrorKind::ParseError("urn-nid".to_string(), 0).into() })?;
    let nid: Nid = nid_str.parse()?;

    // nss, then the optional r-component (`?+`) and q-component (`?=`) in whichever order they
    // actually appear on the wire; rendering always puts r before q regardless.
    let (nss_raw, r_raw, q_raw) = split_rq_components(rest);

    if nss_raw.is_empty() {
        return Err(ErrorKind::IsEmpty(ErrComponent::Path).into());
    }
    let nss = crate::pct_encoding::decode_component(nss_raw, ErrComponent::Path)?;
    let r_component = r_raw.map(|r| r.parse::<UrnComponent>()).transpose()?;
    let q_component = q_raw.map(|q| q.parse::<UrnComponent>()).transpose()?;
    let fragment = parse_fragment(fragment_raw)?;

    Ok(UrnParts {
        nid,
        components: UrnComponents::new(nss, r_component, q_component),
        fragment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_r_then_q() {
        assert_eq!(
            split_rq_components("foo?+abc?=def"),
            ("foo", Some("abc"), Some("def"))
        );
    }

    #[test]
    fn splits_q_then_r() {
        assert_eq!(
            split_rq_components("foo-bar-baz-qux?=a=b?+CCResolve:cc=uk"),
            ("foo-bar-baz-qux", Some("CCResolve:cc=uk"), Some("a=b"))
        );
    }

    #[test]
    fn splits_r_only() {
        assert_eq!(split_rq_components("foo?+abc"), ("foo", Some("abc"), None));
    }

    #[test]
    fn splits_q_only() {
        assert_eq!(split_rq_components("foo?=abc"), ("foo", None, Some("abc")));
    }

    #[test]
    fn splits_neither() {
        assert_eq!(split_rq_components("foo"), ("foo", None, None));
    }
}
