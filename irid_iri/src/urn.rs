/*!
The URN-specific components defined by RFC 8141: the namespace identifier (`NID`), the
namespace-specific string (`NSS`), and the optional `r-component` / `q-component` that follow it
(`?+` and `?=` respectively). RFC 8141 fixes their relative order — `r-component` always precedes
`q-component` when both are present — regardless of the order the two were supplied to a
constructor.
*/

use crate::error::{Component as ErrComponent, ErrorKind, Result};
use crate::pct_encoding::{decode_component, encode, is_iunreserved, is_sub_delims, is_uri_path_safe};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

lazy_static! {
    static ref RE_NID: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{0,31}$").unwrap();
}

/// A URN namespace identifier, case-insensitive per RFC 8141 §2.1 and normalized to lowercase,
/// except for the reserved `urn-` prefix which formal registries treat specially (kept verbatim
/// here since this crate does not maintain a registry).
#[derive(Clone, Debug, Eq)]
pub struct Nid(String);

impl Display for Nid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if !RE_NID.is_match(s) {
            return Err(ErrorKind::DomainError(ErrComponent::Nid, s.to_string()).into());
        }
        Ok(Nid(s.to_ascii_lowercase()))
    }
}

impl PartialEq for Nid {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for Nid {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Nid {
    /// The lowercase NID text.
    pub fn value(&self) -> &str {
        &self.0
    }
}

fn is_urn_component_safe(c: char) -> bool {
    is_iunreserved(c) || is_sub_delims(c) || matches!(c, ':' | '@' | '/' | '?')
}

/// A decoded `r-component` or `q-component` value (the text after `?+` or `?=`, before the
/// fragment).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct UrnComponent(String);

impl Display for UrnComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UrnComponent {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !(crate::pct_encoding::is_correctly_escaped(s) && s.chars().all(|c| is_urn_component_safe(c) || c == '%')) {
            return Err(ErrorKind::ParseError("urn-component".to_string(), 0).into());
        }
        Ok(UrnComponent(decode_component(s, ErrComponent::UrnComponent)?))
    }
}

impl UrnComponent {
    /// Construct from an already-decoded value.
    pub fn new(value: impl Into<String>) -> Self {
        UrnComponent(value.into())
    }

    /// The decoded text.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        encode(&self.0, |c| is_uri_path_safe(c) || matches!(c, '/' | '?'))
    }
}

/// The namespace-specific string together with the optional resolution (`r-component`) and
/// query (`q-component`) parts that follow it. Rendering always places `r-component` before
/// `q-component`, per RFC 8141 §2.3, no matter which order a caller supplied them in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrnComponents {
    nss: String,
    r_component: Option<UrnComponent>,
    q_component: Option<UrnComponent>,
}

impl Display for UrnComponents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nss)?;
        if let Some(r) = &self.r_component {
            write!(f, "?+{}", r)?;
        }
        if let Some(q) = &self.q_component {
            write!(f, "?={}", q)?;
        }
        Ok(())
    }
}

impl UrnComponents {
    /// Construct from a decoded NSS and the optional r/q components, in either order — the
    /// stored, rendered order is always r before q.
    pub fn new(nss: impl Into<String>, r_component: Option<UrnComponent>, q_component: Option<UrnComponent>) -> Self {
        Self {
            nss: nss.into(),
            r_component,
            q_component,
        }
    }

    /// The decoded namespace-specific string.
    pub fn nss(&self) -> &str {
        &self.nss
    }

    /// The `r-component`, if present.
    pub fn r_component(&self) -> Option<&UrnComponent> {
        self.r_component.as_ref()
    }

    /// The `q-component`, if present.
    pub fn q_component(&self) -> Option<&UrnComponent> {
        self.q_component.as_ref()
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        let mut out = encode(&self.nss, is_uri_path_safe);
        if let Some(r) = &self.r_component {
            out.push_str("?+");
            out.push_str(&r.as_uri());
        }
        if let Some(q) = &self.q_component {
            out.push_str("?=");
            out.push_str(&q.as_uri());
        }
        out
    }
}
