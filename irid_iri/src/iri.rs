/*!
The top-level `Iri` value: either a URL-shaped reference (`Url`), a `urn:` reference (`Urn`), or
a scheme-less relative reference (`RelativeIri`). [`AbsoluteIri`] narrows this to the two variants
that carry their own scheme, which is what RFC 3986 §5.2 reference resolution requires of a base.
*/

use crate::authority::Authority;
use crate::error::{ErrorKind, Result};
use crate::fragment::Fragment;
use crate::parse::{self, GenericParts};
use crate::path::Path;
use crate::pct_encoding::{encode, is_uri_path_safe};
use crate::query::Query;
use crate::scheme::Scheme;
use crate::urn::{Nid, UrnComponents};
use std::convert::{TryFrom, TryInto};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A URL-shaped reference: `scheme:[//authority]path[?query][#fragment]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Url {
    scheme: Scheme,
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl Display for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(a) = &self.authority {
            write!(f, "//{}", a)?;
        }
        write!(f, "{}", self.path)?;
        if let Some(q) = &self.query {
            write!(f, "?{}", q)?;
        }
        if let Some(frag) = &self.fragment {
            write!(f, "#{}", frag)?;
        }
        Ok(())
    }
}

impl Url {
    /// Construct a `Url` from already-validated parts.
    pub fn new(
        scheme: Scheme,
        authority: Option<Authority>,
        path: Path,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// Normalized: scheme lowercased (already guaranteed by [`Scheme`]), dot segments removed,
    /// and the authority's port dropped if it matches the scheme's conventional default.
    pub fn normalize(&self) -> Url {
        let authority = self
            .authority
            .as_ref()
            .map(|a| a.with_default_port_dropped(self.scheme.default_port()));
        Url {
            scheme: self.scheme.clone(),
            authority,
            path: self.path.remove_dot_segments(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }

    /// The IRI (UTF-8) rendering.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        let mut out = format!("{}:", self.scheme);
        if let Some(a) = &self.authority {
            out.push_str("//");
            if let Some(ui) = a.user_info() {
                out.push_str(&encode(ui.user_name(), is_uri_path_safe));
                if let Some(password) = ui.password() {
                    out.push(':');
                    out.push_str(&encode(password, is_uri_path_safe));
                }
                out.push('@');
            }
            out.push_str(&a.host().as_uri());
            if let Some(p) = a.port() {
                out.push(':');
                out.push_str(&p.to_string());
            }
        }
        out.push_str(&self.path.as_uri());
        if let Some(q) = &self.query {
            out.push('?');
            out.push_str(&q.as_uri());
        }
        if let Some(frag) = &self.fragment {
            out.push('#');
            out.push_str(&frag.as_uri());
        }
        out
    }
}

/// A `urn:` reference: `urn:nid:nss[?+r][?=q][#fragment]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Urn {
    nid: Nid,
    components: UrnComponents,
    fragment: Option<Fragment>,
}

impl Display for Urn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "urn:{}:{}", self.nid, self.components)?;
        if let Some(frag) = &self.fragment {
            write!(f, "#{}", frag)?;
        }
        Ok(())
    }
}

impl Urn {
    pub fn new(nid: Nid, components: UrnComponents, fragment: Option<Fragment>) -> Self {
        Self {
            nid,
            components,
            fragment,
        }
    }

    pub fn nid(&self) -> &Nid {
        &self.nid
    }

    pub fn components(&self) -> &UrnComponents {
        &self.components
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// The IRI (UTF-8) rendering.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        let mut out = format!("urn:{}:{}", self.nid, self.components.as_uri());
        if let Some(frag) = &self.fragment {
            out.push('#');
            out.push_str(&frag.as_uri());
        }
        out
    }
}

/// A scheme-less relative reference: `[//authority]path[?query][#fragment]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelativeIri {
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl Display for RelativeIri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(a) = &self.authority {
            write!(f, "//{}", a)?;
        }
        write!(f, "{}", self.path)?;
        if let Some(q) = &self.query {
            write!(f, "?{}", q)?;
        }
        if let Some(frag) = &self.fragment {
            write!(f, "#{}", frag)?;
        }
        Ok(())
    }
}

impl RelativeIri {
    pub fn new(authority: Option<Authority>, path: Path, query: Option<Query>, fragment: Option<Fragment>) -> Self {
        Self {
            authority,
            path,
            query,
            fragment,
        }
    }

    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// The IRI (UTF-8) rendering.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.authority {
            out.push_str("//");
            if let Some(ui) = a.user_info() {
                out.push_str(&encode(ui.user_name(), is_uri_path_safe));
                if let Some(password) = ui.password() {
                    out.push(':');
                    out.push_str(&encode(password, is_uri_path_safe));
                }
                out.push('@');
            }
            out.push_str(&a.host().as_uri());
            if let Some(p) = a.port() {
                out.push(':');
                out.push_str(&p.to_string());
            }
        }
        out.push_str(&self.path.as_uri());
        if let Some(q) = &self.query {
            out.push('?');
            out.push_str(&q.as_uri());
        }
        if let Some(frag) = &self.fragment {
            out.push('#');
            out.push_str(&frag.as_uri());
        }
        out
    }
}

/// Any parsed IRI reference: absolute (with a scheme) or relative.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Iri {
    Url(Url),
    Urn(Urn),
    Relative(RelativeIri),
}

/// The subset of [`Iri`] that carries its own scheme — the only variants valid as a base for
/// reference resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AbsoluteIri {
    Url(Url),
    Urn(Urn),
}

impl From<AbsoluteIri> for Iri {
    fn from(a: AbsoluteIri) -> Self {
        match a {
            AbsoluteIri::Url(u) => Iri::Url(u),
            AbsoluteIri::Urn(u) => Iri::Urn(u),
        }
    }
}

impl TryFrom<Iri> for AbsoluteIri {
    type Error = crate::error::Error;

    fn try_from(value: Iri) -> Result<Self> {
        match value {
            Iri::Url(u) => Ok(AbsoluteIri::Url(u)),
            Iri::Urn(u) => Ok(AbsoluteIri::Urn(u)),
            Iri::Relative(_) => Err(ErrorKind::Unsupported("relative IRI is not absolute".to_string()).into()),
        }
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Iri::Url(u) => write!(f, "{}", u),
            Iri::Urn(u) => write!(f, "{}", u),
            Iri::Relative(r) => write!(f, "{}", r),
        }
    }
}

impl Iri {
    /// `true` if this is a [`Url`](Iri::Url).
    pub fn is_url(&self) -> bool {
        matches!(self, Iri::Url(_))
    }

    /// `true` if this is a [`Urn`](Iri::Urn).
    pub fn is_urn(&self) -> bool {
        matches!(self, Iri::Urn(_))
    }

    /// `true` if this carries its own scheme (a [`Url`](Iri::Url) or [`Urn`](Iri::Urn)).
    pub fn is_absolute(&self) -> bool {
        !self.is_relative()
    }

    /// `true` if this is a scheme-less [`RelativeIri`](Iri::Relative).
    pub fn is_relative(&self) -> bool {
        matches!(self, Iri::Relative(_))
    }

    /// The IRI (UTF-8) rendering.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        match self {
            Iri::Url(u) => u.as_uri(),
            Iri::Urn(u) => u.as_uri(),
            Iri::Relative(r) => r.as_uri(),
        }
    }
}

impl Display for AbsoluteIri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsoluteIri::Url(u) => write!(f, "{}", u),
            AbsoluteIri::Urn(u) => write!(f, "{}", u),
        }
    }
}

impl FromStr for Iri {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let scheme_token = s.split(':').next().filter(|t| crate::scheme::is_scheme(t));
        if let Some(token) = scheme_token {
            if parse::is_urn_scheme(token) {
                let body = &s[token.len() + 1..];
                let parts = parse::parse_urn_body(body)?;
                return Ok(Iri::Urn(Urn::new(parts.nid, parts.components, parts.fragment)));
            }
        }

        let GenericParts {
            scheme,
            authority,
            path,
            query,
            fragment,
        } = parse::split_generic(s);

        let scheme = parse::parse_scheme(scheme)?;
        let authority = authority.map(parse::parse_authority).transpose()?;
        let path = parse::parse_path(path)?;
        let query = parse::parse_query(query)?;
        let fragment = parse::parse_fragment(fragment)?;

        match scheme {
            Some(scheme) => {
                let authority = authority.map(|a| a.with_default_port_dropped(scheme.default_port()));
                Ok(Iri::Url(Url::new(scheme, authority, path, query, fragment)))
            }
            None => Ok(Iri::Relative(RelativeIri::new(authority, path, query, fragment))),
        }
    }
}

impl FromStr for AbsoluteIri {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Iri>()?.try_into()
    }
}

/// RFC 3986 §5.2 reference resolution: resolve `reference` against `base`, producing an
/// absolute IRI. A `Urn` base only accepts a reference that is already absolute (RFC 8141 does
/// not define a notion of a path-relative URN).
pub fn resolve(base: &AbsoluteIri, reference: &Iri) -> Result<AbsoluteIri> {
    if let Ok(abs) = AbsoluteIri::try_from(reference.clone()) {
        return Ok(normalize_absolute(&abs));
    }

    let base_url = match base {
        AbsoluteIri::Url(u) => u,
        AbsoluteIri::Urn(_) => {
            return Err(ErrorKind::Unsupported("cannot resolve a relative reference against a urn: base".to_string()).into());
        }
    };
    let r = match reference {
        Iri::Relative(r) => r,
        _ => unreachable!("handled by the absolute-reference branch above"),
    };

    let (authority, path, query) = if r.authority().is_some() {
        (r.authority().cloned(), r.path().remove_dot_segments(), r.query().cloned())
    } else if r.path().is_empty() {
        let query = r.query().cloned().or_else(|| base_url.query().cloned());
        (base_url.authority().cloned(), base_url.path().clone(), query)
    } else {
        let merged = merge_paths(base_url.path(), r.path());
        (base_url.authority().cloned(), merged.remove_dot_segments(), r.query().cloned())
    };

    Ok(AbsoluteIri::Url(Url::new(
        base_url.scheme().clone(),
        authority,
        path,
        query,
        r.fragment().cloned(),
    )))
}

/// RFC 3986 §5.3's `merge` step: all but the last segment of `base`, followed by `r`.
fn merge_paths(base: &Path, r: &Path) -> Path {
    r.prepend(&base.dirname())
}

fn normalize_absolute(a: &AbsoluteIri) -> AbsoluteIri {
    match a {
        AbsoluteIri::Url(u) => AbsoluteIri::Url(u.normalize()),
        AbsoluteIri::Urn(u) => AbsoluteIri::Urn(u.clone()),
    }
}
