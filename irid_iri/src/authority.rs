/*!
The `Authority` component: `[ userinfo "@" ] host [ ":" port ]`.
*/

use crate::error::{Component as ErrComponent, ErrorKind, Result};
use crate::pct_encoding::{decode_component, encode, is_unreserved, is_uri_path_safe};
use std::fmt::{Display, Formatter};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Port
// ------------------------------------------------------------------------------------------------

/// A TCP/UDP port number, `[0, 65535]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(u16);

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Port {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || (s.len() > 1 && s.starts_with('0')) || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErrorKind::DomainError(ErrComponent::Authority, format!("bad port {:?}", s)).into());
        }
        s.parse::<u16>()
            .map(Port)
            .map_err(|_| ErrorKind::DomainError(ErrComponent::Authority, format!("port out of range {:?}", s)).into())
    }
}

impl From<u16> for Port {
    fn from(v: u16) -> Self {
        Port(v)
    }
}

impl Port {
    /// The raw port value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

// ------------------------------------------------------------------------------------------------
// Host
// ------------------------------------------------------------------------------------------------

/// The host portion of an authority: a literal IPv4 or IPv6 address, or a named host.
#[derive(Clone, Debug)]
pub enum Host {
    /// A literal IPv4 address, stored as its canonical 4-byte form.
    Ipv4(Ipv4Addr),
    /// A literal IPv6 address, stored as its canonical 16-byte form.
    Ipv6(Ipv6Addr),
    /// A registered (DNS-style) name, decoded and lowercase-normalized.
    Named(String),
}

impl Display for Host {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Host::Ipv4(addr) => write!(f, "{}", addr),
            Host::Ipv6(addr) => write!(f, "[{}]", addr),
            Host::Named(name) => write!(f, "{}", name),
        }
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Host::Ipv4(a), Host::Ipv4(b)) => a == b,
            (Host::Ipv6(a), Host::Ipv6(b)) => a == b,
            (Host::Named(a), Host::Named(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}
impl Eq for Host {}

impl std::hash::Hash for Host {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Host::Ipv4(a) => a.hash(state),
            Host::Ipv6(a) => a.hash(state),
            Host::Named(a) => a.to_lowercase().hash(state),
        }
    }
}

impl Host {
    /// Construct a host from a bracket-free string as it appears in the authority: tries IPv4,
    /// then (for a `[...]`-wrapped literal) IPv6, falling back to a named host.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return Ipv6Addr::from_str(inner)
                .map(Host::Ipv6)
                .map_err(|_| ErrorKind::DomainError(ErrComponent::Authority, format!("bad IPv6 literal {:?}", inner)).into());
        }
        if let Ok(addr) = Ipv4Addr::from_str(s) {
            // Only treat as IPv4 if every label is a plain decimal octet (Ipv4Addr::from_str is
            // otherwise lenient about leading zeros on some platforms); re-render and compare.
            if addr.to_string() == s {
                return Ok(Host::Ipv4(addr));
            }
        }
        let decoded = decode_component(s, ErrComponent::Authority)?;
        if decoded.is_empty() || !decoded.chars().all(is_ireg_name_char) {
            return Err(ErrorKind::DomainError(ErrComponent::Authority, format!("bad host {:?}", s)).into());
        }
        Ok(Host::Named(decoded.to_lowercase()))
    }

    /// The IRI (UTF-8) rendering of this host.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering of this host: named hosts are percent-encoded.
    pub fn as_uri(&self) -> String {
        match self {
            Host::Named(name) => encode(name, is_unreserved),
            other => other.to_string(),
        }
    }

    /// `true` if this is a `Named` host.
    pub fn is_named(&self) -> bool {
        matches!(self, Host::Named(_))
    }
}

fn is_ireg_name_char(c: char) -> bool {
    crate::pct_encoding::is_iunreserved(c) || crate::pct_encoding::is_sub_delims(c)
}

// ------------------------------------------------------------------------------------------------
// UserInfo
// ------------------------------------------------------------------------------------------------

/// The `userinfo` subcomponent of an authority: `user[:password]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserInfo {
    user_name: String,
    password: Option<String>,
}

impl Display for UserInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_name)?;
        if let Some(password) = &self.password {
            write!(f, ":{}", password)?;
        }
        Ok(())
    }
}

impl UserInfo {
    /// Construct from decoded, already-validated parts.
    pub(crate) fn new_unchecked(user_name: String, password: Option<String>) -> Self {
        Self { user_name, password }
    }

    /// The user name.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The password, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// Returns `true` if `s` (the raw, still percent-encoded form) is a syntactically valid
/// `iuserinfo` production.
pub fn is_iuserinfo(s: &str) -> bool {
    crate::pct_encoding::is_correctly_escaped(s)
        && s.chars()
            .all(|c| crate::pct_encoding::is_iunreserved(c) || crate::pct_encoding::is_sub_delims(c) || matches!(c, ':' | '%'))
}

// ------------------------------------------------------------------------------------------------
// Authority
// ------------------------------------------------------------------------------------------------

/// `[ userinfo "@" ] host [ ":" port ]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Authority {
    user_info: Option<UserInfo>,
    host: Host,
    port: Option<Port>,
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(ui) = &self.user_info {
            write!(f, "{}@", ui)?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = &self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

impl Authority {
    /// Construct a new `Authority`.
    pub fn new(user_info: Option<UserInfo>, host: Host, port: Option<Port>) -> Self {
        Self { user_info, host, port }
    }

    /// The user-info subcomponent, if present.
    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// The host.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// The port, if present (and not dropped because it matched the scheme default).
    pub fn port(&self) -> Option<Port> {
        self.port
    }

    /// Returns a copy of this authority with its port dropped if it matches `default`.
    pub fn with_default_port_dropped(&self, default: Option<u16>) -> Self {
        let port = match (self.port, default) {
            (Some(p), Some(d)) if p.value() == d => None,
            (p, _) => p,
        };
        Self {
            user_info: self.user_info.clone(),
            host: self.host.clone(),
            port,
        }
    }
}
