/*!
The `Scheme` component: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, case-insensitive and
normalized to lowercase.
*/

use crate::error::{Component as ErrComponent, ErrorKind, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

lazy_static! {
    static ref RE_SCHEME: Regex = Regex::new(r"^[[:alpha:]][[:alnum:]+\-.]*$").unwrap();
}

/// Returns `true` if `s` is a syntactically valid scheme token.
pub fn is_scheme(s: &str) -> bool {
    !s.is_empty() && RE_SCHEME.is_match(s)
}

/// A parsed, lowercase-normalized `Scheme`.
#[derive(Clone, Debug, Eq)]
pub struct Scheme(String);

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Scheme {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if is_scheme(s) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(ErrorKind::DomainError(ErrComponent::Scheme, s.to_string()).into())
        }
    }
}

impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for Scheme {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Scheme {
    /// Construct a `Scheme` from an already-lowercase, already-validated string. Used internally
    /// by the parser once a production has matched.
    pub(crate) fn new_unchecked(s: String) -> Self {
        Self(s)
    }

    /// The `http` scheme.
    pub fn http() -> Self {
        Self("http".to_string())
    }

    /// The `https` scheme.
    pub fn https() -> Self {
        Self("https".to_string())
    }

    /// The `urn` scheme.
    pub fn urn() -> Self {
        Self("urn".to_string())
    }

    /// Return the lowercase string value.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// The port conventionally associated with this scheme, if any (RFC 3986 §6.2.3 analogues).
    pub fn default_port(&self) -> Option<u16> {
        match self.0.as_str() {
            "ftp" => Some(21),
            "ssh" => Some(22),
            "telnet" => Some(23),
            "smtp" => Some(25),
            "domain" => Some(53),
            "tftp" => Some(69),
            "http" | "ws" => Some(80),
            "pop3" => Some(110),
            "nntp" => Some(119),
            "imap" => Some(143),
            "snmp" => Some(161),
            "ldap" => Some(389),
            "https" | "wss" => Some(443),
            "imaps" => Some(993),
            "nfs" => Some(2049),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases() {
        assert_eq!("hTtPs".parse::<Scheme>().unwrap(), Scheme::https());
    }

    #[test]
    fn rejects_leading_digit() {
        assert!("3ftp".parse::<Scheme>().is_err());
    }

    #[test]
    fn equality_is_case_insensitive() {
        assert_eq!(Scheme::new_unchecked("urn".into()), "URN".parse().unwrap());
    }

    #[test]
    fn default_ports() {
        assert_eq!(Scheme::https().default_port(), Some(443));
        assert_eq!(Scheme::new_unchecked("example".into()).default_port(), None);
    }
}
