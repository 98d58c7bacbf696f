/*!
A BCP47 (RFC 5646) language tag, accepted as well-formed per the ABNF in §2.1 but not validated
against the IANA subtag registry. Parsing and canonical rendering are delegated to the
`language-tags` crate; this module only adapts its error type and exposes the accessors this
crate's literal model needs.
*/

use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A validated language tag, e.g. `en-US`, `zh-Hans`, `i-default`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageTag(language_tags::LanguageTag);

impl Display for LanguageTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(LanguageTag(language_tags::LanguageTag::parse(s)?))
    }
}

impl LanguageTag {
    /// The primary language subtag, e.g. `"en"` in `en-US`.
    pub fn primary_language(&self) -> &str {
        self.0.primary_language()
    }

    /// The script subtag, if present.
    pub fn script(&self) -> Option<&str> {
        self.0.script()
    }

    /// The region subtag, if present.
    pub fn region(&self) -> Option<&str> {
        self.0.region()
    }

    /// The variant subtags, if any.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.0.variants()
    }

    /// The full tag as canonicalized by the underlying parser.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
