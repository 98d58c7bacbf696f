/*!
The `Fragment` component: an opaque, decoded string carried after `#`.
*/

use crate::error::{Component as ErrComponent, Result};
use crate::pct_encoding::{decode_component, encode, is_uri_path_safe};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A decoded fragment identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Fragment(String);

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fragment {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Fragment(decode_component(s, ErrComponent::Fragment)?))
    }
}

impl Fragment {
    /// Construct a fragment from an already-decoded value.
    pub fn new(value: impl Into<String>) -> Self {
        Fragment(value.into())
    }

    /// The decoded text.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// `true` if the fragment carries no text (`#` with nothing after it).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The IRI (UTF-8) rendering.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering.
    pub fn as_uri(&self) -> String {
        encode(&self.0, |c| is_uri_path_safe(c) || matches!(c, '/' | '?'))
    }
}
