/*!
Provides the crate's `Error` and `Result` types.
*/

use std::fmt::{Debug, Display, Formatter};

/// The `Error` type for this crate.
#[derive(Debug)]
pub enum Error {
    /// The string value provided is not valid for the type named.
    InvalidFromStr { value: String, name: String },
    /// The string value provided is not a valid blank node identifier.
    InvalidBlankNodeId { id: String },
    /// A language-tagged literal's datatype must be `rdf:langString`.
    LanguageRequiresLangString,
    /// An error parsing IRI strings.
    Iri(irid_iri::Error),
    /// An error parsing a language tag.
    LanguageTag(language_tags::ParseError),
}

/// A `Result` type that specifically uses this crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFromStr { value, name } => {
                write!(f, "the string `{value}` is not a valid {name}")
            }
            Error::InvalidBlankNodeId { id } => {
                write!(f, "`{id}` is not a valid blank node identifier")
            }
            Error::LanguageRequiresLangString => {
                write!(f, "a language-tagged literal's datatype must be rdf:langString")
            }
            Error::Iri(source) => write!(f, "an error occurred parsing an IRI; source: {source}"),
            Error::LanguageTag(source) => {
                write!(f, "an error occurred parsing a language tag; source: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Iri(source) => Some(source),
            Error::LanguageTag(source) => Some(source),
            _ => None,
        }
    }
}

impl From<irid_iri::Error> for Error {
    fn from(source: irid_iri::Error) -> Self {
        Self::Iri(source)
    }
}

impl From<language_tags::ParseError> for Error {
    fn from(source: language_tags::ParseError) -> Self {
        Self::LanguageTag(source)
    }
}
