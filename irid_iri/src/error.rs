/*!
Error types for this crate, generated with `error_chain`.
*/

use error_chain::error_chain;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The component of an IRI in which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The scheme component.
    Scheme,
    /// The authority component (user info, host, port).
    Authority,
    /// The path component.
    Path,
    /// The query component.
    Query,
    /// The fragment component.
    Fragment,
    /// The URN namespace identifier.
    Nid,
    /// The URN `r-component` or `q-component`.
    UrnComponent,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Component::Scheme => "scheme",
            Component::Authority => "authority",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
            Component::Nid => "nid",
            Component::UrnComponent => "urn-component",
        };
        write!(f, "{}", s)
    }
}

error_chain! {
    errors {
        /// A production in the grammar failed to match at the given byte offset.
        ParseError(production: String, offset: usize) {
            description("parse error")
            display("expected {} at offset {}", production, offset)
        }
        /// A `%HH` sequence was malformed, or decoded to invalid UTF-8.
        InvalidPercentEncoding(detail: String) {
            description("invalid percent-encoding")
            display("invalid percent-encoding: {}", detail)
        }
        /// A value was syntactically well-formed but outside its domain.
        DomainError(component: Component, detail: String) {
            description("domain error")
            display("invalid {}: {}", component, detail)
        }
        /// The input was empty where a non-empty value was required.
        IsEmpty(component: Component) {
            description("empty component")
            display("{} must not be empty", component)
        }
        /// A code path exists only for a feature not yet implemented.
        Unsupported(detail: String) {
            description("unsupported")
            display("unsupported: {}", detail)
        }
    }
}
