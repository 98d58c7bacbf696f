/*!
A builder for [`Url`], for callers assembling an IRI from already-known parts rather than
parsing a string.
*/

use crate::authority::Authority;
use crate::error::{ErrorKind, Result};
use crate::fragment::Fragment;
use crate::iri::Url;
use crate::path::Path;
use crate::query::Query;
use crate::scheme::Scheme;

/// Incrementally builds a [`Url`]. `scheme` is the only required part.
#[derive(Clone, Debug, Default)]
pub struct UrlBuilder {
    scheme: Option<Scheme>,
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl UrlBuilder {
    /// Start a new builder for `scheme`.
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme: Some(scheme),
            authority: None,
            path: Path::Empty,
            query: None,
            fragment: None,
        }
    }

    pub fn authority(mut self, authority: Authority) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn fragment(mut self, fragment: Fragment) -> Self {
        self.fragment = Some(fragment);
        self
    }

    /// Finish building, failing if no scheme was ever supplied.
    pub fn build(self) -> Result<Url> {
        let scheme = self
            .scheme
            .ok_or_else(|| ErrorKind::Unsupported("a scheme is required to build a Url".to_string()))?;
        Ok(Url::new(scheme, self.authority, self.path, self.query, self.fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::Host;

    #[test]
    fn builds_a_minimal_url() {
        let url = UrlBuilder::new(Scheme::https())
            .authority(Authority::new(None, Host::parse("example.org").unwrap(), None))
            .path("/a/b".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(url.to_string(), "https://example.org/a/b");
    }
}
