/*!
An implementation of the IRI, URI and URN specifications (RFC 3987, RFC 3986, RFC 8141).

This crate parses and normalizes IRI references without delegating to an existing URL parser;
every component (scheme, authority, path, query, fragment, and the URN-specific NID/r-component/
q-component) is its own small, independently testable type.

```rust
use irid_iri::Iri;
use std::str::FromStr;

let parsed = Iri::from_str(
    "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
).unwrap();
assert_eq!(parsed.to_string(), "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top");
```
*/

#![warn(
    unknown_lints,
    absolute_paths_not_starting_with_crate,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    macro_use_extern_crate,
    nonstandard_style,
    noop_method_call,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    future_incompatible,
    rust_2021_compatibility,
    missing_debug_implementations,
    unreachable_pub,
    unsafe_code,
    unused,
)]

pub mod authority;
pub mod error;
pub mod fragment;
pub mod iri;
pub mod path;
pub mod pct_encoding;
pub mod query;
pub mod scheme;
pub mod urn;

mod parse;

#[cfg(feature = "builder")]
pub mod builder;

pub use authority::{Authority, Host, Port, UserInfo};
pub use error::{Error, ErrorKind, Result};
pub use fragment::Fragment;
pub use iri::{resolve, AbsoluteIri, Iri, RelativeIri, Url, Urn};
pub use path::Path;
pub use query::Query;
pub use scheme::Scheme;
pub use urn::{Nid, UrnComponent, UrnComponents};
