/*!
The RDF node model: validated blank nodes, IRI-identified resources, and literals, built on top
of [`irid_iri`] and the vocabulary constants in [`irid_vocab`].

```rust
use irid_core::Node;

let n = Node::blank("b1").unwrap();
assert_eq!(n.to_string(), "_:b1");
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

pub mod error;
pub mod lang;
pub mod node;

pub use error::{Error, Result};
pub use lang::LanguageTag;
pub use node::{BNode, IriNode, IriOrBNode, Literal, Node};
