/*!
A simple in-memory RDF graph built on the node model in [`irid_core`]: a duplicate-free set of
triples, with functional set operations and cycle/connectivity queries.

```rust
use irid_core::{IriNode, IriOrBNode, Literal, Node};
use irid_graph::Graph;

let s: IriOrBNode = IriNode::new("http://example.org/a").unwrap().into();
let p = IriNode::new("http://example.org/label").unwrap();
let o = Node::Literal(Literal::string("a"));
let g = Graph::new().add((s, p, o));
assert_eq!(g.len(), 1);
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

pub mod graph;

pub use graph::{Graph, Triple};
