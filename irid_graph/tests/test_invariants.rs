use irid_core::{BNode, IriNode, IriOrBNode, Literal, Node};
use irid_graph::{Graph, Triple};

fn iri(s: &str) -> IriOrBNode {
    IriOrBNode::Iri(IriNode::new(s).unwrap())
}

fn predicate(s: &str) -> IriNode {
    IriNode::new(s).unwrap()
}

fn sample_graph() -> Graph {
    let a = iri("http://example.org/a");
    let b: IriOrBNode = BNode::new("b1").unwrap().into();
    Graph::new()
        .add((a.clone(), predicate("http://example.org/p"), Node::from(b.clone())))
        .add((b, predicate("http://example.org/q"), Node::Literal(Literal::string("x"))))
        .add((a, predicate("http://example.org/r"), Node::Literal(Literal::string("y"))))
}

fn sample_triples() -> Vec<Triple> {
    sample_graph().triples().cloned().collect()
}

// (g + t) - t contains g - t, with equality when t is not already in g.
#[test]
fn add_then_remove_equals_original_minus_triple_when_absent() {
    let g = sample_graph();
    let t: Triple = (
        iri("http://example.org/new-subject"),
        predicate("http://example.org/p"),
        Node::Literal(Literal::string("new")),
    );
    assert!(!g.contains(&t));

    let added_then_removed = g.add(t.clone()).remove(&t);
    let minus_t = g.difference(&Graph::new().add(t));
    assert_eq!(added_then_removed, minus_t);
    assert_eq!(added_then_removed, g);
}

#[test]
fn add_then_remove_superset_of_original_minus_triple_when_present() {
    let g = sample_graph();
    let t = sample_triples().into_iter().next().unwrap();
    assert!(g.contains(&t));

    let added_then_removed = g.add(t.clone()).remove(&t);
    let minus_t = g.difference(&Graph::new().add(t));
    // g - t is missing the triple that was already in g; (g + t) - t is not, so it is a
    // strict superset here rather than an equality.
    for triple in minus_t.triples() {
        assert!(added_then_removed.contains(triple));
    }
    assert_ne!(added_then_removed, minus_t);
}

#[test]
fn is_connected_is_invariant_under_reordering() {
    let triples = sample_triples();
    let forward: Graph = triples.iter().cloned().collect();
    let reversed: Graph = triples.into_iter().rev().collect();
    assert_eq!(forward.is_connected(), reversed.is_connected());
}
