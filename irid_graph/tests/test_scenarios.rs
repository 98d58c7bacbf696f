use irid_core::{BNode, IriNode, IriOrBNode, Literal, Node};
use irid_graph::Graph;

fn iri(s: &str) -> IriOrBNode {
    IriOrBNode::Iri(IriNode::new(s).unwrap())
}

fn predicate(s: &str) -> IriNode {
    IriNode::new(s).unwrap()
}

// ------------------------------------------------------------------------------------------------
// Scenario 8: graph cycle detection
// ------------------------------------------------------------------------------------------------

#[test]
fn scenario_8_three_triple_cycle_is_cyclic() {
    let a = iri("http://example.org/a");
    let b1: IriOrBNode = BNode::new("b1").unwrap().into();
    let g = Graph::new()
        .add((a.clone(), predicate("http://example.org/hasa"), Node::from(b1.clone())))
        .add((b1.clone(), predicate("http://example.org/isa"), Node::Literal(Literal::string("string"))))
        .add((b1, predicate("http://example.org/hasa"), Node::from(a)));
    assert!(g.is_cyclic());
}

// Six triples: a path of five entity-to-entity triples (six distinct nodes) plus one literal label
// on the first node. The literal doesn't add a vertex, so the graph stays single-component.
#[test]
fn scenario_8_six_triple_acyclic_connected_example() {
    let nodes: Vec<IriOrBNode> = (0..6).map(|i| iri(&format!("http://example.org/n{i}"))).collect();
    let p = predicate("http://example.org/next");

    let mut g = Graph::new();
    for pair in nodes.windows(2) {
        g = g.add((pair[0].clone(), p.clone(), Node::from(pair[1].clone())));
    }
    g = g.add((
        nodes[0].clone(),
        predicate("http://example.org/label"),
        Node::Literal(Literal::string("start")),
    ));
    assert_eq!(g.len(), 6);
    assert!(g.is_acyclic());
    assert!(g.is_connected());
}
