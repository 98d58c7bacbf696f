/*!
A simple in-memory graph: a duplicate-free set of triples, with set operations and the
graph-theoretic queries (cycle detection, connectivity) that treat non-literal objects as edges
to another node.
*/

use bimap::BiHashMap;
use irid_core::{IriNode, IriOrBNode, Node};
use std::collections::{HashSet, VecDeque};

/// A single `(subject, predicate, object)` statement.
pub type Triple = (IriOrBNode, IriNode, Node);

/// A duplicate-free, order-independent collection of triples.
///
/// Every mutating operation (`add`, `remove`, `union`, `difference`) returns a new `Graph`; the
/// receiver is left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    triples: HashSet<Triple>,
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if this graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// The number of distinct triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// `true` if `triple` is in this graph.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// A new graph with `triple` added; a no-op (returns an equal graph) if already present.
    pub fn add(&self, triple: Triple) -> Self {
        let mut triples = self.triples.clone();
        let _ = triples.insert(triple);
        Graph { triples }
    }

    /// A new graph with `triple` removed; a no-op if not present.
    pub fn remove(&self, triple: &Triple) -> Self {
        let mut triples = self.triples.clone();
        let _ = triples.remove(triple);
        Graph { triples }
    }

    /// A new graph containing every triple in either graph.
    pub fn union(&self, other: &Self) -> Self {
        Graph {
            triples: self.triples.union(&other.triples).cloned().collect(),
        }
    }

    /// A new graph containing every triple in `self` that is not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Graph {
            triples: self.triples.difference(&other.triples).cloned().collect(),
        }
    }

    /// All triples, in unspecified order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// The distinct subjects of every triple.
    pub fn subjects(&self) -> HashSet<&IriOrBNode> {
        self.triples.iter().map(|(s, _, _)| s).collect()
    }

    /// The distinct predicates of every triple.
    pub fn predicates(&self) -> HashSet<&IriNode> {
        self.triples.iter().map(|(_, p, _)| p).collect()
    }

    /// The distinct objects of every triple.
    pub fn objects(&self) -> HashSet<&Node> {
        self.triples.iter().map(|(_, _, o)| o).collect()
    }

    /// Subjects of triples matching `predicate` and `object` when given; either may be omitted to
    /// leave that column unconstrained.
    pub fn subjects_matching(&self, predicate: Option<&IriNode>, object: Option<&Node>) -> HashSet<&IriOrBNode> {
        self.subjects_by(|(_, p, o)| predicate.map_or(true, |x| x == p) && object.map_or(true, |x| x == o))
    }

    /// Subjects of triples for which `f` holds.
    pub fn subjects_by(&self, f: impl Fn(&Triple) -> bool) -> HashSet<&IriOrBNode> {
        self.triples.iter().filter(|t| f(t)).map(|(s, _, _)| s).collect()
    }

    /// Predicates of triples matching `subject` and `object` when given.
    pub fn predicates_matching(&self, subject: Option<&IriOrBNode>, object: Option<&Node>) -> HashSet<&IriNode> {
        self.predicates_by(|(s, _, o)| subject.map_or(true, |x| x == s) && object.map_or(true, |x| x == o))
    }

    /// Predicates of triples for which `f` holds.
    pub fn predicates_by(&self, f: impl Fn(&Triple) -> bool) -> HashSet<&IriNode> {
        self.triples.iter().filter(|t| f(t)).map(|(_, p, _)| p).collect()
    }

    /// Objects of triples matching `subject` and `predicate` when given.
    pub fn objects_matching(&self, subject: Option<&IriOrBNode>, predicate: Option<&IriNode>) -> HashSet<&Node> {
        self.objects_by(|(s, p, _)| subject.map_or(true, |x| x == s) && predicate.map_or(true, |x| x == p))
    }

    /// Objects of triples for which `f` holds.
    pub fn objects_by(&self, f: impl Fn(&Triple) -> bool) -> HashSet<&Node> {
        self.triples.iter().filter(|t| f(t)).map(|(_, _, o)| o).collect()
    }

    /// `true` iff the directed graph over `IriOrBNode` vertices, with an edge `subject -> object`
    /// for every triple whose object is itself an `IriOrBNode`, contains a cycle (including a
    /// self-loop).
    pub fn is_cyclic(&self) -> bool {
        let (index, adjacency) = self.directed_adjacency();
        let n = index.len();
        // 0 = unvisited, 1 = on the current path, 2 = finished.
        let mut color = vec![0u8; n];

        for start in 0..n {
            if color[start] != 0 {
                continue;
            }
            // Explicit stack of (node, next child index to visit) to avoid recursion.
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            color[start] = 1;
            while let Some(&mut (node, ref mut next)) = stack.last_mut() {
                if *next < adjacency[node].len() {
                    let child = adjacency[node][*next];
                    *next += 1;
                    match color[child] {
                        0 => {
                            color[child] = 1;
                            stack.push((child, 0));
                        }
                        1 => return true,
                        _ => {}
                    }
                } else {
                    color[node] = 2;
                    stack.pop();
                }
            }
        }
        false
    }

    /// The negation of [`Graph::is_cyclic`].
    pub fn is_acyclic(&self) -> bool {
        !self.is_cyclic()
    }

    /// `true` iff the undirected graph over the same vertex set (an edge `{subject, object}` for
    /// every triple whose object is an `IriOrBNode`) has at most one connected component. An
    /// empty graph is vacuously connected.
    pub fn is_connected(&self) -> bool {
        let (index, adjacency) = self.undirected_adjacency();
        let n = index.len();
        if n == 0 {
            return true;
        }
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        queue.push_back(0usize);
        visited[0] = true;
        let mut seen = 1;
        while let Some(node) = queue.pop_front() {
            for &next in &adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    seen += 1;
                    queue.push_back(next);
                }
            }
        }
        seen == n
    }

    /// Assigns a dense index to every vertex (subject, and any object that is itself an
    /// `IriOrBNode`), then builds the directed adjacency list `subject -> object`.
    fn directed_adjacency(&self) -> (BiHashMap<IriOrBNode, usize>, Vec<Vec<usize>>) {
        let index = self.node_index();
        let mut adjacency = vec![Vec::new(); index.len()];
        for (s, _, o) in &self.triples {
            if let Some(o) = o.as_iri_or_bnode() {
                let si = *index.get_by_left(s).unwrap();
                let oi = *index.get_by_left(&o).unwrap();
                adjacency[si].push(oi);
            }
        }
        (index, adjacency)
    }

    /// As [`Graph::directed_adjacency`], but the adjacency list is symmetric.
    fn undirected_adjacency(&self) -> (BiHashMap<IriOrBNode, usize>, Vec<Vec<usize>>) {
        let index = self.node_index();
        let mut adjacency = vec![Vec::new(); index.len()];
        for (s, _, o) in &self.triples {
            if let Some(o) = o.as_iri_or_bnode() {
                let si = *index.get_by_left(s).unwrap();
                let oi = *index.get_by_left(&o).unwrap();
                adjacency[si].push(oi);
                adjacency[oi].push(si);
            }
        }
        (index, adjacency)
    }

    fn node_index(&self) -> BiHashMap<IriOrBNode, usize> {
        let mut index = BiHashMap::new();
        for (s, _, o) in &self.triples {
            if !index.contains_left(s) {
                let _ = index.insert(s.clone(), index.len());
            }
            if let Some(o) = o.as_iri_or_bnode() {
                if !index.contains_left(&o) {
                    let _ = index.insert(o, index.len());
                }
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irid_core::{BNode, IriNode, Literal};

    fn iri_or_bnode(s: &str) -> IriOrBNode {
        IriOrBNode::Iri(IriNode::new(s).unwrap())
    }

    fn predicate(s: &str) -> IriNode {
        IriNode::new(s).unwrap()
    }

    #[test]
    fn add_remove_roundtrip() {
        let g = Graph::new();
        let t: Triple = (
            iri_or_bnode("http://example.org/a"),
            predicate("http://example.org/hasa"),
            Node::Iri(IriNode::new("http://example.org/b").unwrap()),
        );
        let g2 = g.add(t.clone());
        assert!(g2.contains(&t));
        let g3 = g2.remove(&t);
        assert!(!g3.contains(&t));
        assert_eq!(g3, g);
    }

    #[test]
    fn detects_cycle() {
        let a = iri_or_bnode("http://example.org/a");
        let b1: IriOrBNode = BNode::new("b1").unwrap().into();
        let g = Graph::new()
            .add((
                a.clone(),
                predicate("http://example.org/hasa"),
                Node::from(b1.clone()),
            ))
            .add((
                b1.clone(),
                predicate("http://example.org/isa"),
                Node::Literal(Literal::string("string")),
            ))
            .add((b1, predicate("http://example.org/hasa"), Node::from(a)));
        assert!(g.is_cyclic());
    }

    #[test]
    fn acyclic_connected_graph() {
        let a = iri_or_bnode("http://example.org/a");
        let b = iri_or_bnode("http://example.org/b");
        let c = iri_or_bnode("http://example.org/c");
        let g = Graph::new()
            .add((a.clone(), predicate("http://example.org/p"), Node::from(b.clone())))
            .add((b, predicate("http://example.org/p"), Node::from(c)));
        assert!(g.is_acyclic());
        assert!(g.is_connected());
    }

    #[test]
    fn disconnected_subjects_with_only_literal_objects() {
        let a = iri_or_bnode("http://example.org/a");
        let b = iri_or_bnode("http://example.org/b");
        let g = Graph::new()
            .add((
                a,
                predicate("http://example.org/p"),
                Node::Literal(Literal::string("x")),
            ))
            .add((
                b,
                predicate("http://example.org/p"),
                Node::Literal(Literal::string("y")),
            ));
        assert!(!g.is_connected());
    }

    #[test]
    fn empty_graph_is_vacuously_connected() {
        assert!(Graph::new().is_connected());
    }

    #[test]
    fn union_and_difference() {
        let t1: Triple = (
            iri_or_bnode("http://example.org/a"),
            predicate("http://example.org/p"),
            Node::Literal(Literal::string("1")),
        );
        let t2: Triple = (
            iri_or_bnode("http://example.org/a"),
            predicate("http://example.org/p"),
            Node::Literal(Literal::string("2")),
        );
        let g1 = Graph::new().add(t1.clone());
        let g2 = Graph::new().add(t2.clone());
        let u = g1.union(&g2);
        assert_eq!(u.len(), 2);
        let d = u.difference(&g1);
        assert_eq!(d.len(), 1);
        assert!(d.contains(&t2));
    }
}
