/*!
The RDF node model: blank nodes, IRI nodes, and literals, combined into the tagged-sum `Node`
used as the object of a triple, and the `IriOrBNode` subset used as subject (and non-literal
object).
*/

use crate::error::{Error, Result};
use crate::lang::LanguageTag;
use irid_iri::AbsoluteIri;
use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryInto;
use std::fmt::{Display, Formatter};
use unique_id::sequence::SequenceGenerator as IdGenerator;
use unique_id::Generator;

lazy_static! {
    static ref RE_BLANK_ID: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
}

/// A blank node identifier, scoped to a single graph.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BNode(String);

impl Display for BNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

impl BNode {
    /// Construct a blank node, validating `id` starts with a letter and contains only letters,
    /// digits, `_` and `-` thereafter.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if RE_BLANK_ID.is_match(&id) {
            Ok(BNode(id))
        } else {
            Err(Error::InvalidBlankNodeId { id })
        }
    }

    /// Construct a blank node with a freshly generated, process-unique identifier.
    pub fn generate() -> Self {
        BNode(format!("b{}", IdGenerator.next_id()))
    }

    /// The identifier text, without the `_:` prefix.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// An RDF node identified by an absolute IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IriNode(AbsoluteIri);

impl Display for IriNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<AbsoluteIri> for IriNode {
    fn from(iri: AbsoluteIri) -> Self {
        IriNode(iri)
    }
}

impl IriNode {
    /// Parse `s` as an absolute IRI and wrap it.
    pub fn new(s: &str) -> Result<Self> {
        let iri: irid_iri::Iri = s.parse()?;
        let iri: AbsoluteIri = iri.try_into()?;
        Ok(IriNode(iri))
    }

    /// The underlying IRI.
    pub fn iri(&self) -> &AbsoluteIri {
        &self.0
    }
}

/// A literal value: a lexical form, its datatype IRI, and an optional language tag.
///
/// If `lang` is set, `datatype` is always `rdf:langString`; otherwise it may be any XSD or
/// user-defined datatype IRI, defaulting to `xsd:string` for plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: String,
    datatype: AbsoluteIri,
    lang: Option<LanguageTag>,
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        match &self.lang {
            Some(tag) => write!(f, "@{tag}"),
            None if self.datatype == *irid_vocab::xsd::string() => Ok(()),
            None => write!(f, "^^<{}>", self.datatype),
        }
    }
}

impl Literal {
    /// Construct a literal with an explicit datatype and no language.
    pub fn new(lexical: impl Into<String>, datatype: AbsoluteIri) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype,
            lang: None,
        }
    }

    /// Construct a plain string literal, typed `xsd:string`.
    pub fn string(lexical: impl Into<String>) -> Self {
        Literal::new(lexical, irid_vocab::xsd::string().clone())
    }

    /// Construct a language-tagged literal, typed `rdf:langString`.
    pub fn with_language(lexical: impl Into<String>, lang: LanguageTag) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: irid_vocab::rdf::lang_string().clone(),
            lang: Some(lang),
        }
    }

    /// The lexical form.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The datatype IRI.
    pub fn data_type(&self) -> &AbsoluteIri {
        &self.datatype
    }

    /// The language tag, if this is a language-tagged literal.
    pub fn language(&self) -> Option<&LanguageTag> {
        self.lang.as_ref()
    }

    /// `true` if the datatype is one of the XSD numeric types this crate infers from a Rust
    /// primitive (`integer`, `decimal`, `float`, `double`, `long`, `int`, `short`, `byte`).
    pub fn is_numeric(&self) -> bool {
        let xsd = &self.datatype;
        [
            irid_vocab::xsd::integer(),
            irid_vocab::xsd::decimal(),
            irid_vocab::xsd::float(),
            irid_vocab::xsd::double(),
            irid_vocab::xsd::long(),
            irid_vocab::xsd::int(),
            irid_vocab::xsd::short(),
            irid_vocab::xsd::byte(),
        ]
        .iter()
        .any(|dt| *dt == xsd)
    }
}

macro_rules! literal_from_numeric {
    ($ty:ty, $xsd_fn:path) => {
        impl From<$ty> for Literal {
            fn from(v: $ty) -> Self {
                Literal::new(v.to_string(), $xsd_fn().clone())
            }
        }
    };
}

literal_from_numeric!(i32, irid_vocab::xsd::integer);
literal_from_numeric!(i64, irid_vocab::xsd::long);
literal_from_numeric!(i16, irid_vocab::xsd::short);
literal_from_numeric!(i8, irid_vocab::xsd::byte);
literal_from_numeric!(f32, irid_vocab::xsd::float);
literal_from_numeric!(f64, irid_vocab::xsd::double);
literal_from_numeric!(bool, irid_vocab::xsd::boolean);

/// The non-literal subset of [`Node`]: the allowed shapes for a triple's subject, and for an
/// object that is itself an entity rather than a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IriOrBNode {
    Iri(IriNode),
    Blank(BNode),
}

impl Display for IriOrBNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IriOrBNode::Iri(n) => write!(f, "{n}"),
            IriOrBNode::Blank(n) => write!(f, "{n}"),
        }
    }
}

impl From<IriNode> for IriOrBNode {
    fn from(n: IriNode) -> Self {
        IriOrBNode::Iri(n)
    }
}

impl From<BNode> for IriOrBNode {
    fn from(n: BNode) -> Self {
        IriOrBNode::Blank(n)
    }
}

/// Any RDF node: a blank node, an IRI-identified resource, or a literal value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Blank(BNode),
    Iri(IriNode),
    Literal(Literal),
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Blank(n) => write!(f, "{n}"),
            Node::Iri(n) => write!(f, "{n}"),
            Node::Literal(n) => write!(f, "{n}"),
        }
    }
}

impl From<IriOrBNode> for Node {
    fn from(v: IriOrBNode) -> Self {
        match v {
            IriOrBNode::Iri(n) => Node::Iri(n),
            IriOrBNode::Blank(n) => Node::Blank(n),
        }
    }
}

impl From<BNode> for Node {
    fn from(n: BNode) -> Self {
        Node::Blank(n)
    }
}

impl From<IriNode> for Node {
    fn from(n: IriNode) -> Self {
        Node::Iri(n)
    }
}

impl From<Literal> for Node {
    fn from(n: Literal) -> Self {
        Node::Literal(n)
    }
}

impl Node {
    /// Construct a validated blank node.
    pub fn blank(id: impl Into<String>) -> Result<Self> {
        Ok(Node::Blank(BNode::new(id)?))
    }

    /// Parse `s` as an absolute IRI node.
    pub fn iri(s: &str) -> Result<Self> {
        Ok(Node::Iri(IriNode::new(s)?))
    }

    /// `true` if this node is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// `true` if this node is an IRI-identified resource.
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// `true` if this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// This node as a blank node, if it is one.
    pub fn as_blank(&self) -> Option<&BNode> {
        match self {
            Node::Blank(n) => Some(n),
            _ => None,
        }
    }

    /// This node as an IRI node, if it is one.
    pub fn as_iri(&self) -> Option<&IriNode> {
        match self {
            Node::Iri(n) => Some(n),
            _ => None,
        }
    }

    /// This node as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(n) => Some(n),
            _ => None,
        }
    }

    /// This node as the `IriOrBNode` subset, if it is not a literal.
    pub fn as_iri_or_bnode(&self) -> Option<IriOrBNode> {
        match self {
            Node::Blank(n) => Some(IriOrBNode::Blank(n.clone())),
            Node::Iri(n) => Some(IriOrBNode::Iri(n.clone())),
            Node::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_accepts_valid_ids() {
        for s in ["a", "a-_", "a123"] {
            assert!(BNode::new(s).is_ok(), "{s} should be valid");
        }
    }

    #[test]
    fn blank_rejects_invalid_ids() {
        for s in ["", " ", "a#", "_", "-", "-a", "_a"] {
            assert!(BNode::new(s).is_err(), "{s} should be invalid");
        }
    }

    #[test]
    fn renders_integer_literal() {
        let lit = Literal::from(2_i32);
        assert_eq!(
            lit.to_string(),
            "\"2\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn renders_language_tagged_literal() {
        let lit = Literal::with_language("a", "en".parse().unwrap());
        assert_eq!(lit.to_string(), "\"a\"@en");
    }

    #[test]
    fn renders_plain_string_literal_without_datatype_suffix() {
        let lit = Literal::string("a");
        assert_eq!(lit.to_string(), "\"a\"");
    }

    #[test]
    fn numeric_literal_is_numeric() {
        assert!(Literal::from(2_i32).is_numeric());
        assert!(Literal::from(2.5_f64).is_numeric());
        assert!(!Literal::from(true).is_numeric());
        assert!(!Literal::string("a").is_numeric());
    }
}
