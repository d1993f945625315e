//! RDF graph layer: node and triple model plus the store contract.
//!
//! The translators never own a graph. They receive a `&dyn Graph` handle and
//! perform bounded reads or writes through it:
//!
//! - **In-memory store** ([`mem::MemGraph`]): petgraph edges with dashmap indices
//! - **Oxigraph store** ([`oxi::OxiGraph`]): in-memory or on-disk quads
//!
//! Both stores share the same [`Triple`] data model and set semantics: adding
//! a triple that is already present is a no-op.

pub mod blank;
pub mod list;
pub mod mem;
pub mod oxi;
pub mod statement;

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;
use crate::vocab::{rdf, xsd};

pub use blank::BlankId;
pub use statement::Statement;

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Wrap an IRI string. No validation is done here; stores reject
    /// malformed IRIs on write.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// An RDF literal: lexical form, datatype and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    datatype: Iri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Literal {
    /// A plain `xsd:string` literal.
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    /// A language-tagged `rdf:langString` literal. Tags are lower-cased.
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Iri::new(rdf::LANG_STRING),
            language: Some(language.into().to_ascii_lowercase()),
        }
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "{:?}@{lang}", self.lexical),
            None if self.datatype.as_str() == xsd::STRING => write!(f, "{:?}", self.lexical),
            None => write!(f, "{:?}^^{}", self.lexical, self.datatype),
        }
    }
}

/// A graph node: IRI, blank node, or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Iri(Iri),
    Blank(BlankId),
    Literal(Literal),
}

impl Node {
    /// Shorthand for an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(Iri::new(iri))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Node::Blank(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Whether this node is the IRI `iri`.
    pub fn is(&self, iri: &str) -> bool {
        matches!(self, Node::Iri(i) if i.as_str() == iri)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "{iri}"),
            Node::Blank(id) => write!(f, "{id}"),
            Node::Literal(lit) => write!(f, "{lit}"),
        }
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        Node::Iri(iri)
    }
}

impl From<BlankId> for Node {
    fn from(id: BlankId) -> Self {
        Node::Blank(id)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

/// An immutable (subject, predicate, object) edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Iri,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: impl Into<Node>, predicate: impl Into<Iri>, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A triple pattern. `None` in a slot is the `ANY` wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    pub subject: Option<Node>,
    pub predicate: Option<Iri>,
    pub object: Option<Node>,
}

impl TriplePattern {
    /// The all-wildcard pattern.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn new(subject: Option<Node>, predicate: Option<Iri>, object: Option<Node>) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// `(ANY, predicate, ANY)`.
    pub fn predicate(predicate: impl Into<Iri>) -> Self {
        Self {
            predicate: Some(predicate.into()),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, subject: impl Into<Node>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_object(mut self, object: impl Into<Node>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Number of `ANY` slots.
    pub fn wildcard_count(&self) -> usize {
        usize::from(self.subject.is_none())
            + usize::from(self.predicate.is_none())
            + usize::from(self.object.is_none())
    }

    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject.as_ref().is_none_or(|s| *s == triple.subject)
            && self.predicate.as_ref().is_none_or(|p| *p == triple.predicate)
            && self.object.as_ref().is_none_or(|o| *o == triple.object)
    }
}

impl std::fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn slot<T: std::fmt::Display>(s: &Option<T>) -> String {
            s.as_ref().map_or_else(|| "ANY".to_string(), ToString::to_string)
        }
        write!(
            f,
            "{} {} {}",
            slot(&self.subject),
            slot(&self.predicate),
            slot(&self.object)
        )
    }
}

/// Lazy, single-pass sequence of triples from a store.
pub type TripleIter<'a> = Box<dyn Iterator<Item = GraphResult<Triple>> + 'a>;

/// The contract translators need from a triple store.
///
/// Implementations decide their own concurrency story; the translators take
/// no locks of their own.
pub trait Graph: Send + Sync + std::fmt::Debug {
    /// Enumerate the triples matching `pattern`.
    fn find(&self, pattern: &TriplePattern) -> TripleIter<'_>;

    /// Add a triple. Returns `false` if it was already present.
    fn add(&self, triple: &Triple) -> GraphResult<bool>;

    /// Remove a triple. Returns `false` if it was absent.
    fn remove(&self, triple: &Triple) -> GraphResult<bool>;

    /// Number of distinct triples.
    fn len(&self) -> GraphResult<usize>;

    /// A blank node label not yet used in this graph.
    fn fresh_blank(&self) -> BlankId;

    fn is_empty(&self) -> GraphResult<bool> {
        self.len().map(|n| n == 0)
    }

    fn contains(&self, triple: &Triple) -> GraphResult<bool> {
        let pattern = TriplePattern::new(
            Some(triple.subject.clone()),
            Some(triple.predicate.clone()),
            Some(triple.object.clone()),
        );
        Ok(self.find(&pattern).next().transpose()?.is_some())
    }

    /// All triples with the given predicate.
    fn list_by_predicate(&self, predicate: &Iri) -> TripleIter<'_> {
        self.find(&TriplePattern::predicate(predicate.clone()))
    }

    /// Objects of `(subject, predicate, ?)`.
    fn objects(&self, subject: &Node, predicate: &str) -> GraphResult<Vec<Node>> {
        let pattern = TriplePattern::predicate(predicate).with_subject(subject.clone());
        self.find(&pattern)
            .map(|t| t.map(|t| t.object))
            .collect()
    }

    /// Subjects of `(?, predicate, object)`.
    fn subjects(&self, predicate: &str, object: &Node) -> GraphResult<Vec<Node>> {
        let pattern = TriplePattern::predicate(predicate).with_object(object.clone());
        self.find(&pattern)
            .map(|t| t.map(|t| t.subject))
            .collect()
    }

    /// Whether `(subject, predicate, object)` is asserted.
    fn has(&self, subject: &Node, predicate: &str, object: &Node) -> GraphResult<bool> {
        self.contains(&Triple::new(subject.clone(), predicate, object.clone()))
    }

    /// Whether `(node, rdf:type, type_iri)` is asserted.
    fn has_type(&self, node: &Node, type_iri: &str) -> GraphResult<bool> {
        self.has(node, rdf::TYPE, &Node::iri(type_iri))
    }

    /// Whether the node appears as subject or object of any triple.
    fn occurs(&self, node: &Node) -> GraphResult<bool> {
        let as_subject = TriplePattern::any().with_subject(node.clone());
        if self.find(&as_subject).next().transpose()?.is_some() {
            return Ok(true);
        }
        let as_object = TriplePattern::any().with_object(node.clone());
        Ok(self.find(&as_object).next().transpose()?.is_some())
    }
}
