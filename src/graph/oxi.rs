//! Oxigraph-backed RDF graph.
//!
//! Provides durable storage of triples in the default graph of an oxigraph
//! [`Store`], either in memory or on disk. Pattern lookups go straight to
//! oxigraph's quad indices and stay lazy.

use oxigraph::model::{BlankNode, GraphName, GraphNameRef, Literal as OxLiteral, NamedNode, Quad, Term};
use oxigraph::store::Store;

use crate::error::{GraphError, GraphResult};

use super::blank::BlankId;
use super::{Graph, Iri, Literal, Node, Triple, TripleIter, TriplePattern};

/// Persistent oxigraph triple store.
pub struct OxiGraph {
    store: Store,
}

fn store_error(context: &str, e: impl std::fmt::Display) -> GraphError {
    GraphError::Store {
        message: format!("{context}: {e}"),
    }
}

fn invalid(term: impl std::fmt::Display) -> GraphError {
    GraphError::InvalidTerm {
        term: term.to_string(),
    }
}

impl OxiGraph {
    /// Create a new in-memory store (no persistence).
    pub fn in_memory() -> GraphResult<Self> {
        let store = Store::new().map_err(|e| store_error("failed to create oxigraph store", e))?;
        Ok(Self { store })
    }

    /// Open or create a persistent store at the given path.
    pub fn open(path: &std::path::Path) -> GraphResult<Self> {
        std::fs::create_dir_all(path)
            .map_err(|e| store_error("failed to create oxigraph directory", e))?;
        let store = Store::open(path).map_err(|e| {
            store_error(&format!("failed to open oxigraph store at {}", path.display()), e)
        })?;
        tracing::info!(path = %path.display(), "opened oxigraph store");
        Ok(Self { store })
    }

    fn named(iri: &Iri) -> GraphResult<NamedNode> {
        NamedNode::new(iri.as_str()).map_err(|_| invalid(iri))
    }

    fn to_term(node: &Node) -> GraphResult<Term> {
        Ok(match node {
            Node::Iri(iri) => Self::named(iri)?.into(),
            Node::Blank(id) => BlankNode::new(id.as_str()).map_err(|_| invalid(id))?.into(),
            Node::Literal(lit) => match lit.language() {
                Some(lang) => OxLiteral::new_language_tagged_literal(lit.lexical(), lang)
                    .map_err(|_| invalid(lit))?
                    .into(),
                None => OxLiteral::new_typed_literal(lit.lexical(), Self::named(lit.datatype())?).into(),
            },
        })
    }

    fn from_term(term: Term) -> Option<Node> {
        #[allow(unreachable_patterns)]
        match term {
            Term::NamedNode(n) => Some(Node::Iri(Iri::new(n.into_string()))),
            Term::BlankNode(b) => Some(Node::Blank(BlankId::new(b.into_string()))),
            Term::Literal(l) => Some(Node::Literal(match l.language() {
                Some(lang) => Literal::lang(l.value(), lang),
                None => Literal::typed(l.value(), l.datatype().as_str()),
            })),
            _ => None,
        }
    }

    fn to_quad(triple: &Triple) -> GraphResult<Quad> {
        let predicate = Self::named(&triple.predicate)?;
        let object = Self::to_term(&triple.object)?;
        match Self::to_term(&triple.subject)? {
            Term::NamedNode(s) => Ok(Quad::new(s, predicate, object, GraphName::DefaultGraph)),
            Term::BlankNode(s) => Ok(Quad::new(s, predicate, object, GraphName::DefaultGraph)),
            _ => Err(invalid(&triple.subject)),
        }
    }

    fn from_quad(quad: Quad) -> Option<Triple> {
        let subject: Term = quad.subject.into();
        Some(Triple::new(
            Self::from_term(subject)?,
            Iri::new(quad.predicate.into_string()),
            Self::from_term(quad.object)?,
        ))
    }

    fn contains_quad(&self, quad: &Quad) -> GraphResult<bool> {
        self.store
            .contains(quad)
            .map_err(|e| store_error("lookup failed", e))
    }

    /// Get internal store reference (for advanced oxigraph operations).
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl Graph for OxiGraph {
    fn find(&self, pattern: &TriplePattern) -> TripleIter<'_> {
        let terms = (|| -> GraphResult<_> {
            let subject = pattern.subject.as_ref().map(Self::to_term).transpose()?;
            let predicate = pattern.predicate.as_ref().map(Self::named).transpose()?;
            let object = pattern.object.as_ref().map(Self::to_term).transpose()?;
            Ok((subject, predicate, object))
        })();
        let (subject, predicate, object) = match terms {
            Ok(terms) => terms,
            Err(e) => return Box::new(std::iter::once(Err(e))),
        };

        let subject_ref = match &subject {
            None => None,
            Some(Term::NamedNode(n)) => Some(n.as_ref().into()),
            Some(Term::BlankNode(b)) => Some(b.as_ref().into()),
            // literals never occur in subject position
            Some(_) => return Box::new(std::iter::empty()),
        };

        let quads = self.store.quads_for_pattern(
            subject_ref,
            predicate.as_ref().map(NamedNode::as_ref),
            object.as_ref().map(Term::as_ref),
            Some(GraphNameRef::DefaultGraph),
        );
        Box::new(quads.filter_map(|quad| match quad {
            Ok(quad) => Self::from_quad(quad).map(Ok),
            Err(e) => Some(Err(store_error("pattern scan failed", e))),
        }))
    }

    fn add(&self, triple: &Triple) -> GraphResult<bool> {
        let quad = Self::to_quad(triple)?;
        if self.contains_quad(&quad)? {
            return Ok(false);
        }
        self.store
            .insert(&quad)
            .map_err(|e| store_error("insert failed", e))?;
        Ok(true)
    }

    fn remove(&self, triple: &Triple) -> GraphResult<bool> {
        let quad = Self::to_quad(triple)?;
        if !self.contains_quad(&quad)? {
            return Ok(false);
        }
        self.store
            .remove(&quad)
            .map_err(|e| store_error("remove failed", e))?;
        Ok(true)
    }

    fn contains(&self, triple: &Triple) -> GraphResult<bool> {
        let quad = match Self::to_quad(triple) {
            Ok(quad) => quad,
            Err(GraphError::InvalidTerm { .. }) => return Ok(false),
            Err(e) => return Err(e),
        };
        self.contains_quad(&quad)
    }

    fn len(&self) -> GraphResult<usize> {
        self.store.len().map_err(|e| store_error("count failed", e))
    }

    fn fresh_blank(&self) -> BlankId {
        BlankId::new(BlankNode::default().into_string())
    }
}

impl std::fmt::Debug for OxiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OxiGraph").finish()
    }
}
