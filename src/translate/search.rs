//! Search keys: locating a stored axiom without scanning every candidate.
//!
//! Each operand of a single-triple axiom yields a search node. Named
//! operands are matched exactly. An anonymous individual is matched exactly
//! when it occurs in the graph and is a wildcard otherwise. Anonymous
//! expressions yield no search node at all, since their blank node label
//! in the graph is unknown; the caller then falls back to a full listing.

use crate::error::GraphResult;
use crate::graph::{Graph, Iri, Node, TriplePattern};
use crate::model::{Axiom, Individual, Operand};

/// Derives the triple patterns under which an axiom would be stored.
pub trait SearchKey: Send + Sync {
    /// Patterns covering every stored triple form of `axiom`. Empty when
    /// no key can be derived.
    fn search_triples(&self, axiom: &Axiom, graph: &dyn Graph) -> GraphResult<Vec<TriplePattern>>;
}

/// One slot of a search triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchNode {
    Concrete(Node),
    Any,
}

impl SearchNode {
    fn into_slot(self) -> Option<Node> {
        match self {
            Self::Concrete(node) => Some(node),
            Self::Any => None,
        }
    }
}

/// Search node for `operand`, or `None` if it cannot be matched directly.
pub fn search_node(operand: &Operand, graph: &dyn Graph) -> GraphResult<Option<SearchNode>> {
    if let Operand::Individual(Individual::Anonymous(id)) = operand {
        let node = Node::Blank(id.clone());
        return Ok(Some(if graph.occurs(&node)? {
            SearchNode::Concrete(node)
        } else {
            SearchNode::Any
        }));
    }
    Ok(operand
        .as_named()
        .map(|iri| SearchNode::Concrete(Node::Iri(iri.clone()))))
}

/// Pattern `(subject, predicate, object)` built from search nodes, or
/// `None` if either operand has none.
pub fn search_triple(
    graph: &dyn Graph,
    subject: &Operand,
    predicate: &str,
    object: &Operand,
) -> GraphResult<Option<TriplePattern>> {
    let (Some(s), Some(o)) = (search_node(subject, graph)?, search_node(object, graph)?) else {
        return Ok(None);
    };
    Ok(Some(TriplePattern::new(
        s.into_slot(),
        Some(Iri::new(predicate)),
        o.into_slot(),
    )))
}

/// A pattern is worth using only if it pins the subject or the object;
/// otherwise it is the full predicate scan again.
pub fn is_good_search_triple(pattern: &TriplePattern) -> bool {
    pattern.subject.is_some() || pattern.object.is_some()
}
