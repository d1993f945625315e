//! Statement filters: which triples encode an axiom kind.
//!
//! Several kinds share one predicate (`rdfs:domain` for object, data and
//! annotation properties, for instance). The predicate only narrows the
//! candidates; the filter then casts subject and object to the views the
//! kind expects, and that cast is what tells the siblings apart.

use crate::config::TranslateConfig;
use crate::error::GraphResult;
use crate::graph::{Graph, Iri, Statement, TripleIter};
use crate::view::View;

/// Decides whether a statement is a legitimate encoding of one axiom kind.
///
/// `test` must be total and side-effect free.
pub trait StatementFilter: Send + Sync {
    /// Triples worth testing: usually everything with the kind's predicate.
    fn candidates<'g>(&self, graph: &'g dyn Graph) -> TripleIter<'g>;

    fn test(&self, statement: &Statement<'_>, config: &TranslateConfig) -> GraphResult<bool>;
}

/// Predicate equality check.
pub fn has_predicate(statement: &Statement<'_>, predicate: &str) -> bool {
    statement.predicate().as_str() == predicate
}

/// Subject casts to `subject_view` and object to `object_view`.
pub fn operands_cast(
    statement: &Statement<'_>,
    [subject_view, object_view]: [View; 2],
    config: &TranslateConfig,
) -> GraphResult<bool> {
    Ok(statement.subject_can_as(subject_view, config)?
        && statement.object_can_as(object_view, config)?)
}

/// Every triple with `predicate`.
pub fn by_predicate<'g>(graph: &'g dyn Graph, predicate: &str) -> TripleIter<'g> {
    graph.list_by_predicate(&Iri::new(predicate))
}
