//! A triple situated in a graph.

use crate::config::TranslateConfig;
use crate::error::GraphResult;
use crate::view::{TypedNode, View, ViewContext};

use super::{Graph, Iri, Node, Triple};

/// A [`Triple`] together with the graph it was read from, so that its
/// subject and object can be cast to typed views.
#[derive(Clone)]
pub struct Statement<'g> {
    graph: &'g dyn Graph,
    triple: Triple,
}

impl<'g> Statement<'g> {
    pub fn new(graph: &'g dyn Graph, triple: Triple) -> Self {
        Self { graph, triple }
    }

    pub fn graph(&self) -> &'g dyn Graph {
        self.graph
    }

    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    pub fn into_triple(self) -> Triple {
        self.triple
    }

    pub fn subject(&self) -> &Node {
        &self.triple.subject
    }

    pub fn predicate(&self) -> &Iri {
        &self.triple.predicate
    }

    pub fn object(&self) -> &Node {
        &self.triple.object
    }

    /// Cast the subject to `view`.
    pub fn subject_as(&self, view: View, config: &TranslateConfig) -> GraphResult<Option<TypedNode>> {
        ViewContext::new(self.graph, config).try_as(self.subject(), view)
    }

    /// Cast the object to `view`.
    pub fn object_as(&self, view: View, config: &TranslateConfig) -> GraphResult<Option<TypedNode>> {
        ViewContext::new(self.graph, config).try_as(self.object(), view)
    }

    pub fn subject_can_as(&self, view: View, config: &TranslateConfig) -> GraphResult<bool> {
        ViewContext::new(self.graph, config).can_as(self.subject(), view)
    }

    pub fn object_can_as(&self, view: View, config: &TranslateConfig) -> GraphResult<bool> {
        ViewContext::new(self.graph, config).can_as(self.object(), view)
    }
}

impl std::fmt::Debug for Statement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Statement").field(&self.triple).finish()
    }
}

impl std::fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.triple)
    }
}

/// Statements compare by their triple; the graph handle is not part of
/// their identity.
impl PartialEq for Statement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.triple == other.triple
    }
}

impl Eq for Statement<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mem::MemGraph;
    use crate::vocab::{owl, rdf, rdfs};

    #[test]
    fn casts_subject_and_object() {
        let g = MemGraph::new();
        let p = Node::iri("http://ex.org/p");
        let c = Node::iri("http://ex.org/C");
        g.add(&Triple::new(p.clone(), rdf::TYPE, Node::iri(owl::OBJECT_PROPERTY))).unwrap();
        g.add(&Triple::new(c.clone(), rdf::TYPE, Node::iri(owl::CLASS))).unwrap();
        let t = Triple::new(p.clone(), rdfs::DOMAIN, c.clone());
        g.add(&t).unwrap();

        let config = TranslateConfig::default();
        let st = Statement::new(&g, t);
        assert_eq!(st.subject_as(View::ObjectProperty, &config).unwrap().unwrap().node, p);
        assert!(st.object_can_as(View::ClassExpression, &config).unwrap());
        assert!(!st.subject_can_as(View::DataProperty, &config).unwrap());
        assert!(st.object_as(View::Individual, &config).unwrap().is_none());
    }
}
