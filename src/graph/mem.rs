//! In-memory RDF graph with dual-indexing.
//!
//! Uses `petgraph` for the edge structure and `DashMap` for fast lookups
//! by node and by predicate.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::{GraphError, GraphResult};

use super::blank::{BlankAllocator, BlankId};
use super::{Graph, Iri, Node, Triple, TripleIter, TriplePattern};

/// In-memory triple store backed by petgraph with dual-indexing.
///
/// Provides O(1) node lookups and fast predicate scans through a secondary
/// index. Triples have set semantics.
pub struct MemGraph {
    /// The directed graph: nodes are RDF nodes, edges carry the predicate.
    graph: RwLock<DiGraph<Node, Iri>>,
    /// Node → NodeIndex mapping for O(1) node lookups.
    node_index: DashMap<Node, NodeIndex>,
    /// Predicate index: predicate → list of (subject, object) pairs.
    predicate_index: DashMap<Iri, Vec<(Node, Node)>>,
    triple_count: AtomicUsize,
    blanks: BlankAllocator,
}

impl MemGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: RwLock::new(DiGraph::new()),
            node_index: DashMap::new(),
            predicate_index: DashMap::new(),
            triple_count: AtomicUsize::new(0),
            blanks: BlankAllocator::default(),
        }
    }

    /// Build a graph holding the given triples.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> GraphResult<Self> {
        let graph = Self::new();
        for triple in triples {
            graph.add(triple)?;
        }
        Ok(graph)
    }

    /// Ensure a node exists, returning its index. Caller holds the write lock.
    fn ensure_node(&self, graph: &mut DiGraph<Node, Iri>, node: &Node) -> NodeIndex {
        if let Some(idx) = self.node_index.get(node) {
            return *idx.value();
        }
        let idx = graph.add_node(node.clone());
        self.node_index.insert(node.clone(), idx);
        idx
    }

    fn lookup(&self, node: &Node) -> Option<NodeIndex> {
        self.node_index.get(node).map(|idx| *idx.value())
    }

    /// Snapshot of the triples matching `pattern`.
    fn collect_matching(&self, pattern: &TriplePattern) -> GraphResult<Vec<Triple>> {
        let graph = self.graph.read().map_err(|_| GraphError::LockPoisoned)?;

        let edge_triple = |e: petgraph::graph::EdgeReference<'_, Iri>| -> Option<Triple> {
            let subject = graph.node_weight(e.source())?.clone();
            let object = graph.node_weight(e.target())?.clone();
            Some(Triple::new(subject, e.weight().clone(), object))
        };

        let triples = if let Some(subject) = &pattern.subject {
            let Some(idx) = self.lookup(subject) else {
                return Ok(Vec::new());
            };
            graph
                .edges_directed(idx, Direction::Outgoing)
                .filter_map(edge_triple)
                .filter(|t| pattern.matches(t))
                .collect()
        } else if let Some(object) = &pattern.object {
            let Some(idx) = self.lookup(object) else {
                return Ok(Vec::new());
            };
            graph
                .edges_directed(idx, Direction::Incoming)
                .filter_map(edge_triple)
                .filter(|t| pattern.matches(t))
                .collect()
        } else if let Some(predicate) = &pattern.predicate {
            self.predicate_index
                .get(predicate)
                .map(|pairs| {
                    pairs
                        .value()
                        .iter()
                        .map(|(s, o)| Triple::new(s.clone(), predicate.clone(), o.clone()))
                        .collect()
                })
                .unwrap_or_default()
        } else {
            graph
                .edge_references()
                .filter_map(edge_triple)
                .collect()
        };
        Ok(triples)
    }

    /// Number of nodes ever seen (nodes are not collected on removal).
    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    /// All predicates currently in use.
    pub fn predicates(&self) -> Vec<Iri> {
        self.predicate_index
            .iter()
            .filter(|e| !e.value().is_empty())
            .map(|e| e.key().clone())
            .collect()
    }

    /// Get all triples in the graph.
    pub fn all_triples(&self) -> GraphResult<Vec<Triple>> {
        self.collect_matching(&TriplePattern::any())
    }
}

impl Graph for MemGraph {
    fn find(&self, pattern: &TriplePattern) -> TripleIter<'_> {
        match self.collect_matching(pattern) {
            Ok(triples) => Box::new(triples.into_iter().map(Ok)),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }

    /// Insert a triple.
    ///
    /// Creates nodes for subject and object if they don't exist and adds an
    /// edge subject → object carrying the predicate.
    fn add(&self, triple: &Triple) -> GraphResult<bool> {
        let mut graph = self.graph.write().map_err(|_| GraphError::LockPoisoned)?;
        let subj_idx = self.ensure_node(&mut graph, &triple.subject);
        let obj_idx = self.ensure_node(&mut graph, &triple.object);

        if graph
            .edges_connecting(subj_idx, obj_idx)
            .any(|e| *e.weight() == triple.predicate)
        {
            return Ok(false);
        }
        graph.add_edge(subj_idx, obj_idx, triple.predicate.clone());

        self.predicate_index
            .entry(triple.predicate.clone())
            .or_default()
            .push((triple.subject.clone(), triple.object.clone()));
        self.triple_count.fetch_add(1, Ordering::Relaxed);
        Ok(true)
    }

    fn remove(&self, triple: &Triple) -> GraphResult<bool> {
        let mut graph = self.graph.write().map_err(|_| GraphError::LockPoisoned)?;
        let (Some(subj_idx), Some(obj_idx)) = (self.lookup(&triple.subject), self.lookup(&triple.object))
        else {
            return Ok(false);
        };
        let edge = graph
            .edges_connecting(subj_idx, obj_idx)
            .find(|e| *e.weight() == triple.predicate)
            .map(|e| e.id());
        let Some(edge) = edge else {
            return Ok(false);
        };
        graph.remove_edge(edge);

        if let Some(mut pairs) = self.predicate_index.get_mut(&triple.predicate) {
            pairs.retain(|(s, o)| !(*s == triple.subject && *o == triple.object));
        }
        self.triple_count.fetch_sub(1, Ordering::Relaxed);
        Ok(true)
    }

    fn len(&self) -> GraphResult<usize> {
        Ok(self.triple_count.load(Ordering::Relaxed))
    }

    fn fresh_blank(&self) -> BlankId {
        loop {
            let id = self.blanks.next_id();
            if !self.node_index.contains_key(&Node::Blank(id.clone())) {
                return id;
            }
        }
    }
}

impl Default for MemGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemGraph")
            .field("nodes", &self.node_count())
            .field("triples", &self.triple_count.load(Ordering::Relaxed))
            .finish()
    }
}
