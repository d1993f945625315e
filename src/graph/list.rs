//! RDF collections (`rdf:first` / `rdf:rest` / `rdf:nil`).

use std::collections::HashSet;

use crate::error::GraphResult;
use crate::vocab::rdf;

use super::blank::BlankId;
use super::{Graph, Node, Triple};

/// A list read back from a graph, with the cell triples that encode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdfList {
    pub head: Node,
    pub items: Vec<Node>,
    pub content: Vec<Triple>,
}

/// Read the list starting at `head`.
///
/// Returns `Ok(None)` if the structure is not a well-formed list: a cell
/// that is not a blank node, a cell without exactly one `rdf:first` and one
/// `rdf:rest`, or a cycle.
pub fn read_list(graph: &dyn Graph, head: &Node) -> GraphResult<Option<RdfList>> {
    let mut items = Vec::new();
    let mut content = Vec::new();
    let mut visited = HashSet::new();
    let mut current = head.clone();

    while !current.is(rdf::NIL) {
        if !current.is_blank() || !visited.insert(current.clone()) {
            return Ok(None);
        }
        let firsts = graph.objects(&current, rdf::FIRST)?;
        let rests = graph.objects(&current, rdf::REST)?;
        let ([first], [rest]) = (firsts.as_slice(), rests.as_slice()) else {
            return Ok(None);
        };
        content.push(Triple::new(current.clone(), rdf::FIRST, first.clone()));
        content.push(Triple::new(current.clone(), rdf::REST, rest.clone()));
        items.push(first.clone());
        current = rest.clone();
    }

    Ok(Some(RdfList {
        head: head.clone(),
        items,
        content,
    }))
}

/// Encode `items` as a list, minting cells with `fresh`.
///
/// Returns the head node (`rdf:nil` for an empty list) and the cell triples
/// in list order.
pub fn build_list(items: &[Node], mut fresh: impl FnMut() -> BlankId) -> (Node, Vec<Triple>) {
    let cells: Vec<Node> = items.iter().map(|_| Node::Blank(fresh())).collect();
    let mut triples = Vec::with_capacity(items.len() * 2);
    for (i, (cell, item)) in cells.iter().zip(items).enumerate() {
        let rest = cells.get(i + 1).cloned().unwrap_or_else(|| Node::iri(rdf::NIL));
        triples.push(Triple::new(cell.clone(), rdf::FIRST, item.clone()));
        triples.push(Triple::new(cell.clone(), rdf::REST, rest));
    }
    let head = cells.first().cloned().unwrap_or_else(|| Node::iri(rdf::NIL));
    (head, triples)
}
