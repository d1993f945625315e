//! Reading axiom annotations back from a graph.
//!
//! Single-triple axioms are annotated through `owl:Axiom` reification
//! nodes, collection nodes carry their annotations directly, and an
//! annotation with annotations of its own is reified by an `owl:Annotation`
//! node. Several reification nodes for one triple merge into one set.

use std::collections::BTreeSet;

use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::{Iri, Node, Triple, TriplePattern};
use crate::model::{Annotation, OntObject};
use crate::view::{View, ViewContext};
use crate::vocab::{owl, rdf};

/// Predicates of a reification node that are not annotations.
pub const REIFICATION_PREDICATES: &[&str] = &[
    rdf::TYPE,
    owl::ANNOTATED_SOURCE,
    owl::ANNOTATED_PROPERTY,
    owl::ANNOTATED_TARGET,
];

/// Bound on `owl:Annotation` nesting, against crafted cycles.
const MAX_ANNOTATION_DEPTH: usize = 16;

/// Reification nodes `r` of type `ty` with
/// `r owl:annotatedSource source; owl:annotatedProperty property; owl:annotatedTarget target`,
/// each with its four reification triples.
fn reifications(
    factory: &dyn ObjectFactory,
    ty: &str,
    source: &Node,
    property: &Iri,
    target: &Node,
) -> TranslateResult<Vec<(Node, [Triple; 4])>> {
    let graph = factory.graph();
    let property_node = Node::Iri(property.clone());
    let mut found = Vec::new();
    for node in graph.subjects(owl::ANNOTATED_SOURCE, source)? {
        if !node.is_blank()
            || !graph.has_type(&node, ty)?
            || !graph.has(&node, owl::ANNOTATED_PROPERTY, &property_node)?
            || !graph.has(&node, owl::ANNOTATED_TARGET, target)?
        {
            continue;
        }
        let content = [
            Triple::new(node.clone(), rdf::TYPE, Node::iri(ty)),
            Triple::new(node.clone(), owl::ANNOTATED_SOURCE, source.clone()),
            Triple::new(node.clone(), owl::ANNOTATED_PROPERTY, property_node.clone()),
            Triple::new(node.clone(), owl::ANNOTATED_TARGET, target.clone()),
        ];
        found.push((node, content));
    }
    Ok(found)
}

/// Annotations of the axiom stored as `triple`, merged over all of its
/// `owl:Axiom` reification nodes.
pub fn triple_annotations(
    triple: &Triple,
    factory: &dyn ObjectFactory,
) -> TranslateResult<OntObject<BTreeSet<Annotation>>> {
    let nodes = reifications(
        factory,
        owl::AXIOM,
        &triple.subject,
        &triple.predicate,
        &triple.object,
    )?;
    if nodes.len() > 1 {
        tracing::debug!(%triple, count = nodes.len(), "merging reification nodes");
    }

    let mut annotations = BTreeSet::new();
    let mut content = Vec::new();
    for (node, reification) in nodes {
        let (found, found_content) =
            node_annotations(&node, REIFICATION_PREDICATES, factory)?.into_parts();
        annotations.extend(found);
        content.extend(reification);
        content.extend(found_content);
    }
    Ok(OntObject::new(annotations, content))
}

/// Annotations asserted directly on `anchor`, ignoring `skip` predicates.
pub fn node_annotations(
    anchor: &Node,
    skip: &[&str],
    factory: &dyn ObjectFactory,
) -> TranslateResult<OntObject<BTreeSet<Annotation>>> {
    annotations_at(anchor, skip, factory, 0)
}

fn annotations_at(
    anchor: &Node,
    skip: &[&str],
    factory: &dyn ObjectFactory,
    depth: usize,
) -> TranslateResult<OntObject<BTreeSet<Annotation>>> {
    let graph = factory.graph();
    let cx = ViewContext::new(graph, factory.config());
    let mut annotations = BTreeSet::new();
    let mut content = Vec::new();

    for triple in graph.find(&TriplePattern::any().with_subject(anchor.clone())) {
        let triple = triple?;
        if skip.contains(&triple.predicate.as_str()) {
            continue;
        }
        let property = Node::Iri(triple.predicate.clone());
        if !cx.can_as(&property, View::AnnotationProperty)? {
            tracing::debug!(%triple, "not an annotation property, skipped");
            continue;
        }

        let (value, value_content) = factory.annotation_value(&triple.object)?.into_parts();
        let mut annotation = Annotation::new(triple.predicate.clone(), value);
        content.extend(value_content);

        if depth < MAX_ANNOTATION_DEPTH {
            let nested = reifications(
                factory,
                owl::ANNOTATION,
                anchor,
                &triple.predicate,
                &triple.object,
            )?;
            for (node, reification) in nested {
                let (found, found_content) =
                    annotations_at(&node, REIFICATION_PREDICATES, factory, depth + 1)?.into_parts();
                annotation.annotations.extend(found);
                content.extend(reification);
                content.extend(found_content);
            }
        }

        annotations.insert(annotation);
        content.push(triple);
    }
    Ok(OntObject::new(annotations, content))
}
