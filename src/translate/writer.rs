//! Axiom writing primitives.
//!
//! Writers never touch the graph directly. They push triples into a
//! [`WriteBuffer`], which drops duplicates within the call and adds the
//! result to the store in one pass on [`WriteBuffer::flush`].

use std::collections::{BTreeSet, HashSet};

use crate::config::TranslateConfig;
use crate::error::{GraphResult, TranslateResult};
use crate::graph::list::build_list;
use crate::graph::{BlankId, Graph, Iri, Node, Triple};
use crate::model::{
    Annotation, AnnotationValue, Axiom, ClassExpression, Individual, ObjectPropertyExpression,
    Operand,
};
use crate::vocab::{self, owl, rdf};

/// Emits the triples of an axiom.
pub trait AxiomWrite: Send + Sync {
    fn write(&self, axiom: &Axiom, out: &mut WriteBuffer<'_>) -> TranslateResult<()>;
}

/// Pending triples of one write call.
pub struct WriteBuffer<'g> {
    graph: &'g dyn Graph,
    config: &'g TranslateConfig,
    pending: Vec<Triple>,
    seen: HashSet<Triple>,
    /// Labels fresh nodes must not take: minted ones and those the axiom
    /// being written already uses.
    taken: HashSet<BlankId>,
}

impl<'g> WriteBuffer<'g> {
    pub fn new(graph: &'g dyn Graph, config: &'g TranslateConfig) -> Self {
        Self {
            graph,
            config,
            pending: Vec::new(),
            seen: HashSet::new(),
            taken: HashSet::new(),
        }
    }

    /// Keep fresh nodes off every blank label `axiom` refers to.
    pub fn reserve_labels(&mut self, axiom: &Axiom) {
        for operand in axiom.operands() {
            if let Operand::Individual(Individual::Anonymous(id)) = operand {
                self.taken.insert(id);
            }
        }
        self.reserve_annotation_labels(&axiom.annotations);
    }

    fn reserve_annotation_labels(&mut self, annotations: &BTreeSet<Annotation>) {
        for annotation in annotations {
            if let AnnotationValue::Anonymous(id) = &annotation.value {
                self.taken.insert(id.clone());
            }
            self.reserve_annotation_labels(&annotation.annotations);
        }
    }

    pub fn config(&self) -> &TranslateConfig {
        self.config
    }

    /// Queue a triple. Returns `false` if it was already queued.
    pub fn push(&mut self, triple: Triple) -> bool {
        if !self.seen.insert(triple.clone()) {
            return false;
        }
        self.pending.push(triple);
        true
    }

    /// A blank node used neither in the graph nor in this call.
    pub fn fresh(&mut self) -> Node {
        Node::Blank(self.fresh_label())
    }

    fn fresh_label(&mut self) -> BlankId {
        loop {
            let id = self.graph.fresh_blank();
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queued triples in push order.
    pub fn triples(&self) -> &[Triple] {
        &self.pending
    }

    /// Add the queued triples to the graph. Returns how many were new.
    pub fn flush(self) -> GraphResult<usize> {
        let mut added = 0;
        for triple in &self.pending {
            if self.graph.add(triple)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Queue `iri rdf:type declaration_type` unless declarations are off
    /// or the IRI is builtin.
    pub fn declare(&mut self, iri: &Iri, declaration_type: &str, builtins: &[&str]) {
        if !self.config.declare_entities || vocab::is_builtin(builtins, iri.as_str()) {
            return;
        }
        self.push(Triple::new(iri.clone(), rdf::TYPE, Node::iri(declaration_type)));
    }

    /// Queue the structure of `operand` and return the node standing for it.
    pub fn operand(&mut self, operand: &Operand) -> Node {
        match operand {
            Operand::Class(c) => self.class_expression(c),
            Operand::ObjectProperty(p) => self.object_property(p),
            Operand::DataProperty(iri) => {
                self.declare(iri, owl::DATATYPE_PROPERTY, vocab::BUILTIN_DATA_PROPERTIES);
                Node::Iri(iri.clone())
            }
            Operand::AnnotationProperty(iri) => {
                self.declare(iri, owl::ANNOTATION_PROPERTY, vocab::BUILTIN_ANNOTATION_PROPERTIES);
                Node::Iri(iri.clone())
            }
            Operand::Individual(Individual::Named(iri)) => {
                self.declare(iri, owl::NAMED_INDIVIDUAL, &[]);
                Node::Iri(iri.clone())
            }
            Operand::Individual(Individual::Anonymous(id)) => Node::Blank(id.clone()),
            Operand::Iri(iri) => Node::Iri(iri.clone()),
        }
    }

    pub fn object_property(&mut self, property: &ObjectPropertyExpression) -> Node {
        match property {
            ObjectPropertyExpression::Property(iri) => {
                self.declare(iri, owl::OBJECT_PROPERTY, vocab::BUILTIN_OBJECT_PROPERTIES);
                Node::Iri(iri.clone())
            }
            ObjectPropertyExpression::InverseOf(iri) => {
                self.declare(iri, owl::OBJECT_PROPERTY, vocab::BUILTIN_OBJECT_PROPERTIES);
                let node = self.fresh();
                self.push(Triple::new(node.clone(), owl::INVERSE_OF, iri.clone()));
                node
            }
        }
    }

    pub fn class_expression(&mut self, expression: &ClassExpression) -> Node {
        match expression {
            ClassExpression::Class(iri) => {
                self.declare(iri, owl::CLASS, vocab::BUILTIN_CLASSES);
                Node::Iri(iri.clone())
            }
            ClassExpression::UnionOf(members) => self.boolean(owl::UNION_OF, members),
            ClassExpression::IntersectionOf(members) => self.boolean(owl::INTERSECTION_OF, members),
            ClassExpression::ComplementOf(inner) => {
                let inner = self.class_expression(inner);
                let node = self.fresh();
                self.push(Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::CLASS)));
                self.push(Triple::new(node.clone(), owl::COMPLEMENT_OF, inner));
                node
            }
            ClassExpression::SomeValuesFrom { property, filler } => {
                self.restriction(property, owl::SOME_VALUES_FROM, filler)
            }
            ClassExpression::AllValuesFrom { property, filler } => {
                self.restriction(property, owl::ALL_VALUES_FROM, filler)
            }
        }
    }

    fn boolean(&mut self, predicate: &str, members: &BTreeSet<ClassExpression>) -> Node {
        let items: Vec<Node> = members.iter().map(|m| self.class_expression(m)).collect();
        let head = self.list(&items);
        let node = self.fresh();
        self.push(Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::CLASS)));
        self.push(Triple::new(node.clone(), predicate, head));
        node
    }

    fn restriction(
        &mut self,
        property: &ObjectPropertyExpression,
        predicate: &str,
        filler: &ClassExpression,
    ) -> Node {
        let property = self.object_property(property);
        let filler = self.class_expression(filler);
        let node = self.fresh();
        self.push(Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::RESTRICTION)));
        self.push(Triple::new(node.clone(), owl::ON_PROPERTY, property));
        self.push(Triple::new(node.clone(), predicate, filler));
        node
    }

    /// Queue an RDF list of `items` and return its head.
    pub fn list(&mut self, items: &[Node]) -> Node {
        let (head, cells) = build_list(items, || self.fresh_label());
        for cell in cells {
            self.push(cell);
        }
        head
    }

    /// Annotate an axiom stored as a single triple, through an `owl:Axiom`
    /// reification node. Nothing is queued for an empty set.
    pub fn annotate_triple(&mut self, triple: &Triple, annotations: &BTreeSet<Annotation>) {
        if annotations.is_empty() {
            return;
        }
        let node = self.fresh();
        self.reify(&node, owl::AXIOM, &triple.subject, &triple.predicate, &triple.object);
        self.annotate_node(&node, annotations);
    }

    /// Attach annotations to `anchor` directly. Annotations that carry
    /// annotations of their own get an `owl:Annotation` node each.
    pub fn annotate_node(&mut self, anchor: &Node, annotations: &BTreeSet<Annotation>) {
        for annotation in annotations {
            self.declare(
                &annotation.property,
                owl::ANNOTATION_PROPERTY,
                vocab::BUILTIN_ANNOTATION_PROPERTIES,
            );
            let value = annotation.value.to_node();
            self.push(Triple::new(anchor.clone(), annotation.property.clone(), value.clone()));
            if !annotation.annotations.is_empty() {
                let node = self.fresh();
                self.reify(&node, owl::ANNOTATION, anchor, &annotation.property, &value);
                self.annotate_node(&node, &annotation.annotations);
            }
        }
    }

    fn reify(&mut self, node: &Node, ty: &str, source: &Node, property: &Iri, target: &Node) {
        self.push(Triple::new(node.clone(), rdf::TYPE, Node::iri(ty)));
        self.push(Triple::new(node.clone(), owl::ANNOTATED_SOURCE, source.clone()));
        self.push(Triple::new(node.clone(), owl::ANNOTATED_PROPERTY, property.clone()));
        self.push(Triple::new(node.clone(), owl::ANNOTATED_TARGET, target.clone()));
    }
}

impl std::fmt::Debug for WriteBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteBuffer")
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mem::MemGraph;
    use crate::translate::testing::*;
    use crate::vocab::rdfs;

    #[test]
    fn duplicates_are_dropped_within_a_call() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let mut out = WriteBuffer::new(&g, &config);
        let t = Triple::new(node("a"), rdfs::DOMAIN, node("b"));
        assert!(out.push(t.clone()));
        assert!(!out.push(t));
        assert_eq!(out.len(), 1);
        assert_eq!(out.flush().unwrap(), 1);
        assert_eq!(g.len().unwrap(), 1);
    }

    #[test]
    fn declarations_follow_config() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let mut out = WriteBuffer::new(&g, &config);
        out.operand(&Operand::Class(class("A")));
        out.operand(&Operand::Class(ClassExpression::Class(Iri::new(owl::THING))));
        assert_eq!(out.triples(), &[Triple::new(node("A"), rdf::TYPE, Node::iri(owl::CLASS))]);

        let quiet = TranslateConfig {
            declare_entities: false,
            ..TranslateConfig::default()
        };
        let mut out = WriteBuffer::new(&g, &quiet);
        out.operand(&Operand::DataProperty(iri("d")));
        assert!(out.is_empty());
    }

    #[test]
    fn restriction_structure() {
        let g = MemGraph::new();
        let config = TranslateConfig {
            declare_entities: false,
            ..TranslateConfig::default()
        };
        let mut out = WriteBuffer::new(&g, &config);
        let node = out.class_expression(&ClassExpression::SomeValuesFrom {
            property: ObjectPropertyExpression::InverseOf(iri("p")),
            filler: Box::new(ClassExpression::UnionOf(set([class("A"), class("B")]))),
        });
        assert!(node.is_blank());
        // inverse 1 + list 4 + union 2 + restriction 3
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn nested_annotations_get_annotation_nodes() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let mut out = WriteBuffer::new(&g, &config);
        let triple = Triple::new(node("p"), rdfs::SUB_PROPERTY_OF, node("q"));
        let annotations = set([Annotation::literal(rdfs::COMMENT, "why")
            .annotated(Annotation::literal(iri("source"), "review"))]);
        out.annotate_triple(&triple, &annotations);

        let triples = out.triples();
        // axiom reification 4 + comment 1 + annotation reification 4
        // + declaration of ex:source 1 + nested value 1
        assert_eq!(triples.len(), 11);
        assert_eq!(
            triples
                .iter()
                .filter(|t| t.predicate.as_str() == owl::ANNOTATED_SOURCE)
                .count(),
            2
        );
    }
}
