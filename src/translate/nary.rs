//! Symmetric n-ary axioms: disjoint classes, disjoint object or data
//! properties, different individuals.
//!
//! Each kind has two wire forms. Exactly two operands are written as one
//! pairwise triple (`A owl:disjointWith B`). Any other count, or zero
//! operands with annotations, is written as an anonymous collection node:
//!
//! ```text
//! _:c rdf:type owl:AllDisjointClasses ;
//!     owl:members ( A B C ) .
//! ```
//!
//! Annotations go on the collection node itself, or on an `owl:Axiom`
//! reification of the pairwise triple. Both forms read back to the same
//! [`AxiomBody`], so listing must cover both: the predicate scan and the
//! scan for typed collection nodes.
//!
//! An `owl:AllDisjointProperties` node with an empty member list says
//! nothing about the kind of its members and is read as object property
//! disjointness. An annotated `DisjointDataProperties` axiom without
//! operands therefore reads back as `DisjointObjectProperties`; writing one
//! logs a warning.

use crate::config::TranslateConfig;
use crate::error::{GraphResult, TranslateError, TranslateResult};
use crate::factory::ObjectFactory;
use crate::graph::list::read_list;
use crate::graph::{Graph, Iri, Node, Statement, Triple, TripleIter, TriplePattern};
use crate::model::{Axiom, AxiomBody, AxiomKind, OntObject, Operand};
use crate::view::View;
use crate::vocab::{owl, rdf};

use super::Reconstruct;
use super::Translator;
use super::annotations::node_annotations;
use super::binary::{reconstruct_pair, write_pair};
use super::filter::{self, StatementFilter};
use super::search::{self, SearchKey};
use super::writer::{AxiomWrite, WriteBuffer};

pub const KINDS: [AxiomKind; 4] = [
    AxiomKind::DisjointClasses,
    AxiomKind::DisjointObjectProperties,
    AxiomKind::DisjointDataProperties,
    AxiomKind::DifferentIndividuals,
];

const MEMBERS: &[&str] = &[owl::MEMBERS];

/// `owl:distinctMembers` is written; `owl:members` is accepted on read.
const DISTINCT_MEMBERS: &[&str] = &[owl::DISTINCT_MEMBERS, owl::MEMBERS];

/// How a statement matched an n-ary kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaryForm {
    /// `A predicate B`.
    Pairwise,
    /// `_:c rdf:type CollectionType` with a member list.
    Collection,
}

/// Wire vocabulary and views of one n-ary kind.
#[derive(Debug, Clone, Copy)]
pub struct NaryStrategy {
    kind: AxiomKind,
    predicate: &'static str,
    collection_type: &'static str,
    collection_view: View,
    /// Written member predicate first, then any accepted on read.
    member_predicates: &'static [&'static str],
}

impl NaryStrategy {
    pub fn for_kind(kind: AxiomKind) -> Self {
        let (predicate, collection_type, collection_view, member_predicates) =
            match kind {
                AxiomKind::DisjointObjectProperties => (
                    owl::PROPERTY_DISJOINT_WITH,
                    owl::ALL_DISJOINT_PROPERTIES,
                    View::AllDisjointObjectProperties,
                    MEMBERS,
                ),
                AxiomKind::DisjointDataProperties => (
                    owl::PROPERTY_DISJOINT_WITH,
                    owl::ALL_DISJOINT_PROPERTIES,
                    View::AllDisjointDataProperties,
                    MEMBERS,
                ),
                AxiomKind::DifferentIndividuals => (
                    owl::DIFFERENT_FROM,
                    owl::ALL_DIFFERENT,
                    View::AllDifferent,
                    DISTINCT_MEMBERS,
                ),
                _ => (
                    owl::DISJOINT_WITH,
                    owl::ALL_DISJOINT_CLASSES,
                    View::AllDisjointClasses,
                    MEMBERS,
                ),
            };
        Self {
            kind,
            predicate,
            collection_type,
            collection_view,
            member_predicates,
        }
    }

    /// `(ANY rdf:type CollectionType)`.
    fn collections(&self) -> TriplePattern {
        TriplePattern::predicate(rdf::TYPE).with_object(Node::iri(self.collection_type))
    }

    fn member_view(&self) -> View {
        self.kind.operand_views()[0]
    }

    /// Which form `statement` matches, if any.
    pub fn form(
        &self,
        statement: &Statement<'_>,
        config: &TranslateConfig,
    ) -> GraphResult<Option<NaryForm>> {
        if filter::has_predicate(statement, rdf::TYPE) && statement.object().is(self.collection_type) {
            let matched = statement.subject_can_as(self.collection_view, config)?;
            return Ok(matched.then_some(NaryForm::Collection));
        }
        if filter::has_predicate(statement, self.predicate)
            && filter::operands_cast(statement, self.kind.operand_views(), config)?
        {
            return Ok(Some(NaryForm::Pairwise));
        }
        Ok(None)
    }

    fn reconstruct_collection(
        &self,
        statement: &Statement<'_>,
        factory: &dyn ObjectFactory,
    ) -> TranslateResult<OntObject<Axiom>> {
        let graph = factory.graph();
        let collection = statement.subject();

        let mut heads = Vec::new();
        for predicate in self.member_predicates {
            for head in graph.objects(collection, predicate)? {
                heads.push(Triple::new(collection.clone(), *predicate, head));
            }
        }
        let [members_triple] = heads.as_slice() else {
            return Err(TranslateError::MalformedOperand {
                node: collection.to_string(),
                expected: self.collection_view.to_string(),
            });
        };
        let list = read_list(graph, &members_triple.object)?.ok_or_else(|| {
            TranslateError::MalformedList {
                head: members_triple.object.to_string(),
            }
        })?;

        let mut content = vec![statement.triple().clone(), members_triple.clone()];
        content.extend(list.content);
        let mut operands = Vec::with_capacity(list.items.len());
        for item in &list.items {
            let (operand, operand_content) = factory.operand(item, self.member_view())?.into_parts();
            operands.push(operand);
            content.extend(operand_content);
        }

        let mut skip = vec![rdf::TYPE];
        skip.extend(self.member_predicates);
        let (annotations, annotation_content) =
            node_annotations(collection, &skip, factory)?.into_parts();
        content.extend(annotation_content);

        let body = AxiomBody::from_operands(self.kind, operands)?;
        Ok(OntObject::new(Axiom { body, annotations }, content))
    }
}

pub(crate) fn translator(kind: AxiomKind) -> Translator {
    debug_assert!(KINDS.contains(&kind));
    Translator::from_strategy(kind, NaryStrategy::for_kind(kind))
}

impl StatementFilter for NaryStrategy {
    /// Pairwise triples followed by collection type triples.
    fn candidates<'g>(&self, graph: &'g dyn Graph) -> TripleIter<'g> {
        let collections = self.collections();
        Box::new(
            filter::by_predicate(graph, self.predicate).chain(graph.find(&collections)),
        )
    }

    fn test(&self, statement: &Statement<'_>, config: &TranslateConfig) -> GraphResult<bool> {
        Ok(self.form(statement, config)?.is_some())
    }
}

impl Reconstruct for NaryStrategy {
    fn reconstruct(
        &self,
        statement: &Statement<'_>,
        factory: &dyn ObjectFactory,
    ) -> TranslateResult<OntObject<Axiom>> {
        match self.form(statement, factory.config())? {
            Some(NaryForm::Collection) => self.reconstruct_collection(statement, factory),
            Some(NaryForm::Pairwise) => reconstruct_pair(self.kind, statement, factory),
            None => Err(TranslateError::WrongKind {
                statement: statement.to_string(),
                kind: self.kind.to_string(),
            }),
        }
    }
}

impl AxiomWrite for NaryStrategy {
    fn write(&self, axiom: &Axiom, out: &mut WriteBuffer<'_>) -> TranslateResult<()> {
        let operands = axiom.operands();
        if operands.is_empty() && axiom.annotations.is_empty() {
            tracing::warn!(kind = %self.kind, "empty n-ary axiom, nothing written");
            return Ok(());
        }

        if operands.is_empty() && self.kind == AxiomKind::DisjointDataProperties {
            tracing::warn!(
                kind = %self.kind,
                "memberless data property disjointness reads back as object property disjointness"
            );
        }

        if let Ok(pair) = <&[Operand; 2]>::try_from(operands.as_slice()) {
            write_pair(out, pair, self.predicate, axiom);
            return Ok(());
        }

        let members: Vec<Node> = operands.iter().map(|operand| out.operand(operand)).collect();
        let head = out.list(&members);
        let collection = out.fresh();
        out.push(Triple::new(collection.clone(), rdf::TYPE, Node::iri(self.collection_type)));
        out.push(Triple::new(
            collection.clone(),
            Iri::new(self.member_predicates[0]),
            head,
        ));
        out.annotate_node(&collection, &axiom.annotations);
        Ok(())
    }
}

impl SearchKey for NaryStrategy {
    /// Two operands: the pairwise triple in either direction, plus the
    /// collection type scan, since a two-member collection node encodes the
    /// same axiom. Other counts have no key.
    fn search_triples(&self, axiom: &Axiom, graph: &dyn Graph) -> GraphResult<Vec<TriplePattern>> {
        let operands = axiom.operands();
        let [a, b] = operands.as_slice() else {
            return Ok(Vec::new());
        };
        let forward = search::search_triple(graph, a, self.predicate, b)?;
        let backward = search::search_triple(graph, b, self.predicate, a)?;
        Ok(match (forward, backward) {
            (Some(forward), Some(backward)) => vec![forward, backward, self.collections()],
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::GraphObjectFactory;
    use crate::graph::mem::MemGraph;
    use crate::graph::list::build_list;
    use crate::model::{Annotation, ClassExpression, Individual};
    use crate::translate::testing::*;
    use crate::translate::translator as table;
    use crate::vocab::rdfs;

    fn read_all(g: &MemGraph, kind: AxiomKind) -> Vec<Axiom> {
        let config = TranslateConfig::default();
        let factory = GraphObjectFactory::new(g, &config);
        table(kind)
            .list_axioms(g, &factory)
            .map(|a| a.unwrap().into_value())
            .collect()
    }

    fn disjoint_classes(locals: &[&str]) -> Axiom {
        Axiom::new(AxiomBody::DisjointClasses {
            members: locals.iter().map(|l| class(l)).collect(),
        })
    }

    fn roundtrip(axiom: &Axiom) -> MemGraph {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        assert!(table(axiom.kind()).write(axiom, &g, &config).unwrap());
        assert_eq!(read_all(&g, axiom.kind()), vec![axiom.clone()], "{axiom}");
        g
    }

    #[test]
    fn two_operands_use_the_pairwise_triple() {
        let g = roundtrip(&disjoint_classes(&["A", "B"]));
        assert!(g.has(&node("A"), owl::DISJOINT_WITH, &node("B")).unwrap());
        assert_eq!(
            g.find(&TriplePattern::predicate(rdf::TYPE).with_object(Node::iri(owl::ALL_DISJOINT_CLASSES)))
                .count(),
            0
        );
    }

    #[test]
    fn three_operands_use_a_collection_node() {
        let g = roundtrip(&disjoint_classes(&["A", "B", "C"]));
        assert_eq!(g.list_by_predicate(&Iri::new(owl::DISJOINT_WITH)).count(), 0);
        assert_eq!(
            g.find(&TriplePattern::predicate(rdf::TYPE).with_object(Node::iri(owl::ALL_DISJOINT_CLASSES)))
                .count(),
            1
        );
    }

    #[test]
    fn one_operand_roundtrip() {
        roundtrip(&disjoint_classes(&["A"]));
    }

    #[test]
    fn annotated_forms_roundtrip() {
        let note = Annotation::literal(rdfs::COMMENT, "pairwise disjoint");
        roundtrip(&disjoint_classes(&["A", "B"]).annotated(note.clone()));
        roundtrip(&disjoint_classes(&["A", "B", "C", "D"]).annotated(note.clone()));
        roundtrip(
            &disjoint_classes(&["A"])
                .annotated(note.clone().annotated(Annotation::literal(rdfs::LABEL, "nested"))),
        );
        // no operands, annotations only
        roundtrip(&disjoint_classes(&[]).annotated(note));
    }

    #[test]
    fn collection_annotations_sit_on_the_node() {
        let g = roundtrip(
            &disjoint_classes(&["A", "B", "C"]).annotated(Annotation::literal(rdfs::COMMENT, "x")),
        );
        let collection = g.subjects(rdf::TYPE, &Node::iri(owl::ALL_DISJOINT_CLASSES)).unwrap();
        let [collection] = collection.as_slice() else {
            panic!("expected one collection node");
        };
        assert_eq!(g.objects(collection, rdfs::COMMENT).unwrap().len(), 1);
        assert!(g.subjects(rdf::TYPE, &Node::iri(owl::AXIOM)).unwrap().is_empty());
    }

    #[test]
    fn property_and_individual_kinds_roundtrip() {
        roundtrip(&Axiom::new(AxiomBody::DisjointObjectProperties {
            members: set([object_property("p1"), object_property("p2")]),
        }));
        roundtrip(&Axiom::new(AxiomBody::DisjointObjectProperties {
            members: set([
                object_property("p1"),
                object_property("p2"),
                crate::model::ObjectPropertyExpression::InverseOf(iri("p3")),
            ]),
        }));
        roundtrip(&Axiom::new(AxiomBody::DisjointDataProperties {
            members: set([iri("d1"), iri("d2"), iri("d3")]),
        }));
        roundtrip(&Axiom::new(AxiomBody::DifferentIndividuals {
            members: set([individual("alice"), Individual::anonymous("someone")]),
        }));
        roundtrip(&Axiom::new(AxiomBody::DifferentIndividuals {
            members: set([individual("alice"), individual("bob"), individual("carol")]),
        }));
    }

    #[test]
    fn pairwise_and_collection_forms_unify() {
        let pair = disjoint_classes(&["A", "B"]);
        let triple = disjoint_classes(&["A", "B", "C"]);
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let t = table(AxiomKind::DisjointClasses);
        t.write(&pair, &g, &config).unwrap();
        t.write(&triple, &g, &config).unwrap();

        let mut read = read_all(&g, AxiomKind::DisjointClasses);
        read.sort();
        let mut expected = vec![pair, triple];
        expected.sort();
        assert_eq!(read, expected);
    }

    #[test]
    fn two_member_collection_reads_as_the_pairwise_axiom() {
        let g = MemGraph::new();
        classes(&g, &["A", "B"]);
        let collection = Node::Blank(g.fresh_blank());
        let (head, cells) = build_list(&[node("A"), node("B")], || g.fresh_blank());
        for t in &cells {
            g.add(t).unwrap();
        }
        g.add(&Triple::new(collection.clone(), rdf::TYPE, Node::iri(owl::ALL_DISJOINT_CLASSES)))
            .unwrap();
        g.add(&Triple::new(collection, owl::MEMBERS, head)).unwrap();

        assert_eq!(read_all(&g, AxiomKind::DisjointClasses), vec![disjoint_classes(&["A", "B"])]);
    }

    #[test]
    fn distinct_members_and_members_both_read() {
        let g = MemGraph::new();
        declare_all(&g, &["a", "b", "c"], owl::NAMED_INDIVIDUAL);
        for predicate in [owl::DISTINCT_MEMBERS, owl::MEMBERS] {
            let collection = Node::Blank(g.fresh_blank());
            let (head, cells) = build_list(&[node("a"), node("b"), node("c")], || g.fresh_blank());
            for t in &cells {
                g.add(t).unwrap();
            }
            g.add(&Triple::new(collection.clone(), rdf::TYPE, Node::iri(owl::ALL_DIFFERENT)))
                .unwrap();
            g.add(&Triple::new(collection, predicate, head)).unwrap();
        }
        let read = read_all(&g, AxiomKind::DifferentIndividuals);
        assert_eq!(read.len(), 2);
        assert_eq!(read[0], read[1]);
    }

    #[test]
    fn listing_covers_both_forms() {
        // P1 domain C1, plus one AllDisjointProperties node over P2..P4.
        let g = MemGraph::new();
        declare_all(&g, &["P1", "P2", "P3", "P4"], owl::OBJECT_PROPERTY);
        classes(&g, &["C1"]);
        g.add(&Triple::new(node("P1"), rdfs::DOMAIN, node("C1"))).unwrap();
        let config = TranslateConfig::default();
        let disjoint = Axiom::new(AxiomBody::DisjointObjectProperties {
            members: set([object_property("P2"), object_property("P3"), object_property("P4")]),
        });
        table(AxiomKind::DisjointObjectProperties)
            .write(&disjoint, &g, &config)
            .unwrap();

        let domains = table(AxiomKind::ObjectPropertyDomain)
            .list_statements(&g, &config)
            .count();
        let disjoints = table(AxiomKind::DisjointObjectProperties)
            .list_statements(&g, &config)
            .count();
        assert_eq!(domains + disjoints, 2);
        assert_eq!(disjoints, 1);
        assert_eq!(
            table(AxiomKind::DisjointDataProperties)
                .list_statements(&g, &config)
                .count(),
            0
        );
    }

    #[test]
    fn empty_axiom_is_a_no_op() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        classes(&g, &["A"]);
        let before = g.len().unwrap();
        for kind in KINDS {
            let axiom = Axiom::new(AxiomBody::from_operands(kind, Vec::new()).unwrap());
            assert!(!table(kind).write(&axiom, &g, &config).unwrap());
            let mut out = WriteBuffer::new(&g, &config);
            NaryStrategy::for_kind(kind).write(&axiom, &mut out).unwrap();
            assert!(out.is_empty());
        }
        assert_eq!(g.len().unwrap(), before);
    }

    #[test]
    fn idempotent_in_both_forms() {
        for axiom in [
            disjoint_classes(&["A", "B"]).annotated(Annotation::literal(rdfs::COMMENT, "c")),
            disjoint_classes(&["A", "B", "C"]),
        ] {
            let g = MemGraph::new();
            let config = TranslateConfig::default();
            let t = table(AxiomKind::DisjointClasses);
            assert!(t.write(&axiom, &g, &config).unwrap());
            let after_first = g.len().unwrap();
            assert!(!t.write(&axiom, &g, &config).unwrap());
            assert_eq!(g.len().unwrap(), after_first);
        }
    }

    #[test]
    fn reversed_pairwise_triple_is_found() {
        let g = MemGraph::new();
        classes(&g, &["A", "B"]);
        g.add(&Triple::new(node("B"), owl::DISJOINT_WITH, node("A"))).unwrap();

        let config = TranslateConfig::default();
        let t = table(AxiomKind::DisjointClasses);
        let axiom = disjoint_classes(&["A", "B"]);
        assert_eq!(t.find(&axiom, &g, &config).unwrap().len(), 1);
        assert!(!t.write(&axiom, &g, &config).unwrap());
    }

    #[test]
    fn complex_members_roundtrip() {
        roundtrip(&Axiom::new(AxiomBody::DisjointClasses {
            members: set([
                class("A"),
                ClassExpression::SomeValuesFrom {
                    property: object_property("p"),
                    filler: Box::new(class("B")),
                },
                ClassExpression::ComplementOf(Box::new(class("C"))),
            ]),
        }));
    }

    #[test]
    fn search_key_covers_both_orientations() {
        let g = MemGraph::new();
        let strategy = NaryStrategy::for_kind(AxiomKind::DisjointClasses);
        let patterns = strategy
            .search_triples(&disjoint_classes(&["A", "B"]), &g)
            .unwrap();
        assert_eq!(patterns.len(), 3);
        assert!(patterns[..2].iter().all(|p| p.wildcard_count() == 0));
        assert_ne!(patterns[0], patterns[1]);
        assert_eq!(patterns[2].wildcard_count(), 1);
        assert!(patterns.iter().all(search::is_good_search_triple));
        assert!(
            strategy
                .search_triples(&disjoint_classes(&["A", "B", "C"]), &g)
                .unwrap()
                .is_empty()
        );
    }
    #[test]
    fn anonymous_members_keep_their_labels() {
        // `g0` and `g1` are the first labels a fresh MemGraph would mint.
        let g = MemGraph::new();
        let axiom = Axiom::new(AxiomBody::DifferentIndividuals {
            members: set([Individual::anonymous("g0"), individual("a"), individual("b")]),
        })
        .annotated(Annotation::new(
            rdfs::SEE_ALSO,
            crate::model::AnnotationValue::Anonymous(crate::graph::BlankId::new("g1")),
        ));
        let config = TranslateConfig::default();
        assert!(table(AxiomKind::DifferentIndividuals).write(&axiom, &g, &config).unwrap());

        let g0 = Node::Blank(crate::graph::BlankId::new("g0"));
        assert!(g.objects(&g0, rdf::FIRST).unwrap().is_empty());
        assert_eq!(read_all(&g, AxiomKind::DifferentIndividuals), vec![axiom]);
    }

    #[test]
    fn two_member_collection_is_found_and_removed() {
        let g = MemGraph::new();
        classes(&g, &["A", "B"]);
        let collection = Node::Blank(g.fresh_blank());
        let (head, cells) = build_list(&[node("A"), node("B")], || g.fresh_blank());
        for t in &cells {
            g.add(t).unwrap();
        }
        g.add(&Triple::new(collection.clone(), rdf::TYPE, Node::iri(owl::ALL_DISJOINT_CLASSES)))
            .unwrap();
        g.add(&Triple::new(collection, owl::MEMBERS, head)).unwrap();

        let config = TranslateConfig::default();
        let t = table(AxiomKind::DisjointClasses);
        let axiom = disjoint_classes(&["A", "B"]);
        assert_eq!(t.find(&axiom, &g, &config).unwrap().len(), 1);

        let before = g.len().unwrap();
        assert!(!t.write(&axiom, &g, &config).unwrap());
        assert_eq!(g.len().unwrap(), before);
        assert!(!g.has(&node("A"), owl::DISJOINT_WITH, &node("B")).unwrap());

        // type + members + two list cells
        assert_eq!(t.remove(&axiom, &g, &config).unwrap(), 6);
        assert!(read_all(&g, AxiomKind::DisjointClasses).is_empty());
    }

    #[test]
    fn memberless_data_disjointness_reads_as_object_kind() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let body = AxiomBody::DisjointDataProperties { members: set([]) };
        let axiom = Axiom::new(body).annotated(Annotation::literal(rdfs::COMMENT, "none yet"));
        assert!(table(AxiomKind::DisjointDataProperties).write(&axiom, &g, &config).unwrap());

        assert!(read_all(&g, AxiomKind::DisjointDataProperties).is_empty());
        let read = read_all(&g, AxiomKind::DisjointObjectProperties);
        assert_eq!(read.len(), 1);
        assert!(read[0].operands().is_empty());
        assert_eq!(read[0].annotations, axiom.annotations);
    }
}
