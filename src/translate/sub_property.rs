//! `rdfs:subPropertyOf` axioms for object, data and annotation properties.
//!
//! Subject and object must both cast to the same restricted property view;
//! a triple linking an object property to a data property is none of the
//! three kinds.

use crate::model::AxiomKind;
use crate::vocab::rdfs;

use super::Translator;
use super::binary::BinaryStrategy;

pub const KINDS: [AxiomKind; 3] = [
    AxiomKind::SubObjectPropertyOf,
    AxiomKind::SubDataPropertyOf,
    AxiomKind::SubAnnotationPropertyOf,
];

pub(crate) fn translator(kind: AxiomKind) -> Translator {
    debug_assert!(KINDS.contains(&kind));
    Translator::from_strategy(kind, BinaryStrategy::new(kind, rdfs::SUB_PROPERTY_OF))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslateConfig;
    use crate::factory::GraphObjectFactory;
    use crate::graph::mem::MemGraph;
    use crate::graph::{Graph, Statement, Triple};
    use crate::model::{Annotation, AnnotationValue, Axiom, AxiomBody, ObjectPropertyExpression};
    use crate::translate::testing::*;
    use crate::translate::translator as table;
    use crate::vocab::owl;

    fn read_all(g: &MemGraph, kind: AxiomKind) -> Vec<Axiom> {
        let config = TranslateConfig::default();
        let factory = GraphObjectFactory::new(g, &config);
        table(kind)
            .list_axioms(g, &factory)
            .map(|a| a.unwrap().into_value())
            .collect()
    }

    #[test]
    fn data_sub_property_is_not_object_or_annotation() {
        let g = MemGraph::new();
        declare_all(&g, &["x", "y"], owl::DATATYPE_PROPERTY);
        let triple = Triple::new(node("x"), rdfs::SUB_PROPERTY_OF, node("y"));
        g.add(&triple).unwrap();

        let config = TranslateConfig::default();
        let st = Statement::new(&g, triple);
        assert!(table(AxiomKind::SubDataPropertyOf).test_statement(&st, &config).unwrap());
        assert!(!table(AxiomKind::SubObjectPropertyOf).test_statement(&st, &config).unwrap());
        assert!(!table(AxiomKind::SubAnnotationPropertyOf).test_statement(&st, &config).unwrap());
    }

    #[test]
    fn mixed_views_match_no_kind() {
        let g = MemGraph::new();
        declare(&g, "o", owl::OBJECT_PROPERTY);
        declare(&g, "d", owl::DATATYPE_PROPERTY);
        g.add(&Triple::new(node("o"), rdfs::SUB_PROPERTY_OF, node("d"))).unwrap();

        let config = TranslateConfig::default();
        for kind in KINDS {
            assert_eq!(table(kind).list_statements(&g, &config).count(), 0, "{kind}");
        }
    }

    #[test]
    fn roundtrip_each_kind() {
        let axioms = [
            Axiom::new(AxiomBody::SubObjectPropertyOf {
                sub: object_property("hasMother"),
                sup: object_property("hasParent"),
            }),
            Axiom::new(AxiomBody::SubDataPropertyOf {
                sub: iri("birthYear"),
                sup: iri("year"),
            })
            .annotated(Annotation::literal(rdfs::COMMENT, "calendar year")),
            Axiom::new(AxiomBody::SubAnnotationPropertyOf {
                sub: iri("shortLabel"),
                sup: iri("label"),
            })
            .annotated(
                Annotation::new(iri("source"), AnnotationValue::Iri(iri("styleGuide")))
                    .annotated(Annotation::literal(rdfs::LABEL, "house style")),
            ),
        ];
        for axiom in axioms {
            let g = MemGraph::new();
            let config = TranslateConfig::default();
            assert!(table(axiom.kind()).write(&axiom, &g, &config).unwrap());
            assert_eq!(read_all(&g, axiom.kind()), vec![axiom.clone()]);
            for other in KINDS.into_iter().filter(|k| *k != axiom.kind()) {
                assert!(read_all(&g, other).is_empty(), "{other} read {axiom}");
            }
        }
    }

    #[test]
    fn inverse_sub_property_roundtrip() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let axiom = Axiom::new(AxiomBody::SubObjectPropertyOf {
            sub: ObjectPropertyExpression::InverseOf(iri("hasChild")),
            sup: object_property("hasParent"),
        })
        .annotated(Annotation::literal(rdfs::COMMENT, "inverse"));
        let t = table(AxiomKind::SubObjectPropertyOf);
        assert!(t.write(&axiom, &g, &config).unwrap());
        assert!(!t.write(&axiom, &g, &config).unwrap());
        assert_eq!(read_all(&g, AxiomKind::SubObjectPropertyOf), vec![axiom]);
    }

    #[test]
    fn two_annotated_copies_read_as_one_axiom() {
        let g = MemGraph::new();
        declare_all(&g, &["p", "q"], owl::OBJECT_PROPERTY);
        let triple = Triple::new(node("p"), rdfs::SUB_PROPERTY_OF, node("q"));
        g.add(&triple).unwrap();

        let config = TranslateConfig::default();
        for text in ["first", "second"] {
            let mut out = crate::translate::WriteBuffer::new(&g, &config);
            out.annotate_triple(&triple, &set([Annotation::literal(rdfs::COMMENT, text)]));
            out.flush().unwrap();
        }

        let read = read_all(&g, AxiomKind::SubObjectPropertyOf);
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].annotations.len(), 2);
    }
}
