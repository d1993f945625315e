//! `rdfs:domain` axioms for object, data and annotation properties.
//!
//! All three kinds share the predicate. The subject view decides which
//! kind a triple belongs to; under strict punning a property declared as
//! two kinds belongs to none.

use crate::model::AxiomKind;
use crate::vocab::rdfs;

use super::Translator;
use super::binary::BinaryStrategy;

pub const KINDS: [AxiomKind; 3] = [
    AxiomKind::ObjectPropertyDomain,
    AxiomKind::DataPropertyDomain,
    AxiomKind::AnnotationPropertyDomain,
];

pub(crate) fn translator(kind: AxiomKind) -> Translator {
    debug_assert!(KINDS.contains(&kind));
    Translator::from_strategy(kind, BinaryStrategy::new(kind, rdfs::DOMAIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PunningMode, TranslateConfig};
    use crate::factory::GraphObjectFactory;
    use crate::graph::mem::MemGraph;
    use crate::graph::{Graph, Node, Statement, Triple};
    use crate::model::{Annotation, Axiom, AxiomBody, ClassExpression, ObjectPropertyExpression};
    use crate::translate::testing::*;
    use crate::translate::translator as table;
    use crate::vocab::owl;

    fn roundtrip(axiom: &Axiom) {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let t = table(axiom.kind());
        assert!(t.write(axiom, &g, &config).unwrap());

        let factory = GraphObjectFactory::new(&g, &config);
        let read: Vec<_> = t
            .list_axioms(&g, &factory)
            .map(|a| a.unwrap().into_value())
            .collect();
        assert_eq!(read, vec![axiom.clone()]);
    }

    #[test]
    fn object_property_domain_roundtrip() {
        roundtrip(&Axiom::new(AxiomBody::ObjectPropertyDomain {
            property: object_property("hasParent"),
            domain: class("Person"),
        }));
    }

    #[test]
    fn domain_with_expressions_and_annotations_roundtrip() {
        roundtrip(
            &Axiom::new(AxiomBody::ObjectPropertyDomain {
                property: ObjectPropertyExpression::InverseOf(iri("hasChild")),
                domain: ClassExpression::IntersectionOf(set([
                    class("Person"),
                    ClassExpression::ComplementOf(Box::new(class("Robot"))),
                ])),
            })
            .annotated(Annotation::literal(rdfs::COMMENT, "parents are people")),
        );
    }

    #[test]
    fn data_property_domain_roundtrip() {
        roundtrip(&Axiom::new(AxiomBody::DataPropertyDomain {
            property: iri("age"),
            domain: class("Person"),
        }));
    }

    #[test]
    fn annotation_property_domain_roundtrip() {
        roundtrip(
            &Axiom::new(AxiomBody::AnnotationPropertyDomain {
                property: iri("editorialNote"),
                domain: iri("Document"),
            })
            .annotated(Annotation::literal(rdfs::LABEL, "notes on documents")),
        );
    }

    #[test]
    fn subject_view_selects_the_kind() {
        let g = MemGraph::new();
        declare(&g, "d", owl::DATATYPE_PROPERTY);
        classes(&g, &["C"]);
        let triple = Triple::new(node("d"), rdfs::DOMAIN, node("C"));
        g.add(&triple).unwrap();

        let config = TranslateConfig::default();
        let st = Statement::new(&g, triple);
        assert!(!table(AxiomKind::ObjectPropertyDomain).test_statement(&st, &config).unwrap());
        assert!(table(AxiomKind::DataPropertyDomain).test_statement(&st, &config).unwrap());
        assert!(!table(AxiomKind::AnnotationPropertyDomain).test_statement(&st, &config).unwrap());
    }

    #[test]
    fn punned_property_depends_on_mode() {
        let g = MemGraph::new();
        declare(&g, "p", owl::OBJECT_PROPERTY);
        declare(&g, "p", owl::DATATYPE_PROPERTY);
        classes(&g, &["C"]);
        g.add(&Triple::new(node("p"), rdfs::DOMAIN, node("C"))).unwrap();

        let strict = TranslateConfig::default();
        let t = table(AxiomKind::ObjectPropertyDomain);
        assert_eq!(t.list_statements(&g, &strict).count(), 0);

        let lax = TranslateConfig::default().with_punning(PunningMode::Lax);
        assert_eq!(t.list_statements(&g, &lax).count(), 1);
        assert_eq!(
            table(AxiomKind::DataPropertyDomain)
                .list_statements(&g, &lax)
                .count(),
            1
        );
    }

    #[test]
    fn idempotent_write() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let axiom = Axiom::new(AxiomBody::DataPropertyDomain {
            property: iri("age"),
            domain: ClassExpression::UnionOf(set([class("Person"), class("Pet")])),
        })
        .annotated(Annotation::literal(rdfs::COMMENT, "ages"));
        let t = table(AxiomKind::DataPropertyDomain);

        assert!(t.write(&axiom, &g, &config).unwrap());
        let after_first = g.len().unwrap();
        assert!(!t.write(&axiom, &g, &config).unwrap());
        assert_eq!(g.len().unwrap(), after_first);
        assert_eq!(t.find(&axiom, &g, &config).unwrap().len(), 1);
    }

    #[test]
    fn builtin_domain_needs_no_declaration() {
        let g = MemGraph::new();
        declare(&g, "p", owl::OBJECT_PROPERTY);
        g.add(&Triple::new(node("p"), rdfs::DOMAIN, Node::iri(owl::THING))).unwrap();

        let config = TranslateConfig::default();
        let factory = GraphObjectFactory::new(&g, &config);
        let read: Vec<_> = table(AxiomKind::ObjectPropertyDomain)
            .list_axioms(&g, &factory)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(
            read[0].value().body,
            AxiomBody::ObjectPropertyDomain {
                property: object_property("p"),
                domain: ClassExpression::class(owl::THING),
            }
        );
    }
}
