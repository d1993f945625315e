//! Strategies shared by axioms stored as one `(subject, predicate, object)`
//! triple with two operand roles.

use crate::config::TranslateConfig;
use crate::error::{GraphResult, TranslateError, TranslateResult};
use crate::factory::ObjectFactory;
use crate::graph::{Graph, Node, Statement, Triple, TripleIter, TriplePattern};
use crate::model::{Axiom, AxiomBody, AxiomKind, OntObject, Operand};

use super::annotations::triple_annotations;
use super::filter::{self, StatementFilter};
use super::search::{self, SearchKey};
use super::writer::{AxiomWrite, WriteBuffer};
use super::Reconstruct;

/// Filter, reconstructor, writer and search key for one binary kind.
#[derive(Debug, Clone, Copy)]
pub struct BinaryStrategy {
    kind: AxiomKind,
    predicate: &'static str,
}

impl BinaryStrategy {
    pub fn new(kind: AxiomKind, predicate: &'static str) -> Self {
        Self { kind, predicate }
    }

    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    fn roles(&self, axiom: &Axiom) -> TranslateResult<[Operand; 2]> {
        let operands = axiom.operands();
        let actual = operands.len();
        <[Operand; 2]>::try_from(operands).map_err(|_| TranslateError::ArityMismatch {
            kind: self.kind.to_string(),
            expected: 2,
            actual,
        })
    }
}

/// Read both operands of `statement` and the annotations of its triple.
pub(crate) fn reconstruct_pair(
    kind: AxiomKind,
    statement: &Statement<'_>,
    factory: &dyn ObjectFactory,
) -> TranslateResult<OntObject<Axiom>> {
    let [subject_view, object_view] = kind.operand_views();
    let (subject, subject_content) = factory.operand(statement.subject(), subject_view)?.into_parts();
    let (object, object_content) = factory.operand(statement.object(), object_view)?.into_parts();
    let (annotations, annotation_content) =
        triple_annotations(statement.triple(), factory)?.into_parts();

    let body = AxiomBody::from_operands(kind, vec![subject, object])?;
    Ok(OntObject::new(
        Axiom { body, annotations },
        [statement.triple().clone()],
    )
    .with_content(subject_content)
    .with_content(object_content)
    .with_content(annotation_content))
}

/// Queue `subject predicate object` for two operands, with annotations.
pub(crate) fn write_pair(
    out: &mut WriteBuffer<'_>,
    [subject, object]: &[Operand; 2],
    predicate: &str,
    axiom: &Axiom,
) {
    let subject: Node = out.operand(subject);
    let object: Node = out.operand(object);
    let triple = Triple::new(subject, predicate, object);
    out.push(triple.clone());
    out.annotate_triple(&triple, &axiom.annotations);
}

impl StatementFilter for BinaryStrategy {
    fn candidates<'g>(&self, graph: &'g dyn Graph) -> TripleIter<'g> {
        filter::by_predicate(graph, self.predicate)
    }

    fn test(&self, statement: &Statement<'_>, config: &TranslateConfig) -> GraphResult<bool> {
        Ok(filter::has_predicate(statement, self.predicate)
            && filter::operands_cast(statement, self.kind.operand_views(), config)?)
    }
}

impl Reconstruct for BinaryStrategy {
    fn reconstruct(
        &self,
        statement: &Statement<'_>,
        factory: &dyn ObjectFactory,
    ) -> TranslateResult<OntObject<Axiom>> {
        reconstruct_pair(self.kind, statement, factory)
    }
}

impl AxiomWrite for BinaryStrategy {
    fn write(&self, axiom: &Axiom, out: &mut WriteBuffer<'_>) -> TranslateResult<()> {
        let operands = self.roles(axiom)?;
        write_pair(out, &operands, self.predicate, axiom);
        Ok(())
    }
}

impl SearchKey for BinaryStrategy {
    fn search_triples(&self, axiom: &Axiom, graph: &dyn Graph) -> GraphResult<Vec<TriplePattern>> {
        let Ok([subject, object]) = self.roles(axiom) else {
            return Ok(Vec::new());
        };
        Ok(search::search_triple(graph, &subject, self.predicate, &object)?
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mem::MemGraph;
    use crate::model::ObjectPropertyExpression;
    use crate::translate::testing::*;
    use crate::vocab::{owl, rdfs};

    #[test]
    fn search_key_for_named_operands() {
        let g = MemGraph::new();
        let strategy = BinaryStrategy::new(AxiomKind::SubObjectPropertyOf, rdfs::SUB_PROPERTY_OF);
        let axiom = Axiom::new(AxiomBody::SubObjectPropertyOf {
            sub: object_property("p"),
            sup: object_property("q"),
        });
        let patterns = strategy.search_triples(&axiom, &g).unwrap();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].wildcard_count(), 0);
    }

    #[test]
    fn inverse_operand_has_no_search_key() {
        let g = MemGraph::new();
        let strategy = BinaryStrategy::new(AxiomKind::SubObjectPropertyOf, rdfs::SUB_PROPERTY_OF);
        let axiom = Axiom::new(AxiomBody::SubObjectPropertyOf {
            sub: ObjectPropertyExpression::InverseOf(iri("p")),
            sup: object_property("q"),
        });
        assert!(strategy.search_triples(&axiom, &g).unwrap().is_empty());
    }

    #[test]
    fn writes_one_triple_plus_declarations() {
        let g = MemGraph::new();
        let config = TranslateConfig::default();
        let strategy = BinaryStrategy::new(AxiomKind::ObjectPropertyDomain, rdfs::DOMAIN);
        let axiom = Axiom::new(AxiomBody::ObjectPropertyDomain {
            property: object_property("p"),
            domain: class("C"),
        });
        let mut out = WriteBuffer::new(&g, &config);
        strategy.write(&axiom, &mut out).unwrap();
        out.flush().unwrap();

        assert_eq!(g.len().unwrap(), 3);
        assert!(g.has(&node("p"), rdfs::DOMAIN, &node("C")).unwrap());
        assert!(g.has_type(&node("p"), owl::OBJECT_PROPERTY).unwrap());
        assert!(g.has_type(&node("C"), owl::CLASS).unwrap());
    }
}
