//! Object factories: resolving graph nodes into typed operands.
//!
//! Translators never inspect operand structure themselves. They hand a node
//! and the [`View`] it is expected to satisfy to an [`ObjectFactory`], which
//! either returns the typed operand with the triples that encode it, or a
//! [`TranslateError::MalformedOperand`].

use dashmap::DashMap;

use crate::config::TranslateConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::graph::list::read_list;
use crate::graph::{Graph, Node, Triple};
use crate::model::{
    AnnotationValue, ClassExpression, Individual, ObjectPropertyExpression, OntObject, Operand,
};
use crate::view::{View, ViewContext};
use crate::vocab::{owl, rdf};

/// Resolves nodes into typed operands.
pub trait ObjectFactory {
    fn graph(&self) -> &dyn Graph;

    fn config(&self) -> &TranslateConfig;

    /// Resolve `node` as an operand of `view`.
    fn operand(&self, node: &Node, view: View) -> TranslateResult<OntObject<Operand>>;

    /// Resolve an annotation value: IRI, literal or anonymous individual.
    fn annotation_value(&self, node: &Node) -> TranslateResult<OntObject<AnnotationValue>> {
        match node {
            Node::Iri(iri) => Ok(OntObject::bare(AnnotationValue::Iri(iri.clone()))),
            Node::Literal(lit) => Ok(OntObject::bare(AnnotationValue::Literal(lit.clone()))),
            Node::Blank(id) => {
                let cx = ViewContext::new(self.graph(), self.config());
                if cx.can_as(node, View::Individual)? {
                    Ok(OntObject::bare(AnnotationValue::Anonymous(id.clone())))
                } else {
                    Err(malformed(node, "annotation value"))
                }
            }
        }
    }

    fn class_expression(&self, node: &Node) -> TranslateResult<OntObject<ClassExpression>> {
        let (operand, content) = self.operand(node, View::ClassExpression)?.into_parts();
        Ok(OntObject::new(operand.into_class()?, content))
    }

    fn object_property(&self, node: &Node) -> TranslateResult<OntObject<ObjectPropertyExpression>> {
        let (operand, content) = self.operand(node, View::ObjectProperty)?.into_parts();
        Ok(OntObject::new(operand.into_object_property()?, content))
    }

    fn individual(&self, node: &Node) -> TranslateResult<OntObject<Individual>> {
        let (operand, content) = self.operand(node, View::Individual)?.into_parts();
        Ok(OntObject::new(operand.into_individual()?, content))
    }
}

fn malformed(node: &Node, expected: impl std::fmt::Display) -> TranslateError {
    TranslateError::MalformedOperand {
        node: node.to_string(),
        expected: expected.to_string(),
    }
}

/// Factory that reads operands straight from the graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphObjectFactory<'g> {
    graph: &'g dyn Graph,
    config: &'g TranslateConfig,
}

impl<'g> GraphObjectFactory<'g> {
    pub fn new(graph: &'g dyn Graph, config: &'g TranslateConfig) -> Self {
        Self { graph, config }
    }

    /// The single object of `(node, predicate, ?)`.
    fn single(&self, node: &Node, predicate: &str) -> TranslateResult<Option<Node>> {
        let mut objects = self.graph.objects(node, predicate)?;
        Ok(match objects.len() {
            1 => objects.pop(),
            _ => None,
        })
    }

    fn parse_object_property(&self, node: &Node) -> TranslateResult<OntObject<Operand>> {
        match node {
            Node::Iri(iri) => Ok(OntObject::bare(Operand::ObjectProperty(
                ObjectPropertyExpression::Property(iri.clone()),
            ))),
            Node::Blank(_) => match self.single(node, owl::INVERSE_OF)? {
                Some(Node::Iri(named)) => {
                    let triple = Triple::new(node.clone(), owl::INVERSE_OF, named.clone());
                    Ok(OntObject::new(
                        Operand::ObjectProperty(ObjectPropertyExpression::InverseOf(named)),
                        [triple],
                    ))
                }
                _ => Err(malformed(node, View::ObjectProperty)),
            },
            Node::Literal(_) => Err(malformed(node, View::ObjectProperty)),
        }
    }

    fn parse_class_expression(&self, node: &Node) -> TranslateResult<OntObject<ClassExpression>> {
        let Node::Blank(_) = node else {
            return match node {
                Node::Iri(iri) => Ok(OntObject::bare(ClassExpression::Class(iri.clone()))),
                _ => Err(malformed(node, View::ClassExpression)),
            };
        };

        if self.graph.has_type(node, owl::RESTRICTION)? {
            let property_node = self
                .single(node, owl::ON_PROPERTY)?
                .ok_or_else(|| malformed(node, "restriction"))?;
            let (property, property_content) =
                self.parse_object_property(&property_node)?.into_parts();
            let property = property.into_object_property()?;

            let (predicate, filler_node) = match (
                self.single(node, owl::SOME_VALUES_FROM)?,
                self.single(node, owl::ALL_VALUES_FROM)?,
            ) {
                (Some(filler), None) => (owl::SOME_VALUES_FROM, filler),
                (None, Some(filler)) => (owl::ALL_VALUES_FROM, filler),
                _ => return Err(malformed(node, "restriction")),
            };
            let (filler, filler_content) = self.parse_class_expression(&filler_node)?.into_parts();
            let filler = Box::new(filler);
            let expression = if predicate == owl::SOME_VALUES_FROM {
                ClassExpression::SomeValuesFrom { property, filler }
            } else {
                ClassExpression::AllValuesFrom { property, filler }
            };
            return Ok(OntObject::new(
                expression,
                [
                    Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::RESTRICTION)),
                    Triple::new(node.clone(), owl::ON_PROPERTY, property_node),
                    Triple::new(node.clone(), predicate, filler_node),
                ],
            )
            .with_content(property_content)
            .with_content(filler_content));
        }

        if !self.graph.has_type(node, owl::CLASS)? {
            return Err(malformed(node, View::ClassExpression));
        }
        let typed = Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::CLASS));

        if let Some(inner_node) = self.single(node, owl::COMPLEMENT_OF)? {
            let (inner, content) = self.parse_class_expression(&inner_node)?.into_parts();
            return Ok(OntObject::new(
                ClassExpression::ComplementOf(Box::new(inner)),
                [typed, Triple::new(node.clone(), owl::COMPLEMENT_OF, inner_node)],
            )
            .with_content(content));
        }

        let (predicate, head) = match (
            self.single(node, owl::UNION_OF)?,
            self.single(node, owl::INTERSECTION_OF)?,
        ) {
            (Some(head), None) => (owl::UNION_OF, head),
            (None, Some(head)) => (owl::INTERSECTION_OF, head),
            _ => return Err(malformed(node, View::ClassExpression)),
        };
        let list = read_list(self.graph, &head)?.ok_or_else(|| TranslateError::MalformedList {
            head: head.to_string(),
        })?;

        let mut object = OntObject::new((), [typed, Triple::new(node.clone(), predicate, head)])
            .with_content(list.content);
        let mut members = std::collections::BTreeSet::new();
        for item in &list.items {
            let (member, content) = self.parse_class_expression(item)?.into_parts();
            members.insert(member);
            object = object.with_content(content);
        }
        Ok(object.map(|()| {
            if predicate == owl::UNION_OF {
                ClassExpression::UnionOf(members)
            } else {
                ClassExpression::IntersectionOf(members)
            }
        }))
    }
}

impl ObjectFactory for GraphObjectFactory<'_> {
    fn graph(&self) -> &dyn Graph {
        self.graph
    }

    fn config(&self) -> &TranslateConfig {
        self.config
    }

    fn operand(&self, node: &Node, view: View) -> TranslateResult<OntObject<Operand>> {
        let cx = ViewContext::new(self.graph, self.config);
        if !cx.can_as(node, view)? {
            return Err(malformed(node, view));
        }
        match (view, node) {
            (View::ClassExpression, _) => Ok(self.parse_class_expression(node)?.map(Operand::Class)),
            (View::ObjectProperty, _) => self.parse_object_property(node),
            (View::DataProperty, Node::Iri(iri)) => Ok(OntObject::bare(Operand::DataProperty(iri.clone()))),
            (View::AnnotationProperty, Node::Iri(iri)) => {
                Ok(OntObject::bare(Operand::AnnotationProperty(iri.clone())))
            }
            (View::Individual, Node::Iri(iri)) => {
                Ok(OntObject::bare(Operand::Individual(Individual::Named(iri.clone()))))
            }
            (View::Individual, Node::Blank(id)) => {
                Ok(OntObject::bare(Operand::Individual(Individual::Anonymous(id.clone()))))
            }
            (View::Iri, Node::Iri(iri)) => Ok(OntObject::bare(Operand::Iri(iri.clone()))),
            _ => Err(malformed(node, view)),
        }
    }
}

/// Memoizing wrapper: operand resolution is cached per `(view, node)`.
///
/// Meant for one listing pass over a graph that is not written meanwhile;
/// the cache is never invalidated.
pub struct CachingObjectFactory<F> {
    inner: F,
    cache: DashMap<(View, Node), OntObject<Operand>>,
}

impl<F: ObjectFactory> CachingObjectFactory<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of cached operands.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl<F: ObjectFactory> ObjectFactory for CachingObjectFactory<F> {
    fn graph(&self) -> &dyn Graph {
        self.inner.graph()
    }

    fn config(&self) -> &TranslateConfig {
        self.inner.config()
    }

    fn operand(&self, node: &Node, view: View) -> TranslateResult<OntObject<Operand>> {
        let key = (view, node.clone());
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.value().clone());
        }
        let resolved = self.inner.operand(node, view)?;
        self.cache.insert(key, resolved.clone());
        Ok(resolved)
    }
}

impl<F> std::fmt::Debug for CachingObjectFactory<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingObjectFactory")
            .field("cached", &self.cache.len())
            .finish()
    }
}
