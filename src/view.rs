//! View casting: interpreting a graph node as a typed OWL resource.
//!
//! A node "can be viewed as" an object property, a class expression, a
//! disjointness collection, and so on, when its local structure in the graph
//! supports that reading. Each [`View`] has a matcher function in a static
//! registry; [`ViewContext::try_as`] dispatches through it.
//!
//! Casting is read-only and depends on the [`TranslateConfig`]: under
//! [`PunningMode::Strict`] an IRI declared as two incompatible kinds of
//! entity casts to neither.

use serde::{Deserialize, Serialize};

use crate::config::{PunningMode, TranslateConfig};
use crate::error::GraphResult;
use crate::graph::list::read_list;
use crate::graph::{Graph, Node};
use crate::vocab::{self, owl, rdf, rdfs};

/// Nesting limit for anonymous class expressions.
const MAX_EXPRESSION_DEPTH: usize = 32;

/// A typed interpretation of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum View {
    /// Named class or anonymous class expression.
    ClassExpression,
    /// Named object property or `owl:inverseOf` expression.
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    /// Named or anonymous individual.
    Individual,
    /// Any IRI node.
    Iri,
    /// `owl:AllDisjointClasses` node with a class expression member list.
    AllDisjointClasses,
    /// `owl:AllDisjointProperties` node whose members are object properties.
    AllDisjointObjectProperties,
    /// `owl:AllDisjointProperties` node whose members are data properties.
    AllDisjointDataProperties,
    /// `owl:AllDifferent` node with an individual member list.
    AllDifferent,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::ClassExpression => "class expression",
            View::ObjectProperty => "object property expression",
            View::DataProperty => "data property",
            View::AnnotationProperty => "annotation property",
            View::Individual => "individual",
            View::Iri => "IRI",
            View::AllDisjointClasses => "owl:AllDisjointClasses collection",
            View::AllDisjointObjectProperties => "owl:AllDisjointProperties collection (object)",
            View::AllDisjointDataProperties => "owl:AllDisjointProperties collection (data)",
            View::AllDifferent => "owl:AllDifferent collection",
        };
        f.write_str(name)
    }
}

/// A node that passed a view cast.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedNode {
    pub node: Node,
    pub view: View,
}

type Matcher = fn(&ViewContext<'_>, &Node) -> GraphResult<bool>;

/// View → matcher registry.
const REGISTRY: &[(View, Matcher)] = &[
    (View::ClassExpression, |cx, n| cx.class_expression_at(n, 0)),
    (View::ObjectProperty, |cx, n| cx.object_property(n)),
    (View::DataProperty, |cx, n| cx.data_property(n)),
    (View::AnnotationProperty, |cx, n| cx.annotation_property(n)),
    (View::Individual, |cx, n| cx.individual(n)),
    (View::Iri, |_, n| Ok(matches!(n, Node::Iri(_)))),
    (View::AllDisjointClasses, |cx, n| {
        cx.collection(n, owl::ALL_DISJOINT_CLASSES, &[owl::MEMBERS], View::ClassExpression, true)
    }),
    (View::AllDisjointObjectProperties, |cx, n| {
        cx.collection(n, owl::ALL_DISJOINT_PROPERTIES, &[owl::MEMBERS], View::ObjectProperty, true)
    }),
    // Empty property collections are read as object property axioms only.
    (View::AllDisjointDataProperties, |cx, n| {
        cx.collection(n, owl::ALL_DISJOINT_PROPERTIES, &[owl::MEMBERS], View::DataProperty, false)
    }),
    (View::AllDifferent, |cx, n| {
        cx.collection(
            n,
            owl::ALL_DIFFERENT,
            &[owl::DISTINCT_MEMBERS, owl::MEMBERS],
            View::Individual,
            true,
        )
    }),
];

/// Graph + config pair against which nodes are cast.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'g> {
    graph: &'g dyn Graph,
    config: &'g TranslateConfig,
}

impl<'g> ViewContext<'g> {
    pub fn new(graph: &'g dyn Graph, config: &'g TranslateConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g dyn Graph {
        self.graph
    }

    pub fn config(&self) -> &'g TranslateConfig {
        self.config
    }

    /// Whether `node` can be viewed as `view`.
    pub fn can_as(&self, node: &Node, view: View) -> GraphResult<bool> {
        match REGISTRY.iter().find(|(v, _)| *v == view) {
            Some((_, matcher)) => matcher(self, node),
            None => Ok(false),
        }
    }

    /// Cast `node` to `view`, if its local structure supports it.
    pub fn try_as(&self, node: &Node, view: View) -> GraphResult<Option<TypedNode>> {
        Ok(self.can_as(node, view)?.then(|| TypedNode {
            node: node.clone(),
            view,
        }))
    }

    fn strict(&self) -> bool {
        self.config.punning == PunningMode::Strict
    }

    /// Builtin, or declared as `declaration` without a conflicting
    /// declaration (strict punning only).
    fn entity(
        &self,
        node: &Node,
        builtins: &[&str],
        declaration: &str,
        conflicts: &[&str],
    ) -> GraphResult<bool> {
        let Node::Iri(iri) = node else {
            return Ok(false);
        };
        if vocab::is_builtin(builtins, iri.as_str()) {
            return Ok(true);
        }
        if !self.graph.has_type(node, declaration)? {
            return Ok(false);
        }
        if self.strict() {
            for conflict in conflicts {
                if self.graph.has_type(node, conflict)? {
                    tracing::debug!(%node, declaration, conflict, "punned entity rejected");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn object_property(&self, node: &Node) -> GraphResult<bool> {
        if node.is_blank() {
            // owl:inverseOf expression over a named object property
            return match self.graph.objects(node, owl::INVERSE_OF)?.as_slice() {
                [named @ Node::Iri(_)] => self.object_property(named),
                _ => Ok(false),
            };
        }
        self.entity(
            node,
            vocab::BUILTIN_OBJECT_PROPERTIES,
            owl::OBJECT_PROPERTY,
            &[owl::DATATYPE_PROPERTY, owl::ANNOTATION_PROPERTY],
        )
    }

    fn data_property(&self, node: &Node) -> GraphResult<bool> {
        self.entity(
            node,
            vocab::BUILTIN_DATA_PROPERTIES,
            owl::DATATYPE_PROPERTY,
            &[owl::OBJECT_PROPERTY, owl::ANNOTATION_PROPERTY],
        )
    }

    fn annotation_property(&self, node: &Node) -> GraphResult<bool> {
        self.entity(
            node,
            vocab::BUILTIN_ANNOTATION_PROPERTIES,
            owl::ANNOTATION_PROPERTY,
            &[owl::OBJECT_PROPERTY, owl::DATATYPE_PROPERTY],
        )
    }

    pub(crate) fn class_expression_at(&self, node: &Node, depth: usize) -> GraphResult<bool> {
        if depth > MAX_EXPRESSION_DEPTH {
            return Ok(false);
        }
        match node {
            Node::Iri(_) => self.entity(node, vocab::BUILTIN_CLASSES, owl::CLASS, &[rdfs::DATATYPE]),
            Node::Literal(_) => Ok(false),
            Node::Blank(_) => {
                if self.graph.has_type(node, owl::RESTRICTION)? {
                    let on_property = self.graph.objects(node, owl::ON_PROPERTY)?;
                    let [property] = on_property.as_slice() else {
                        return Ok(false);
                    };
                    if !self.object_property(property)? {
                        return Ok(false);
                    }
                    let mut fillers = self.graph.objects(node, owl::SOME_VALUES_FROM)?;
                    fillers.extend(self.graph.objects(node, owl::ALL_VALUES_FROM)?);
                    return match fillers.as_slice() {
                        [filler] => self.class_expression_at(filler, depth + 1),
                        _ => Ok(false),
                    };
                }
                if !self.graph.has_type(node, owl::CLASS)? {
                    return Ok(false);
                }
                let mut lists = self.graph.objects(node, owl::UNION_OF)?;
                lists.extend(self.graph.objects(node, owl::INTERSECTION_OF)?);
                let complements = self.graph.objects(node, owl::COMPLEMENT_OF)?;
                match (lists.as_slice(), complements.as_slice()) {
                    ([list], []) => {
                        let Some(list) = read_list(self.graph, list)? else {
                            return Ok(false);
                        };
                        for item in &list.items {
                            if !self.class_expression_at(item, depth + 1)? {
                                return Ok(false);
                            }
                        }
                        Ok(true)
                    }
                    ([], [complement]) => self.class_expression_at(complement, depth + 1),
                    _ => Ok(false),
                }
            }
        }
    }

    fn individual(&self, node: &Node) -> GraphResult<bool> {
        match node {
            Node::Iri(_) => {
                if self.graph.has_type(node, owl::NAMED_INDIVIDUAL)? {
                    return Ok(true);
                }
                for class in self.graph.objects(node, rdf::TYPE)? {
                    if class.as_iri().is_some() && self.class_expression_at(&class, 0)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Node::Blank(_) => {
                for ty in self.graph.objects(node, rdf::TYPE)? {
                    if vocab::STRUCTURAL_TYPES.iter().any(|s| ty.is(s)) {
                        return Ok(false);
                    }
                }
                for predicate in vocab::STRUCTURAL_PREDICATES {
                    if !self.graph.objects(node, predicate)?.is_empty() {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Node::Literal(_) => Ok(false),
        }
    }

    /// Blank node typed `collection_type` with exactly one member list under
    /// one of `member_predicates`, every item castable to `member_view`.
    fn collection(
        &self,
        node: &Node,
        collection_type: &str,
        member_predicates: &[&str],
        member_view: View,
        allow_empty: bool,
    ) -> GraphResult<bool> {
        if !node.is_blank() || !self.graph.has_type(node, collection_type)? {
            return Ok(false);
        }
        let mut heads = Vec::new();
        for predicate in member_predicates {
            heads.extend(self.graph.objects(node, predicate)?);
        }
        let [head] = heads.as_slice() else {
            return Ok(false);
        };
        let Some(list) = read_list(self.graph, head)? else {
            return Ok(false);
        };
        if list.items.is_empty() {
            return Ok(allow_empty);
        }
        for item in &list.items {
            if !self.can_as(item, member_view)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
