//! Axiom object model.
//!
//! Axioms are plain values: two axioms are equal when they have the same
//! kind, the same operands and the same annotations. N-ary operands and
//! annotations are kept in `BTreeSet`s, so duplicates collapse and order
//! never matters. How an axiom is laid out in a graph is the business of
//! [`crate::translate`], not of this module.

pub mod object;

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TranslateError, TranslateResult};
use crate::graph::{BlankId, Iri, Literal, Node};
use crate::view::View;
use crate::vocab::owl;

pub use object::OntObject;

// ---------------------------------------------------------------------------
// Operands
// ---------------------------------------------------------------------------

/// Named class or anonymous class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassExpression {
    Class(Iri),
    UnionOf(BTreeSet<ClassExpression>),
    IntersectionOf(BTreeSet<ClassExpression>),
    ComplementOf(Box<ClassExpression>),
    SomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    AllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
}

impl ClassExpression {
    pub fn class(iri: impl Into<Iri>) -> Self {
        Self::Class(iri.into())
    }

    pub fn as_named(&self) -> Option<&Iri> {
        match self {
            Self::Class(iri) => Some(iri),
            _ => None,
        }
    }
}

/// Named object property or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectPropertyExpression {
    Property(Iri),
    InverseOf(Iri),
}

impl ObjectPropertyExpression {
    pub fn property(iri: impl Into<Iri>) -> Self {
        Self::Property(iri.into())
    }

    pub fn as_named(&self) -> Option<&Iri> {
        match self {
            Self::Property(iri) => Some(iri),
            Self::InverseOf(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Individual {
    Named(Iri),
    /// Anonymous individual, identified by its blank node label.
    Anonymous(BlankId),
}

impl Individual {
    pub fn named(iri: impl Into<Iri>) -> Self {
        Self::Named(iri.into())
    }

    pub fn anonymous(label: impl Into<String>) -> Self {
        Self::Anonymous(BlankId::new(label))
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Named(iri) => Node::Iri(iri.clone()),
            Self::Anonymous(id) => Node::Blank(id.clone()),
        }
    }
}

/// One operand of an axiom, tagged with the role it plays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operand {
    Class(ClassExpression),
    ObjectProperty(ObjectPropertyExpression),
    DataProperty(Iri),
    AnnotationProperty(Iri),
    Individual(Individual),
    Iri(Iri),
}

impl Operand {
    /// The view a node must cast to in order to hold this operand.
    pub fn view(&self) -> View {
        match self {
            Self::Class(_) => View::ClassExpression,
            Self::ObjectProperty(_) => View::ObjectProperty,
            Self::DataProperty(_) => View::DataProperty,
            Self::AnnotationProperty(_) => View::AnnotationProperty,
            Self::Individual(_) => View::Individual,
            Self::Iri(_) => View::Iri,
        }
    }

    /// The IRI of a named operand.
    pub fn as_named(&self) -> Option<&Iri> {
        match self {
            Self::Class(c) => c.as_named(),
            Self::ObjectProperty(p) => p.as_named(),
            Self::DataProperty(iri) | Self::AnnotationProperty(iri) | Self::Iri(iri) => Some(iri),
            Self::Individual(Individual::Named(iri)) => Some(iri),
            Self::Individual(Individual::Anonymous(_)) => None,
        }
    }

    fn mismatch(&self, expected: View) -> TranslateError {
        TranslateError::MalformedOperand {
            node: self.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn into_class(self) -> TranslateResult<ClassExpression> {
        match self {
            Self::Class(c) => Ok(c),
            other => Err(other.mismatch(View::ClassExpression)),
        }
    }

    pub fn into_object_property(self) -> TranslateResult<ObjectPropertyExpression> {
        match self {
            Self::ObjectProperty(p) => Ok(p),
            other => Err(other.mismatch(View::ObjectProperty)),
        }
    }

    pub fn into_data_property(self) -> TranslateResult<Iri> {
        match self {
            Self::DataProperty(p) => Ok(p),
            other => Err(other.mismatch(View::DataProperty)),
        }
    }

    pub fn into_annotation_property(self) -> TranslateResult<Iri> {
        match self {
            Self::AnnotationProperty(p) => Ok(p),
            other => Err(other.mismatch(View::AnnotationProperty)),
        }
    }

    pub fn into_individual(self) -> TranslateResult<Individual> {
        match self {
            Self::Individual(i) => Ok(i),
            other => Err(other.mismatch(View::Individual)),
        }
    }

    pub fn into_iri(self) -> TranslateResult<Iri> {
        match self {
            Self::Iri(iri) => Ok(iri),
            other => Err(other.mismatch(View::Iri)),
        }
    }
}

// ---------------------------------------------------------------------------
// Annotations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(BlankId),
}

impl AnnotationValue {
    pub fn to_node(&self) -> Node {
        match self {
            Self::Iri(iri) => Node::Iri(iri.clone()),
            Self::Literal(lit) => Node::Literal(lit.clone()),
            Self::Anonymous(id) => Node::Blank(id.clone()),
        }
    }
}

/// An annotation, possibly annotated itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    pub property: Iri,
    pub value: AnnotationValue,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub annotations: BTreeSet<Annotation>,
}

impl Annotation {
    pub fn new(property: impl Into<Iri>, value: AnnotationValue) -> Self {
        Self {
            property: property.into(),
            value,
            annotations: BTreeSet::new(),
        }
    }

    /// Shorthand for a plain string annotation.
    pub fn literal(property: impl Into<Iri>, text: impl Into<String>) -> Self {
        Self::new(property, AnnotationValue::Literal(Literal::simple(text)))
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }
}

// ---------------------------------------------------------------------------
// Axioms
// ---------------------------------------------------------------------------

/// The axiom kinds this crate translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxiomKind {
    ObjectPropertyDomain,
    DataPropertyDomain,
    AnnotationPropertyDomain,
    SubObjectPropertyOf,
    SubDataPropertyOf,
    SubAnnotationPropertyOf,
    DisjointClasses,
    DisjointObjectProperties,
    DisjointDataProperties,
    DifferentIndividuals,
}

impl AxiomKind {
    /// Every kind, in declaration order.
    pub const ALL: [AxiomKind; 10] = [
        Self::ObjectPropertyDomain,
        Self::DataPropertyDomain,
        Self::AnnotationPropertyDomain,
        Self::SubObjectPropertyOf,
        Self::SubDataPropertyOf,
        Self::SubAnnotationPropertyOf,
        Self::DisjointClasses,
        Self::DisjointObjectProperties,
        Self::DisjointDataProperties,
        Self::DifferentIndividuals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ObjectPropertyDomain => "ObjectPropertyDomain",
            Self::DataPropertyDomain => "DataPropertyDomain",
            Self::AnnotationPropertyDomain => "AnnotationPropertyDomain",
            Self::SubObjectPropertyOf => "SubObjectPropertyOf",
            Self::SubDataPropertyOf => "SubDataPropertyOf",
            Self::SubAnnotationPropertyOf => "SubAnnotationPropertyOf",
            Self::DisjointClasses => "DisjointClasses",
            Self::DisjointObjectProperties => "DisjointObjectProperties",
            Self::DisjointDataProperties => "DisjointDataProperties",
            Self::DifferentIndividuals => "DifferentIndividuals",
        }
    }

    /// Whether the kind takes a set of operands rather than two roles.
    pub fn is_nary(self) -> bool {
        matches!(
            self,
            Self::DisjointClasses
                | Self::DisjointObjectProperties
                | Self::DisjointDataProperties
                | Self::DifferentIndividuals
        )
    }

    /// Views of the operand roles: `[subject, object]` for binary kinds,
    /// `[member, member]` for n-ary ones.
    pub fn operand_views(self) -> [View; 2] {
        match self {
            Self::ObjectPropertyDomain => [View::ObjectProperty, View::ClassExpression],
            Self::DataPropertyDomain => [View::DataProperty, View::ClassExpression],
            Self::AnnotationPropertyDomain => [View::AnnotationProperty, View::Iri],
            Self::SubObjectPropertyOf | Self::DisjointObjectProperties => {
                [View::ObjectProperty, View::ObjectProperty]
            }
            Self::SubDataPropertyOf | Self::DisjointDataProperties => {
                [View::DataProperty, View::DataProperty]
            }
            Self::SubAnnotationPropertyOf => [View::AnnotationProperty, View::AnnotationProperty],
            Self::DisjointClasses => [View::ClassExpression, View::ClassExpression],
            Self::DifferentIndividuals => [View::Individual, View::Individual],
        }
    }
}

impl std::fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxiomKind {
    type Err = String;

    /// Accepts the kind name in any case, with or without `-`/`_`
    /// separators (`disjoint-classes`, `DisjointClasses`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| format!("unknown axiom kind: {s}"))
    }
}

/// The logical content of an axiom, without annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AxiomBody {
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    DataPropertyDomain {
        property: Iri,
        domain: ClassExpression,
    },
    AnnotationPropertyDomain {
        property: Iri,
        domain: Iri,
    },
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    SubDataPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    SubAnnotationPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    DisjointClasses {
        members: BTreeSet<ClassExpression>,
    },
    DisjointObjectProperties {
        members: BTreeSet<ObjectPropertyExpression>,
    },
    DisjointDataProperties {
        members: BTreeSet<Iri>,
    },
    DifferentIndividuals {
        members: BTreeSet<Individual>,
    },
}

impl AxiomBody {
    pub fn kind(&self) -> AxiomKind {
        match self {
            Self::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            Self::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            Self::AnnotationPropertyDomain { .. } => AxiomKind::AnnotationPropertyDomain,
            Self::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Self::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            Self::SubAnnotationPropertyOf { .. } => AxiomKind::SubAnnotationPropertyOf,
            Self::DisjointClasses { .. } => AxiomKind::DisjointClasses,
            Self::DisjointObjectProperties { .. } => AxiomKind::DisjointObjectProperties,
            Self::DisjointDataProperties { .. } => AxiomKind::DisjointDataProperties,
            Self::DifferentIndividuals { .. } => AxiomKind::DifferentIndividuals,
        }
    }

    /// Operands in role order (`[subject, object]`) for binary kinds, in set
    /// order for n-ary kinds.
    pub fn operands(&self) -> Vec<Operand> {
        match self {
            Self::ObjectPropertyDomain { property, domain } => vec![
                Operand::ObjectProperty(property.clone()),
                Operand::Class(domain.clone()),
            ],
            Self::DataPropertyDomain { property, domain } => vec![
                Operand::DataProperty(property.clone()),
                Operand::Class(domain.clone()),
            ],
            Self::AnnotationPropertyDomain { property, domain } => vec![
                Operand::AnnotationProperty(property.clone()),
                Operand::Iri(domain.clone()),
            ],
            Self::SubObjectPropertyOf { sub, sup } => vec![
                Operand::ObjectProperty(sub.clone()),
                Operand::ObjectProperty(sup.clone()),
            ],
            Self::SubDataPropertyOf { sub, sup } => vec![
                Operand::DataProperty(sub.clone()),
                Operand::DataProperty(sup.clone()),
            ],
            Self::SubAnnotationPropertyOf { sub, sup } => vec![
                Operand::AnnotationProperty(sub.clone()),
                Operand::AnnotationProperty(sup.clone()),
            ],
            Self::DisjointClasses { members } => members.iter().cloned().map(Operand::Class).collect(),
            Self::DisjointObjectProperties { members } => {
                members.iter().cloned().map(Operand::ObjectProperty).collect()
            }
            Self::DisjointDataProperties { members } => {
                members.iter().cloned().map(Operand::DataProperty).collect()
            }
            Self::DifferentIndividuals { members } => {
                members.iter().cloned().map(Operand::Individual).collect()
            }
        }
    }

    /// Build a body of `kind` from its operands.
    ///
    /// Binary kinds take exactly `[subject, object]`; n-ary kinds take any
    /// number of members, duplicates collapsing.
    pub fn from_operands(kind: AxiomKind, operands: Vec<Operand>) -> TranslateResult<Self> {
        if kind.is_nary() {
            return Ok(match kind {
                AxiomKind::DisjointClasses => Self::DisjointClasses {
                    members: collect(operands, Operand::into_class)?,
                },
                AxiomKind::DisjointObjectProperties => Self::DisjointObjectProperties {
                    members: collect(operands, Operand::into_object_property)?,
                },
                AxiomKind::DisjointDataProperties => Self::DisjointDataProperties {
                    members: collect(operands, Operand::into_data_property)?,
                },
                _ => Self::DifferentIndividuals {
                    members: collect(operands, Operand::into_individual)?,
                },
            });
        }

        let actual = operands.len();
        let Ok([subject, object]) = <[Operand; 2]>::try_from(operands) else {
            return Err(TranslateError::ArityMismatch {
                kind: kind.to_string(),
                expected: 2,
                actual,
            });
        };
        Ok(match kind {
            AxiomKind::ObjectPropertyDomain => Self::ObjectPropertyDomain {
                property: subject.into_object_property()?,
                domain: object.into_class()?,
            },
            AxiomKind::DataPropertyDomain => Self::DataPropertyDomain {
                property: subject.into_data_property()?,
                domain: object.into_class()?,
            },
            AxiomKind::AnnotationPropertyDomain => Self::AnnotationPropertyDomain {
                property: subject.into_annotation_property()?,
                domain: object.into_iri()?,
            },
            AxiomKind::SubObjectPropertyOf => Self::SubObjectPropertyOf {
                sub: subject.into_object_property()?,
                sup: object.into_object_property()?,
            },
            AxiomKind::SubDataPropertyOf => Self::SubDataPropertyOf {
                sub: subject.into_data_property()?,
                sup: object.into_data_property()?,
            },
            _ => Self::SubAnnotationPropertyOf {
                sub: subject.into_annotation_property()?,
                sup: object.into_annotation_property()?,
            },
        })
    }
}

fn collect<T: Ord>(
    operands: Vec<Operand>,
    convert: fn(Operand) -> TranslateResult<T>,
) -> TranslateResult<BTreeSet<T>> {
    operands.into_iter().map(convert).collect()
}

/// An axiom: logical content plus its annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axiom {
    pub body: AxiomBody,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub annotations: BTreeSet<Annotation>,
}

impl Axiom {
    pub fn new(body: AxiomBody) -> Self {
        Self {
            body,
            annotations: BTreeSet::new(),
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    pub fn kind(&self) -> AxiomKind {
        self.body.kind()
    }

    pub fn operands(&self) -> Vec<Operand> {
        self.body.operands()
    }

    /// Nothing to persist: no operands and no annotations.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty() && self.body.operands().is_empty()
    }
}

impl From<AxiomBody> for Axiom {
    fn from(body: AxiomBody) -> Self {
        Self::new(body)
    }
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityKind {
    /// The `rdf:type` object of a declaration of this kind.
    pub fn declaration_type(self) -> &'static str {
        match self {
            Self::Class => owl::CLASS,
            Self::ObjectProperty => owl::OBJECT_PROPERTY,
            Self::DataProperty => owl::DATATYPE_PROPERTY,
            Self::AnnotationProperty => owl::ANNOTATION_PROPERTY,
            Self::NamedIndividual => owl::NAMED_INDIVIDUAL,
        }
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "class" => Ok(Self::Class),
            "objectproperty" => Ok(Self::ObjectProperty),
            "dataproperty" | "datatypeproperty" => Ok(Self::DataProperty),
            "annotationproperty" => Ok(Self::AnnotationProperty),
            "namedindividual" | "individual" => Ok(Self::NamedIndividual),
            _ => Err(format!("unknown entity kind: {s}")),
        }
    }
}

/// A named entity, as introduced by a declaration triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub iri: Iri,
}

impl Entity {
    pub fn new(kind: EntityKind, iri: impl Into<Iri>) -> Self {
        Self {
            kind,
            iri: iri.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Display (functional-style syntax)
// ---------------------------------------------------------------------------

fn write_set<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> std::fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl std::fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class(iri) => write!(f, "{iri}"),
            Self::UnionOf(items) => {
                f.write_str("ObjectUnionOf(")?;
                write_set(f, items)?;
                f.write_str(")")
            }
            Self::IntersectionOf(items) => {
                f.write_str("ObjectIntersectionOf(")?;
                write_set(f, items)?;
                f.write_str(")")
            }
            Self::ComplementOf(inner) => write!(f, "ObjectComplementOf({inner})"),
            Self::SomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::AllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
        }
    }
}

impl std::fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Property(iri) => write!(f, "{iri}"),
            Self::InverseOf(iri) => write!(f, "ObjectInverseOf({iri})"),
        }
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(iri) => write!(f, "{iri}"),
            Self::Anonymous(id) => write!(f, "{id}"),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class(c) => write!(f, "{c}"),
            Self::ObjectProperty(p) => write!(f, "{p}"),
            Self::DataProperty(iri) | Self::AnnotationProperty(iri) | Self::Iri(iri) => {
                write!(f, "{iri}")
            }
            Self::Individual(i) => write!(f, "{i}"),
        }
    }
}

impl std::fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "{iri}"),
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::Anonymous(id) => write!(f, "{id}"),
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Annotation(")?;
        for nested in &self.annotations {
            write!(f, "{nested} ")?;
        }
        write!(f, "{} {})", self.property, self.value)
    }
}

impl std::fmt::Display for Axiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.kind())?;
        for annotation in &self.annotations {
            write!(f, "{annotation} ")?;
        }
        write_set(f, self.operands())?;
        f.write_str(")")
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Declaration({:?}({}))", self.kind, self.iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(local: &str) -> ClassExpression {
        ClassExpression::class(format!("http://ex.org/{local}"))
    }

    #[test]
    fn nary_operands_are_a_set() {
        let a = AxiomBody::from_operands(
            AxiomKind::DisjointClasses,
            vec![
                Operand::Class(class("B")),
                Operand::Class(class("A")),
                Operand::Class(class("B")),
            ],
        )
        .unwrap();
        let b = AxiomBody::DisjointClasses {
            members: [class("A"), class("B")].into_iter().collect(),
        };
        assert_eq!(a, b);
        assert_eq!(a.operands().len(), 2);
    }

    #[test]
    fn binary_operands_roundtrip_through_roles() {
        let body = AxiomBody::SubDataPropertyOf {
            sub: Iri::new("http://ex.org/d1"),
            sup: Iri::new("http://ex.org/d2"),
        };
        let rebuilt = AxiomBody::from_operands(body.kind(), body.operands()).unwrap();
        assert_eq!(rebuilt, body);
    }

    #[test]
    fn binary_arity_is_checked() {
        let err = AxiomBody::from_operands(
            AxiomKind::DataPropertyDomain,
            vec![Operand::DataProperty(Iri::new("http://ex.org/d"))],
        )
        .unwrap_err();
        assert!(matches!(err, TranslateError::ArityMismatch { actual: 1, .. }));
    }

    #[test]
    fn operand_roles_are_checked() {
        let err = AxiomBody::from_operands(
            AxiomKind::DisjointDataProperties,
            vec![Operand::Class(class("A"))],
        )
        .unwrap_err();
        assert!(matches!(err, TranslateError::MalformedOperand { .. }));
    }

    #[test]
    fn annotations_are_part_of_equality() {
        let body = AxiomBody::DisjointClasses {
            members: [class("A"), class("B")].into_iter().collect(),
        };
        let plain = Axiom::new(body.clone());
        let noted = Axiom::new(body).annotated(Annotation::literal(
            "http://www.w3.org/2000/01/rdf-schema#comment",
            "disjoint",
        ));
        assert_ne!(plain, noted);
        assert!(!plain.is_empty());
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("disjoint-classes".parse::<AxiomKind>().unwrap(), AxiomKind::DisjointClasses);
        assert_eq!(
            "SubObjectPropertyOf".parse::<AxiomKind>().unwrap(),
            AxiomKind::SubObjectPropertyOf
        );
        assert!("Nonsense".parse::<AxiomKind>().is_err());
        assert_eq!("object_property".parse::<EntityKind>().unwrap(), EntityKind::ObjectProperty);
    }

    #[test]
    fn json_shape() {
        let axiom = Axiom::new(AxiomBody::DataPropertyDomain {
            property: Iri::new("http://ex.org/age"),
            domain: class("Person"),
        });
        let json = serde_json::to_string(&axiom).unwrap();
        assert!(json.contains("\"kind\":\"DataPropertyDomain\""));
        let back: Axiom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, axiom);
    }

    #[test]
    fn display_is_functional_syntax() {
        let axiom = Axiom::new(AxiomBody::SubObjectPropertyOf {
            sub: ObjectPropertyExpression::InverseOf(Iri::new("http://ex.org/p")),
            sup: ObjectPropertyExpression::property("http://ex.org/q"),
        });
        assert_eq!(
            axiom.to_string(),
            "SubObjectPropertyOf(ObjectInverseOf(<http://ex.org/p>) <http://ex.org/q>)"
        );
    }
}
