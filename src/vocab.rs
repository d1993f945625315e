//! RDF, RDFS, OWL and XSD vocabulary used by the translators.

/// `rdf:` namespace terms.
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// `rdfs:` namespace terms.
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
}

/// `owl:` namespace terms.
pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    // Declarations
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";

    // Builtin entities
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    pub const TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
    pub const BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";
    pub const TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";
    pub const BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";
    pub const DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    pub const PRIOR_VERSION: &str = "http://www.w3.org/2002/07/owl#priorVersion";
    pub const BACKWARD_COMPATIBLE_WITH: &str =
        "http://www.w3.org/2002/07/owl#backwardCompatibleWith";
    pub const INCOMPATIBLE_WITH: &str = "http://www.w3.org/2002/07/owl#incompatibleWith";

    // Class expressions
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";

    // N-ary axioms
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    pub const ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";
    pub const PROPERTY_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#propertyDisjointWith";
    pub const ALL_DISJOINT_PROPERTIES: &str =
        "http://www.w3.org/2002/07/owl#AllDisjointProperties";
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";
    pub const ALL_DIFFERENT: &str = "http://www.w3.org/2002/07/owl#AllDifferent";
    pub const MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";
    pub const DISTINCT_MEMBERS: &str = "http://www.w3.org/2002/07/owl#distinctMembers";

    // Reification
    pub const AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
    pub const ANNOTATION: &str = "http://www.w3.org/2002/07/owl#Annotation";
    pub const ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
    pub const ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
    pub const ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";
}

/// `xsd:` namespace terms.
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// Classes that are always usable as class expressions without declaration.
pub const BUILTIN_CLASSES: &[&str] = &[owl::THING, owl::NOTHING];

/// Object properties that need no declaration.
pub const BUILTIN_OBJECT_PROPERTIES: &[&str] = &[owl::TOP_OBJECT_PROPERTY, owl::BOTTOM_OBJECT_PROPERTY];

/// Data properties that need no declaration.
pub const BUILTIN_DATA_PROPERTIES: &[&str] = &[owl::TOP_DATA_PROPERTY, owl::BOTTOM_DATA_PROPERTY];

/// Annotation properties that need no declaration.
pub const BUILTIN_ANNOTATION_PROPERTIES: &[&str] = &[
    rdfs::LABEL,
    rdfs::COMMENT,
    rdfs::SEE_ALSO,
    rdfs::IS_DEFINED_BY,
    owl::DEPRECATED,
    owl::VERSION_INFO,
    owl::PRIOR_VERSION,
    owl::BACKWARD_COMPATIBLE_WITH,
    owl::INCOMPATIBLE_WITH,
];

/// `rdf:type` objects marking blank nodes that carry OWL structure rather
/// than denoting an individual.
pub const STRUCTURAL_TYPES: &[&str] = &[
    owl::CLASS,
    owl::RESTRICTION,
    owl::AXIOM,
    owl::ANNOTATION,
    owl::ALL_DISJOINT_CLASSES,
    owl::ALL_DISJOINT_PROPERTIES,
    owl::ALL_DIFFERENT,
    rdfs::DATATYPE,
];

/// Predicates whose presence on a blank subject makes it structural.
pub const STRUCTURAL_PREDICATES: &[&str] = &[
    rdf::FIRST,
    rdf::REST,
    owl::INVERSE_OF,
    owl::UNION_OF,
    owl::INTERSECTION_OF,
    owl::COMPLEMENT_OF,
    owl::ON_PROPERTY,
    owl::ANNOTATED_SOURCE,
    owl::MEMBERS,
    owl::DISTINCT_MEMBERS,
];

/// Whether `iri` is one of `table`.
pub fn is_builtin(table: &[&str], iri: &str) -> bool {
    table.contains(&iri)
}
