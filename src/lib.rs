// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # owl-translate
//!
//! Bidirectional translation between OWL 2 axioms and the RDF triples that
//! encode them.
//!
//! ## Architecture
//!
//! - **Graph** (`graph`): triple model, `Graph` store contract, petgraph and oxigraph stores
//! - **Views** (`view`): casting nodes to typed resources by their local structure
//! - **Model** (`model`): axioms, operands and annotations as plain values
//! - **Factory** (`factory`): resolving nodes into typed operands, with optional caching
//! - **Translate** (`translate`): per-kind translators composed of filter,
//!   reconstruct, write and search-key strategies
//! - **Ontology** (`ontology`): facade over a graph handle and a config
//!
//! ## Library usage
//!
//! ```no_run
//! use owl_translate::config::TranslateConfig;
//! use owl_translate::model::{Axiom, AxiomBody, ClassExpression};
//! use owl_translate::ontology::Ontology;
//!
//! let ontology = Ontology::in_memory(TranslateConfig::default());
//! let disjoint = Axiom::new(AxiomBody::DisjointClasses {
//!     members: ["http://ex.org/Cat", "http://ex.org/Dog", "http://ex.org/Fish"]
//!         .into_iter()
//!         .map(ClassExpression::class)
//!         .collect(),
//! });
//! ontology.add_axiom(&disjoint).unwrap();
//! assert!(ontology.contains_axiom(&disjoint).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod graph;
pub mod model;
pub mod ontology;
pub mod translate;
pub mod view;
pub mod vocab;
