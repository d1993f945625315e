//! Axiom ↔ triple translation.
//!
//! A [`Translator`] handles one [`AxiomKind`]. It is composed of four
//! strategies rather than built by inheritance:
//!
//! - [`StatementFilter`]: which triples are candidates and which of them
//!   really encode this kind
//! - [`Reconstruct`]: candidate statement → typed [`Axiom`] with provenance
//! - [`AxiomWrite`]: axiom → triples in a [`WriteBuffer`]
//! - [`SearchKey`]: axiom → triple patterns that locate a stored instance
//!   without a full scan
//!
//! The per-kind table lives behind [`translator`]. Listing is lazy and
//! single-pass; nothing is read from the graph until the iterator is
//! consumed.

pub mod annotations;
pub mod binary;
pub mod domain;
pub mod filter;
pub mod nary;
pub mod search;
pub mod sub_property;
pub mod writer;

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::config::TranslateConfig;
use crate::error::{GraphResult, TranslateError, TranslateResult};
use crate::factory::{GraphObjectFactory, ObjectFactory};
use crate::graph::{Graph, Statement, TripleIter, TriplePattern};
use crate::model::{Axiom, AxiomKind, OntObject};

pub use filter::StatementFilter;
pub use search::{SearchKey, SearchNode, is_good_search_triple};
pub use writer::{AxiomWrite, WriteBuffer};

/// Lazy sequence of candidate statements.
pub type StatementIter<'g> = Box<dyn Iterator<Item = GraphResult<Statement<'g>>> + 'g>;

/// Lazy sequence of reconstructed axioms; each item fails independently.
pub type AxiomIter<'g> = Box<dyn Iterator<Item = TranslateResult<OntObject<Axiom>>> + 'g>;

/// Builds an axiom from a statement that passed the filter.
pub trait Reconstruct: Send + Sync {
    fn reconstruct(
        &self,
        statement: &Statement<'_>,
        factory: &dyn ObjectFactory,
    ) -> TranslateResult<OntObject<Axiom>>;
}

/// Translator for one axiom kind.
pub struct Translator {
    kind: AxiomKind,
    filter: Arc<dyn StatementFilter>,
    reconstruct: Arc<dyn Reconstruct>,
    writer: Arc<dyn AxiomWrite>,
    search: Arc<dyn SearchKey>,
}

static TRANSLATORS: LazyLock<[Translator; 10]> =
    LazyLock::new(|| AxiomKind::ALL.map(Translator::for_kind));

/// The translator for `kind`.
pub fn translator(kind: AxiomKind) -> &'static Translator {
    &TRANSLATORS[kind as usize]
}

/// All translators, in [`AxiomKind::ALL`] order.
pub fn translators() -> &'static [Translator] {
    TRANSLATORS.as_slice()
}

impl Translator {
    pub fn new(
        kind: AxiomKind,
        filter: Arc<dyn StatementFilter>,
        reconstruct: Arc<dyn Reconstruct>,
        writer: Arc<dyn AxiomWrite>,
        search: Arc<dyn SearchKey>,
    ) -> Self {
        Self {
            kind,
            filter,
            reconstruct,
            writer,
            search,
        }
    }

    /// A translator whose four strategies are one value.
    pub fn from_strategy<S>(kind: AxiomKind, strategy: S) -> Self
    where
        S: StatementFilter + Reconstruct + AxiomWrite + SearchKey + 'static,
    {
        let strategy = Arc::new(strategy);
        Self::new(kind, strategy.clone(), strategy.clone(), strategy.clone(), strategy)
    }

    fn for_kind(kind: AxiomKind) -> Self {
        match kind {
            AxiomKind::ObjectPropertyDomain
            | AxiomKind::DataPropertyDomain
            | AxiomKind::AnnotationPropertyDomain => domain::translator(kind),
            AxiomKind::SubObjectPropertyOf
            | AxiomKind::SubDataPropertyOf
            | AxiomKind::SubAnnotationPropertyOf => sub_property::translator(kind),
            AxiomKind::DisjointClasses
            | AxiomKind::DisjointObjectProperties
            | AxiomKind::DisjointDataProperties
            | AxiomKind::DifferentIndividuals => nary::translator(kind),
        }
    }

    pub fn kind(&self) -> AxiomKind {
        self.kind
    }

    /// All statements encoding an axiom of this kind, deduplicated.
    pub fn list_statements<'g>(
        &'g self,
        graph: &'g dyn Graph,
        config: &'g TranslateConfig,
    ) -> StatementIter<'g> {
        self.filtered(graph, config, self.filter.candidates(graph))
    }

    fn filtered<'g>(
        &'g self,
        graph: &'g dyn Graph,
        config: &'g TranslateConfig,
        candidates: TripleIter<'g>,
    ) -> StatementIter<'g> {
        let mut seen = HashSet::new();
        Box::new(candidates.filter_map(move |triple| {
            let triple = match triple {
                Ok(triple) => triple,
                Err(e) => return Some(Err(e)),
            };
            if !seen.insert(triple.clone()) {
                return None;
            }
            let statement = Statement::new(graph, triple);
            match self.filter.test(&statement, config) {
                Ok(true) => Some(Ok(statement)),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            }
        }))
    }

    /// Whether `statement` encodes an axiom of this kind.
    pub fn test_statement(
        &self,
        statement: &Statement<'_>,
        config: &TranslateConfig,
    ) -> GraphResult<bool> {
        let accepted = self.filter.test(statement, config)?;
        tracing::debug!(kind = %self.kind, %statement, accepted, "tested statement");
        Ok(accepted)
    }

    /// Reconstruct the axiom encoded by `statement`.
    pub fn from_statement(
        &self,
        statement: &Statement<'_>,
        factory: &dyn ObjectFactory,
    ) -> TranslateResult<OntObject<Axiom>> {
        if !self.filter.test(statement, factory.config())? {
            return Err(TranslateError::WrongKind {
                statement: statement.to_string(),
                kind: self.kind.to_string(),
            });
        }
        self.reconstruct.reconstruct(statement, factory)
    }

    /// Reconstruct every stored axiom of this kind.
    ///
    /// A statement whose operands do not resolve yields an `Err` item
    /// without ending the listing, or is dropped with a warning when
    /// `ignore_read_errors` is set.
    pub fn list_axioms<'g>(
        &'g self,
        graph: &'g dyn Graph,
        factory: &'g dyn ObjectFactory,
    ) -> AxiomIter<'g> {
        let config = factory.config();
        Box::new(
            self.list_statements(graph, config)
                .filter_map(move |statement| {
                    let statement = match statement {
                        Ok(statement) => statement,
                        Err(e) => return Some(Err(e.into())),
                    };
                    match self.reconstruct.reconstruct(&statement, factory) {
                        Ok(axiom) => Some(Ok(axiom)),
                        Err(e) if config.ignore_read_errors && !matches!(e, TranslateError::Graph(_)) => {
                            tracing::warn!(kind = %self.kind, %statement, error = %e, "dropping unreadable axiom");
                            None
                        }
                        Err(e) => Some(Err(e)),
                    }
                }),
        )
    }

    /// Stored instances content-equal to `axiom`.
    ///
    /// Uses the search triples when every one of them is good, otherwise
    /// falls back to the full listing.
    pub fn find(
        &self,
        axiom: &Axiom,
        graph: &dyn Graph,
        config: &TranslateConfig,
    ) -> TranslateResult<Vec<OntObject<Axiom>>> {
        let patterns = if config.use_search_keys {
            self.search.search_triples(axiom, graph)?
        } else {
            Vec::new()
        };

        let statements: Vec<Statement<'_>> =
            if !patterns.is_empty() && patterns.iter().all(is_good_search_triple) {
                let candidates = patterns
                    .into_iter()
                    .flat_map(move |pattern: TriplePattern| graph.find(&pattern));
                self.filtered(graph, config, Box::new(candidates))
                    .collect::<GraphResult<_>>()?
            } else {
                tracing::debug!(kind = %self.kind, "no usable search key, scanning");
                self.list_statements(graph, config)
                    .collect::<GraphResult<_>>()?
            };

        let factory = GraphObjectFactory::new(graph, config);
        let mut found = Vec::new();
        for statement in statements {
            match self.reconstruct.reconstruct(&statement, &factory) {
                Ok(candidate) if candidate.value() == axiom => found.push(candidate),
                Ok(_) => {}
                Err(TranslateError::Graph(e)) => return Err(e.into()),
                Err(e) => tracing::debug!(%statement, error = %e, "skipping unreadable candidate"),
            }
        }
        Ok(found)
    }

    /// Persist `axiom`.
    ///
    /// Returns `false` without touching the graph when there is nothing to
    /// write or a content-equal axiom is already stored. Triples are
    /// buffered and deduplicated, then added in one pass; a store failure
    /// mid-way leaves the triples added so far in place.
    pub fn write(
        &self,
        axiom: &Axiom,
        graph: &dyn Graph,
        config: &TranslateConfig,
    ) -> TranslateResult<bool> {
        if axiom.kind() != self.kind {
            return Err(TranslateError::WrongKind {
                statement: axiom.to_string(),
                kind: self.kind.to_string(),
            });
        }
        if axiom.is_empty() {
            tracing::warn!(kind = %self.kind, "axiom has no operands and no annotations, nothing written");
            return Ok(false);
        }
        if !self.find(axiom, graph, config)?.is_empty() {
            tracing::debug!(%axiom, "axiom already present");
            return Ok(false);
        }

        let mut out = WriteBuffer::new(graph, config);
        out.reserve_labels(axiom);
        self.writer.write(axiom, &mut out)?;
        let added = out.flush()?;
        tracing::debug!(%axiom, added, "wrote axiom");
        Ok(true)
    }

    /// Erase every stored instance of `axiom`. Returns the number of
    /// triples removed. Entity declarations are kept.
    pub fn remove(
        &self,
        axiom: &Axiom,
        graph: &dyn Graph,
        config: &TranslateConfig,
    ) -> TranslateResult<usize> {
        let mut removed = 0;
        for instance in self.find(axiom, graph, config)? {
            for triple in instance.content() {
                if graph.remove(triple)? {
                    removed += 1;
                }
            }
        }
        tracing::debug!(%axiom, removed, "removed axiom");
        Ok(removed)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("kind", &self.kind).finish()
    }
}
