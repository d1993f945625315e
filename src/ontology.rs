//! Ontology facade: top-level API over a graph and the translator table.
//!
//! The `Ontology` owns a graph handle and a translation config and exposes
//! axiom-level operations. Storage is either an in-memory [`MemGraph`] or a
//! persistent [`OxiGraph`] directory.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::config::TranslateConfig;
use crate::error::OntResult;
use crate::factory::{CachingObjectFactory, GraphObjectFactory};
use crate::graph::mem::MemGraph;
use crate::graph::oxi::OxiGraph;
use crate::graph::{Graph, Node, Triple};
use crate::model::{Axiom, AxiomKind, Entity, OntObject};
use crate::translate::{translator, translators};
use crate::vocab::rdf;

/// An ontology stored in an RDF graph.
pub struct Ontology {
    graph: Arc<dyn Graph>,
    config: TranslateConfig,
    persistent: bool,
}

impl Ontology {
    /// Memory-only ontology.
    pub fn in_memory(config: TranslateConfig) -> Self {
        Self {
            graph: Arc::new(MemGraph::new()),
            config,
            persistent: false,
        }
    }

    /// Open or create a persistent ontology in `dir`.
    pub fn open(dir: &Path, config: TranslateConfig) -> OntResult<Self> {
        let graph = OxiGraph::open(dir)?;
        tracing::info!(dir = %dir.display(), punning = %config.punning, "opened ontology");
        Ok(Self {
            graph: Arc::new(graph),
            config,
            persistent: true,
        })
    }

    /// Wrap an existing graph.
    pub fn with_graph(graph: Arc<dyn Graph>, config: TranslateConfig) -> Self {
        Self {
            graph,
            config,
            persistent: false,
        }
    }

    pub fn graph(&self) -> &dyn Graph {
        self.graph.as_ref()
    }

    pub fn config(&self) -> &TranslateConfig {
        &self.config
    }

    /// Assert a declaration triple. Returns `false` if already declared.
    pub fn declare(&self, entity: &Entity) -> OntResult<bool> {
        let triple = Triple::new(
            entity.iri.clone(),
            rdf::TYPE,
            Node::iri(entity.kind.declaration_type()),
        );
        Ok(self.graph.add(&triple)?)
    }

    /// Write `axiom`. Returns `false` if nothing was written.
    pub fn add_axiom(&self, axiom: &Axiom) -> OntResult<bool> {
        Ok(translator(axiom.kind()).write(axiom, self.graph(), &self.config)?)
    }

    /// Erase every stored instance of `axiom`. Returns the number of
    /// triples removed.
    pub fn remove_axiom(&self, axiom: &Axiom) -> OntResult<usize> {
        Ok(translator(axiom.kind()).remove(axiom, self.graph(), &self.config)?)
    }

    pub fn contains_axiom(&self, axiom: &Axiom) -> OntResult<bool> {
        Ok(!translator(axiom.kind())
            .find(axiom, self.graph(), &self.config)?
            .is_empty())
    }

    /// All axioms of `kind`. Content-equal axioms stored more than once are
    /// merged, their provenance unioned.
    pub fn axioms(&self, kind: AxiomKind) -> OntResult<Vec<OntObject<Axiom>>> {
        let factory = CachingObjectFactory::new(GraphObjectFactory::new(self.graph(), &self.config));
        let mut merged: BTreeMap<Axiom, OntObject<Axiom>> = BTreeMap::new();
        for item in translator(kind).list_axioms(self.graph(), &factory) {
            let item = item?;
            match merged.get_mut(item.value()) {
                Some(existing) => existing.merge(item),
                None => {
                    merged.insert(item.value().clone(), item);
                }
            }
        }
        Ok(merged.into_values().collect())
    }

    /// Every axiom of every kind, grouped by kind.
    pub fn all_axioms(&self) -> OntResult<Vec<OntObject<Axiom>>> {
        let mut all = Vec::new();
        for t in translators() {
            all.extend(self.axioms(t.kind())?);
        }
        Ok(all)
    }

    /// Summary of the stored ontology.
    pub fn info(&self) -> OntResult<OntologyInfo> {
        let mut axioms = BTreeMap::new();
        for kind in AxiomKind::ALL {
            let count = self.axioms(kind)?.len();
            if count > 0 {
                axioms.insert(kind, count);
            }
        }
        Ok(OntologyInfo {
            triples: self.graph.len()?,
            axioms,
            punning: self.config.punning.to_string(),
            persistent: self.persistent,
        })
    }
}

impl std::fmt::Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ontology")
            .field("graph", &self.graph)
            .field("config", &self.config)
            .finish()
    }
}

/// Summary information about a stored ontology.
#[derive(Debug, Clone, Serialize)]
pub struct OntologyInfo {
    pub triples: usize,
    pub axioms: BTreeMap<AxiomKind, usize>,
    pub punning: String,
    pub persistent: bool,
}

impl std::fmt::Display for OntologyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "owl-translate ontology info")?;
        writeln!(f, "  triples:      {}", self.triples)?;
        writeln!(f, "  punning:      {}", self.punning)?;
        writeln!(f, "  persistent:   {}", self.persistent)?;
        if self.axioms.is_empty() {
            writeln!(f, "  axioms:       none")?;
        }
        for (kind, count) in &self.axioms {
            writeln!(f, "  {kind}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Iri;
    use crate::model::{AxiomBody, ClassExpression, EntityKind, ObjectPropertyExpression};

    fn ex(local: &str) -> Iri {
        Iri::new(format!("http://ex.org/{local}"))
    }

    #[test]
    fn add_contains_remove() {
        let ont = Ontology::in_memory(TranslateConfig::default());
        let axiom = Axiom::new(AxiomBody::ObjectPropertyDomain {
            property: ObjectPropertyExpression::Property(ex("p")),
            domain: ClassExpression::Class(ex("C")),
        });
        assert!(!ont.contains_axiom(&axiom).unwrap());
        assert!(ont.add_axiom(&axiom).unwrap());
        assert!(ont.contains_axiom(&axiom).unwrap());
        assert_eq!(ont.remove_axiom(&axiom).unwrap(), 1);
        assert!(!ont.contains_axiom(&axiom).unwrap());
    }

    #[test]
    fn duplicates_are_merged_in_listings() {
        let ont = Ontology::in_memory(TranslateConfig::default());
        for local in ["A", "B"] {
            ont.declare(&Entity::new(EntityKind::Class, ex(local))).unwrap();
        }
        let g = ont.graph();
        g.add(&Triple::new(ex("A"), crate::vocab::owl::DISJOINT_WITH, ex("B"))).unwrap();
        g.add(&Triple::new(ex("B"), crate::vocab::owl::DISJOINT_WITH, ex("A"))).unwrap();

        let axioms = ont.axioms(AxiomKind::DisjointClasses).unwrap();
        assert_eq!(axioms.len(), 1);
        assert_eq!(axioms[0].content().len(), 2);
    }

    #[test]
    fn info_counts_axioms_per_kind() {
        let ont = Ontology::in_memory(TranslateConfig::default());
        ont.add_axiom(&Axiom::new(AxiomBody::SubDataPropertyOf {
            sub: ex("d1"),
            sup: ex("d2"),
        }))
        .unwrap();
        let info = ont.info().unwrap();
        assert_eq!(info.triples, 3);
        assert_eq!(info.axioms.get(&AxiomKind::SubDataPropertyOf), Some(&1));
        assert!(!info.persistent);
        assert!(info.to_string().contains("SubDataPropertyOf: 1"));
    }

    #[test]
    fn declare_is_idempotent() {
        let ont = Ontology::in_memory(TranslateConfig::default());
        let entity = Entity::new(EntityKind::NamedIndividual, ex("alice"));
        assert!(ont.declare(&entity).unwrap());
        assert!(!ont.declare(&entity).unwrap());
    }
}
