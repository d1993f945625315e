//! owlt CLI: OWL axiom ↔ RDF triple translation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use owl_translate::config::TranslateConfig;
use owl_translate::graph::Iri;
use owl_translate::model::{Axiom, AxiomKind, Entity, EntityKind};
use owl_translate::ontology::Ontology;

#[derive(Parser)]
#[command(name = "owlt", version, about = "OWL axiom to RDF triple translator")]
struct Cli {
    /// Data directory for persistent storage. Memory-only when omitted.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Translation config (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new owlt data directory.
    Init,

    /// Declare a named entity.
    Declare {
        /// class, object-property, data-property, annotation-property or named-individual.
        #[arg(long)]
        kind: EntityKind,

        #[arg(long)]
        iri: String,
    },

    /// Write axioms from a JSON file (an array of axioms).
    Ingest {
        #[arg(long)]
        file: PathBuf,
    },

    /// Print stored axioms as JSON.
    List {
        /// Only this axiom kind, e.g. `DisjointClasses` or `sub-object-property-of`.
        #[arg(long)]
        kind: Option<AxiomKind>,
    },

    /// Show ontology info and statistics.
    Info,
}

fn open(data_dir: Option<&PathBuf>, config: TranslateConfig) -> Result<Ontology> {
    Ok(match data_dir {
        Some(dir) => Ontology::open(dir, config)?,
        None => Ontology::in_memory(config),
    })
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TranslateConfig::load(path)?,
        None => TranslateConfig::default(),
    };

    match cli.command {
        Commands::Init => {
            let data_dir = cli.data_dir.unwrap_or_else(|| PathBuf::from(".owlt"));
            let ontology = Ontology::open(&data_dir, config)?;
            println!("Initialized owlt at {}", data_dir.display());
            println!("{}", ontology.info()?);
        }

        Commands::Declare { kind, iri } => {
            let ontology = open(cli.data_dir.as_ref(), config)?;
            let entity = Entity::new(kind, Iri::new(iri));
            if ontology.declare(&entity)? {
                println!("{entity}");
            } else {
                println!("{entity} already present");
            }
        }

        Commands::Ingest { file } => {
            let ontology = open(cli.data_dir.as_ref(), config)?;
            let content = std::fs::read_to_string(&file).into_diagnostic()?;
            let axioms: Vec<Axiom> = serde_json::from_str(&content).into_diagnostic()?;

            let mut written = 0;
            for axiom in &axioms {
                if ontology.add_axiom(axiom)? {
                    written += 1;
                }
            }
            println!(
                "Ingested {written} of {} axioms from {}",
                axioms.len(),
                file.display()
            );
            println!("{}", ontology.info()?);
        }

        Commands::List { kind } => {
            let ontology = open(cli.data_dir.as_ref(), config)?;
            let axioms = match kind {
                Some(kind) => ontology.axioms(kind)?,
                None => ontology.all_axioms()?,
            };
            let values: Vec<&Axiom> = axioms.iter().map(|a| a.value()).collect();
            println!("{}", serde_json::to_string_pretty(&values).into_diagnostic()?);
        }

        Commands::Info => {
            let ontology = open(cli.data_dir.as_ref(), config)?;
            println!("{}", ontology.info()?);
        }
    }

    Ok(())
}
