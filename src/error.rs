//! Rich diagnostic error types for owl-translate.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so callers know exactly
//! which graph fragment failed to translate and why.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for owl-translate.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum OntError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Graph store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("graph store failure: {message}")]
    #[diagnostic(
        code(owlt::graph::store),
        help(
            "The underlying triple store reported an error. Failures are not retried; \
             triples written before the failure stay in the graph. Check the store's \
             data directory and permissions."
        )
    )]
    Store { message: String },

    #[error("term cannot be represented in the store: {term}")]
    #[diagnostic(
        code(owlt::graph::invalid_term),
        help(
            "IRIs must be absolute, blank node labels alphanumeric, and language \
             tags well-formed (BCP 47)."
        )
    )]
    InvalidTerm { term: String },

    #[error("graph lock poisoned")]
    #[diagnostic(
        code(owlt::graph::lock_poisoned),
        help("A writer panicked while holding the graph lock. Rebuild the graph.")
    )]
    LockPoisoned,
}

// ---------------------------------------------------------------------------
// Translation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum TranslateError {
    #[error("node {node} is not a well-formed {expected}")]
    #[diagnostic(
        code(owlt::translate::malformed_operand),
        help(
            "The statement matched the axiom filter but one of its operands could not \
             be resolved. Check the declarations and the local structure of the node."
        )
    )]
    MalformedOperand { node: String, expected: String },

    #[error("malformed RDF list starting at {head}")]
    #[diagnostic(
        code(owlt::translate::malformed_list),
        help(
            "Every list cell needs exactly one rdf:first and one rdf:rest, and the \
             chain must end in rdf:nil without cycles."
        )
    )]
    MalformedList { head: String },

    #[error("{kind} expects {expected} operand(s), got {actual}")]
    #[diagnostic(
        code(owlt::translate::arity),
        help("Binary axioms take exactly two operands with the roles of their kind.")
    )]
    ArityMismatch {
        kind: String,
        expected: usize,
        actual: usize,
    },

    #[error("statement {statement} is not a {kind} axiom")]
    #[diagnostic(
        code(owlt::translate::wrong_kind),
        help("Run `test_statement` first, or use the translator for the statement's kind.")
    )]
    WrongKind { statement: String, kind: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    #[diagnostic(
        code(owlt::config::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation config: {message}")]
    #[diagnostic(
        code(owlt::config::parse),
        help(
            "The config is TOML with the optional keys `punning` (\"strict\" | \"lax\"), \
             `declare_entities`, `ignore_read_errors` and `use_search_keys`."
        )
    )]
    Parse { message: String },
}

/// Result type for graph store operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Result type for translation operations.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

/// Convenience alias for functions returning owl-translate results.
pub type OntResult<T> = std::result::Result<T, OntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_error_converts_to_ont_error() {
        let err = GraphError::Store {
            message: "disk full".into(),
        };
        let ont: OntError = err.into();
        assert!(matches!(ont, OntError::Graph(GraphError::Store { .. })));
    }

    #[test]
    fn translate_error_wraps_graph_error() {
        let err: TranslateError = GraphError::LockPoisoned.into();
        assert!(matches!(err, TranslateError::Graph(GraphError::LockPoisoned)));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = TranslateError::MalformedOperand {
            node: "<http://ex.org/p>".into(),
            expected: "object property".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("http://ex.org/p"));
        assert!(msg.contains("object property"));
    }
}
