//! Translation settings.
//!
//! [`TranslateConfig`] is a read-only settings object handed to every
//! translator call. It is usually built with `Default` or parsed from a
//! small TOML file:
//!
//! ```toml
//! punning = "lax"
//! declare_entities = true
//! ignore_read_errors = false
//! use_search_keys = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How conflicting entity declarations on one IRI are treated when casting
/// a node to a property or class view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunningMode {
    /// An IRI declared as two kinds of property (or class and datatype)
    /// casts to neither.
    #[default]
    Strict,
    /// Any declaration is enough; conflicting ones are ignored.
    Lax,
}

impl std::fmt::Display for PunningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lax => write!(f, "lax"),
        }
    }
}

/// Settings queried by translators. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Punning policy for view casting.
    pub punning: PunningMode,
    /// Emit `rdf:type` declarations for named operands and annotation
    /// properties on write.
    pub declare_entities: bool,
    /// Drop axioms whose operands fail to resolve from listings instead of
    /// yielding the error.
    pub ignore_read_errors: bool,
    /// Use search triples to locate existing axioms before falling back to
    /// a predicate scan.
    pub use_search_keys: bool,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            punning: PunningMode::Strict,
            declare_entities: true,
            ignore_read_errors: false,
            use_search_keys: true,
        }
    }
}

impl TranslateConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builder-style punning override.
    pub fn with_punning(mut self, punning: PunningMode) -> Self {
        self.punning = punning;
        self
    }
}
