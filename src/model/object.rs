//! Reconstructed values paired with the triples that produced them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::graph::Triple;

/// A value read from a graph, together with its provenance: the triples
/// that justify it. Removing an axiom means removing its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntObject<T> {
    value: T,
    content: BTreeSet<Triple>,
}

impl<T> OntObject<T> {
    pub fn new(value: T, content: impl IntoIterator<Item = Triple>) -> Self {
        Self {
            value,
            content: content.into_iter().collect(),
        }
    }

    /// A value with no supporting triples (named entities).
    pub fn bare(value: T) -> Self {
        Self {
            value,
            content: BTreeSet::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn content(&self) -> &BTreeSet<Triple> {
        &self.content
    }

    pub fn into_parts(self) -> (T, BTreeSet<Triple>) {
        (self.value, self.content)
    }

    /// Transform the value, keeping the content.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OntObject<U> {
        OntObject {
            value: f(self.value),
            content: self.content,
        }
    }

    /// Add supporting triples.
    pub fn with_content(mut self, triples: impl IntoIterator<Item = Triple>) -> Self {
        self.content.extend(triples);
        self
    }

    /// Union the content of `other` into this object. Used when the same
    /// value is backed by several graph fragments.
    pub fn merge(&mut self, other: OntObject<T>) {
        self.content.extend(other.content);
    }
}

impl<T: std::fmt::Display> std::fmt::Display for OntObject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{} triple(s)]", self.value, self.content.len())
    }
}
