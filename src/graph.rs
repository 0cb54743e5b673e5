//! Statement graph access
//!
//! The resolver only ever asks one question of a graph: which objects does
//! a subject have for a predicate. [`Graph`] captures that; [`MemoryGraph`]
//! is the in-memory store the JSON-LD parser fills.

use std::collections::HashMap;

use crate::error::CreditError;

/// Prefix used for blank node identifiers
pub const BLANK_PREFIX: &str = "_:";

/// An RDF term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Named resource
    Iri(String),
    /// Blank node, stored with its `_:` prefix
    Blank(String),
    /// Literal text, optionally language-tagged
    Literal {
        value: String,
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: None,
        }
    }

    /// Classify a node identifier: `_:x` is blank, anything else is an IRI
    pub fn node(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.starts_with(BLANK_PREFIX) {
            Term::Blank(id)
        } else {
            Term::Iri(id)
        }
    }

    /// Identifier of a resource term (IRI or blank node)
    pub fn as_node(&self) -> Option<&str> {
        match self {
            Term::Iri(id) | Term::Blank(id) => Some(id),
            Term::Literal { .. } => None,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Term::Literal { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// A subject-predicate-object statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

/// Read-only query access to a statement graph
pub trait Graph {
    /// Objects of all statements with the given subject and predicate, in
    /// the order the graph holds them. No matches is an empty vector; an
    /// error means the graph itself could not be read.
    fn objects(&self, subject: &str, predicate: &str) -> Result<Vec<Term>, CreditError>;
}

/// Insertion-ordered in-memory triple store
#[derive(Debug, Default, Clone)]
pub struct MemoryGraph {
    triples: Vec<Triple>,
    index: HashMap<(String, String), Vec<usize>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement. Exact duplicates are ignored.
    pub fn insert(&mut self, subject: impl Into<String>, predicate: impl Into<String>, object: Term) {
        let key = (subject.into(), predicate.into());
        let slots = self.index.entry(key.clone()).or_default();
        if slots.iter().any(|&i| self.triples[i].object == object) {
            return;
        }
        slots.push(self.triples.len());
        self.triples.push(Triple {
            subject: key.0,
            predicate: key.1,
            object,
        });
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Statements matching subject and predicate
    pub fn statements<'a>(
        &'a self,
        subject: &str,
        predicate: &str,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        let slots = self
            .index
            .get(&(subject.to_string(), predicate.to_string()))
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        slots.iter().map(move |&i| &self.triples[i])
    }

    /// Subject of the first statement, used as the default document subject
    pub fn first_subject(&self) -> Option<&str> {
        self.triples.first().map(|t| t.subject.as_str())
    }
}

impl Graph for MemoryGraph {
    fn objects(&self, subject: &str, predicate: &str) -> Result<Vec<Term>, CreditError> {
        Ok(self
            .statements(subject, predicate)
            .map(|t| t.object.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_node_classification() {
        assert_eq!(Term::node("_:b0"), Term::Blank("_:b0".to_string()));
        assert_eq!(Term::node("urn:src"), Term::Iri("urn:src".to_string()));
        assert_eq!(Term::literal("x").as_node(), None);
        assert_eq!(Term::node("_:b0").as_node(), Some("_:b0"));
    }

    #[test]
    fn test_objects_in_insertion_order() {
        let mut graph = MemoryGraph::new();
        graph.insert("urn:src", "urn:p", Term::literal("one"));
        graph.insert("urn:other", "urn:p", Term::literal("elsewhere"));
        graph.insert("urn:src", "urn:p", Term::iri("http://two/"));

        let objects = graph.objects("urn:src", "urn:p").unwrap();
        assert_eq!(objects, vec![Term::literal("one"), Term::iri("http://two/")]);
        assert!(graph.objects("urn:src", "urn:q").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_statements_ignored() {
        let mut graph = MemoryGraph::new();
        graph.insert("urn:src", "urn:p", Term::literal("one"));
        graph.insert("urn:src", "urn:p", Term::literal("one"));
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.first_subject(), Some("urn:src"));
    }
}
