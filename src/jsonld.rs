//! JSON-LD document parsing
//!
//! Flattens a JSON-LD document into a [`MemoryGraph`]. This is the subset
//! credit metadata needs: prefix and term definitions in `@context`,
//! `@vocab`, `@graph`, nested node objects, `@id` references and value
//! objects. Keys that cannot be expanded to an IRI are dropped, as JSON-LD
//! expansion does.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::error::CreditError;
use crate::graph::{MemoryGraph, Term, BLANK_PREFIX};
use crate::vocab::{default_prefixes, RDF_TYPE};

/// A term definition from `@context`
#[derive(Debug, Clone, PartialEq, Eq)]
struct TermDef {
    iri: String,
    /// `"@type": "@id"`: string values are references, not literals
    is_reference: bool,
}

/// Active context used to expand keys and references
#[derive(Debug, Clone, Default)]
pub struct Context {
    terms: HashMap<String, TermDef>,
    vocab: Option<String>,
}

impl Context {
    /// Context holding the built-in vocabulary prefixes
    pub fn with_defaults() -> Self {
        let mut ctx = Self::default();
        for (prefix, ns) in default_prefixes() {
            ctx.terms.insert(
                prefix.to_string(),
                TermDef {
                    iri: ns.to_string(),
                    is_reference: false,
                },
            );
        }
        ctx
    }

    /// Layer a `@context` value over this context
    pub fn extend(&mut self, value: &Value) -> Result<(), CreditError> {
        match value {
            Value::Object(obj) => {
                for (key, def) in obj {
                    if key == "@vocab" {
                        self.vocab = def.as_str().map(String::from);
                        continue;
                    }
                    if key.starts_with('@') {
                        continue;
                    }
                    if let Some(term) = self.parse_term_def(def) {
                        self.terms.insert(key.clone(), term);
                    }
                }
                Ok(())
            }
            Value::Array(arr) => {
                for item in arr {
                    self.extend(item)?;
                }
                Ok(())
            }
            // Remote contexts are not fetched
            Value::String(_) | Value::Null => Ok(()),
            other => Err(CreditError::InvalidDocument(format!(
                "@context must be an object, array or string, got {}",
                other
            ))),
        }
    }

    fn parse_term_def(&self, def: &Value) -> Option<TermDef> {
        match def {
            Value::String(iri) => Some(TermDef {
                iri: self.expand_iri(iri),
                is_reference: false,
            }),
            Value::Object(obj) => {
                let iri = obj.get("@id").and_then(|v| v.as_str())?;
                let is_reference = obj.get("@type").and_then(|v| v.as_str()) == Some("@id");
                Some(TermDef {
                    iri: self.expand_iri(iri),
                    is_reference,
                })
            }
            _ => None,
        }
    }

    /// Expand a compact IRI (`prefix:suffix`) or leave the value unchanged
    pub fn expand_iri(&self, value: &str) -> String {
        if let Some((prefix, suffix)) = split_compact_iri(value) {
            if let Some(def) = self.terms.get(prefix) {
                return format!("{}{}", def.iri, suffix);
            }
        }
        value.to_string()
    }

    /// Expand a property key to a predicate IRI
    fn expand_key(&self, key: &str) -> Option<(String, bool)> {
        if let Some(def) = self.terms.get(key) {
            return Some((def.iri.clone(), def.is_reference));
        }
        if split_compact_iri(key).is_some() {
            let expanded = self.expand_iri(key);
            if expanded != key {
                return Some((expanded, false));
            }
        }
        if is_absolute_iri(key) {
            return Some((key.to_string(), false));
        }
        self.vocab
            .as_ref()
            .map(|vocab| (format!("{}{}", vocab, key), false))
    }
}

/// Split `prefix:suffix`, rejecting absolute IRIs like `http://...`
fn split_compact_iri(value: &str) -> Option<(&str, &str)> {
    let (prefix, suffix) = value.split_once(':')?;
    if prefix.is_empty() || prefix == "_" || prefix.contains('/') || suffix.starts_with("//") {
        return None;
    }
    Some((prefix, suffix))
}

fn is_absolute_iri(value: &str) -> bool {
    value.contains("://") || value.starts_with("urn:") || value.starts_with("mailto:")
}

/// Parse a JSON-LD document into a graph
///
/// `origin` names the document in error messages.
pub fn parse_graph(content: &str, origin: &str) -> Result<MemoryGraph, CreditError> {
    let doc: Value = serde_json::from_str(content).map_err(|e| CreditError::LoadError {
        path: origin.to_string(),
        reason: format!("Invalid JSON: {}", e),
    })?;
    graph_from_value(&doc)
}

/// Flatten an already-parsed JSON-LD value into a graph
pub fn graph_from_value(doc: &Value) -> Result<MemoryGraph, CreditError> {
    let mut taken_blanks = HashSet::new();
    collect_blank_labels(doc, &mut taken_blanks);
    let mut builder = Builder {
        graph: MemoryGraph::new(),
        next_blank: 0,
        taken_blanks,
    };
    let mut ctx = Context::with_defaults();

    match doc {
        Value::Array(nodes) => {
            for node in nodes {
                builder.add_node(node, &ctx)?;
            }
        }
        Value::Object(obj) => {
            if let Some(local) = obj.get("@context") {
                ctx.extend(local)?;
            }
            match obj.get("@graph") {
                Some(Value::Array(nodes)) => {
                    for node in nodes {
                        builder.add_node(node, &ctx)?;
                    }
                }
                Some(node @ Value::Object(_)) => {
                    builder.add_node(node, &ctx)?;
                }
                Some(other) => {
                    return Err(CreditError::InvalidDocument(format!(
                        "@graph must be an array or object, got {}",
                        other
                    )))
                }
                None => {
                    builder.add_node(doc, &ctx)?;
                }
            }
        }
        other => {
            return Err(CreditError::InvalidDocument(format!(
                "document must be an object or array, got {}",
                other
            )))
        }
    }

    Ok(builder.graph)
}

/// Every string in the document that reads as a blank node label
fn collect_blank_labels(value: &Value, labels: &mut HashSet<String>) {
    match value {
        Value::String(s) if s.starts_with(BLANK_PREFIX) => {
            labels.insert(s.clone());
        }
        Value::Array(items) => items.iter().for_each(|v| collect_blank_labels(v, labels)),
        Value::Object(obj) => obj.values().for_each(|v| collect_blank_labels(v, labels)),
        _ => {}
    }
}

struct Builder {
    graph: MemoryGraph,
    next_blank: usize,
    /// Labels written in the document; generated labels skip them
    taken_blanks: HashSet<String>,
}

impl Builder {
    fn fresh_blank(&mut self) -> String {
        loop {
            let id = format!("{}b{}", BLANK_PREFIX, self.next_blank);
            self.next_blank += 1;
            if !self.taken_blanks.contains(&id) {
                return id;
            }
        }
    }

    /// Add a node object and everything nested in it; returns its subject
    fn add_node(&mut self, node: &Value, parent_ctx: &Context) -> Result<String, CreditError> {
        let obj = node.as_object().ok_or_else(|| {
            CreditError::InvalidDocument(format!("node must be an object, got {}", node))
        })?;

        let mut scoped;
        let ctx = match obj.get("@context") {
            Some(local) => {
                scoped = parent_ctx.clone();
                scoped.extend(local)?;
                &scoped
            }
            None => parent_ctx,
        };

        let subject = match extract_id(obj) {
            Some(id) => ctx.expand_iri(id),
            None => self.fresh_blank(),
        };

        for ty in extract_types(obj) {
            self.graph
                .insert(subject.clone(), RDF_TYPE, Term::node(ctx.expand_iri(&ty)));
        }

        for (key, value) in obj {
            if key.starts_with('@') {
                continue;
            }
            let Some((predicate, is_reference)) = ctx.expand_key(key) else {
                tracing::trace!(key = %key, "dropping property without IRI mapping");
                continue;
            };
            self.add_values(&subject, &predicate, value, is_reference, ctx)?;
        }

        Ok(subject)
    }

    fn add_values(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &Value,
        is_reference: bool,
        ctx: &Context,
    ) -> Result<(), CreditError> {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.add_values(subject, predicate, item, is_reference, ctx)?;
                }
            }
            Value::Null => {}
            Value::String(s) if is_reference => {
                self.graph
                    .insert(subject, predicate, Term::node(ctx.expand_iri(s)));
            }
            Value::String(s) => {
                self.graph.insert(subject, predicate, Term::literal(s.clone()));
            }
            Value::Number(n) => {
                self.graph.insert(subject, predicate, Term::literal(n.to_string()));
            }
            Value::Bool(b) => {
                self.graph.insert(subject, predicate, Term::literal(b.to_string()));
            }
            Value::Object(obj) => {
                if let Some(term) = value_object(obj) {
                    self.graph.insert(subject, predicate, term);
                } else if is_reference_object(obj) {
                    let id = extract_id(obj).unwrap_or_default();
                    self.graph
                        .insert(subject, predicate, Term::node(ctx.expand_iri(id)));
                } else {
                    let nested = self.add_node(value, ctx)?;
                    self.graph.insert(subject, predicate, Term::node(nested));
                }
            }
        }
        Ok(())
    }
}

/// Extract `@id` from a node object
pub fn extract_id(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("@id").and_then(|v| v.as_str())
}

/// Extract `@type` as a list of type names
pub fn extract_types(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("@type") {
        Some(Value::String(t)) => vec![t.clone()],
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => vec![],
    }
}

/// `{"@id": ...}` with nothing else
fn is_reference_object(obj: &Map<String, Value>) -> bool {
    obj.len() == 1 && extract_id(obj).is_some()
}

/// `{"@value": ..., "@language": ...}` as a literal term
fn value_object(obj: &Map<String, Value>) -> Option<Term> {
    let value = match obj.get("@value")? {
        Value::String(s) => s.clone(),
        Value::Null => return None,
        other => other.to_string(),
    };
    let language = obj
        .get("@language")
        .and_then(|v| v.as_str())
        .map(String::from);
    Some(Term::Literal { value, language })
}
