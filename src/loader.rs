//! Loading metadata documents
//!
//! A document is a JSON-LD file on disk or behind a URL. Either way it is
//! read completely and handed to the JSON-LD parser.

use std::path::PathBuf;

use reqwest::header::ACCEPT;

use crate::error::CreditError;
use crate::graph::MemoryGraph;
use crate::jsonld::parse_graph;
use crate::readers::is_web_url;

/// Media types requested when fetching a document
const ACCEPT_JSONLD: &str = "application/ld+json, application/json;q=0.9";

/// Where a metadata document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Local JSON-LD file
    File(PathBuf),
    /// Remote document fetched over HTTP(S)
    Url(String),
}

impl GraphSource {
    /// Classify a command-line style source string
    pub fn parse(source: &str) -> Self {
        if is_web_url(source) {
            GraphSource::Url(source.to_string())
        } else {
            GraphSource::File(PathBuf::from(source))
        }
    }

    /// The document's own URI, when the source has one
    pub fn document_uri(&self) -> Option<&str> {
        match self {
            GraphSource::Url(u) => Some(u),
            GraphSource::File(_) => None,
        }
    }

    /// Human-readable origin for error messages
    pub fn origin(&self) -> String {
        match self {
            GraphSource::Url(u) => u.clone(),
            GraphSource::File(p) => p.display().to_string(),
        }
    }
}

/// Read the raw document text
pub fn load_document(source: &GraphSource) -> Result<String, CreditError> {
    match source {
        GraphSource::File(path) => load_file(path),
        GraphSource::Url(url) => fetch_url(url),
    }
}

/// Load and parse a document into a graph
pub fn load_graph(source: &GraphSource) -> Result<MemoryGraph, CreditError> {
    let content = load_document(source)?;
    let graph = parse_graph(&content, &source.origin())?;
    tracing::debug!(origin = %source.origin(), statements = graph.len(), "loaded metadata graph");
    Ok(graph)
}

fn load_file(path: &PathBuf) -> Result<String, CreditError> {
    if !path.is_file() {
        return Err(CreditError::InvalidPath(path.clone()));
    }
    std::fs::read_to_string(path).map_err(|e| CreditError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Simple URL fetch
fn fetch_url(url: &str) -> Result<String, CreditError> {
    let load_error = |reason: String| CreditError::LoadError {
        path: url.to_string(),
        reason,
    };

    reqwest::blocking::Client::new()
        .get(url)
        .header(ACCEPT, ACCEPT_JSONLD)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| load_error(format!("HTTP request failed: {}", e)))?
        .text()
        .map_err(|e| load_error(format!("Failed to read response: {}", e)))
}
