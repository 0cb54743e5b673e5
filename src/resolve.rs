//! Credit resolution
//!
//! Merges what the vocabulary readers find for a resource into one
//! [`Credit`], then recurses into the resources it names as sources.
//!
//! Precedence between vocabularies is declared per field in the
//! `*_PRIORITY` tables below; the first vocabulary with a value wins.
//! Attribution is merged part by part, so a name from one vocabulary and a
//! URL from another end up in the same link.
//!
//! Recursion is bounded twice: by `max_depth`, and by the chain of
//! ancestors, so a source never resolves to one of its own ancestors.

use std::collections::HashSet;

use crate::credit::{Credit, Link};
use crate::error::CreditError;
use crate::graph::Graph;
use crate::license::license_name;
use crate::readers::{is_web_url, ReaderResult, Vocabulary};

/// Levels of sources resolved by [`credit`]
pub const DEFAULT_RESOLVE_DEPTH: usize = 10;

const TITLE_PRIORITY: &[Vocabulary] = &[
    Vocabulary::CcRel,
    Vocabulary::DublinCore,
    Vocabulary::OpenGraph,
];

const WORK_URL_PRIORITY: &[Vocabulary] = &[Vocabulary::OpenGraph];

const ATTRIBUTION_PRIORITY: &[Vocabulary] = &[
    Vocabulary::CcRel,
    Vocabulary::DublinCore,
    Vocabulary::Twitter,
];

const LICENSE_PRIORITY: &[Vocabulary] = &[Vocabulary::CcRel, Vocabulary::Xhtml];

const RIGHTS_PRIORITY: &[Vocabulary] = &[Vocabulary::DublinCore];

const SOURCE_PRIORITY: &[Vocabulary] = &[Vocabulary::CcRel, Vocabulary::DublinCore];

/// Options for resolution
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Levels of nested sources to resolve; 0 resolves the resource only
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_RESOLVE_DEPTH,
        }
    }
}

/// Credit for the document identified by `source_uri`
///
/// Returns `Ok(None)` when the graph says nothing about the document.
pub fn credit(graph: &dyn Graph, source_uri: &str) -> Result<Option<Credit>, CreditError> {
    credit_with(graph, source_uri, &ResolveOptions::default())
}

/// [`credit`] with explicit options
pub fn credit_with(
    graph: &dyn Graph,
    source_uri: &str,
    options: &ResolveOptions,
) -> Result<Option<Credit>, CreditError> {
    let mut ancestors = HashSet::new();
    resolve_node(graph, source_uri, options.max_depth, &mut ancestors, true)
}

/// Resolve a (possibly nested) resource with `max_depth` levels of sources
///
/// Unlike [`credit`], a resource the graph says nothing about still gets a
/// credit when its identifier is a web URL; the URL becomes the title link.
pub fn resolve(
    graph: &dyn Graph,
    resource: &str,
    max_depth: usize,
) -> Result<Option<Credit>, CreditError> {
    let mut ancestors = HashSet::new();
    resolve_node(graph, resource, max_depth, &mut ancestors, false)
}

/// Reader output for one resource, indexed by vocabulary
struct Readings {
    results: Vec<(Vocabulary, ReaderResult)>,
}

impl Readings {
    fn read(graph: &dyn Graph, subject: &str) -> Result<Self, CreditError> {
        let results = Vocabulary::ALL
            .iter()
            .map(|&v| v.read(graph, subject).map(|r| (v, r)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { results })
    }

    fn is_empty(&self) -> bool {
        self.results.iter().all(|(_, r)| r.is_empty())
    }

    fn get(&self, vocabulary: Vocabulary) -> Option<&ReaderResult> {
        self.results
            .iter()
            .find(|(v, _)| *v == vocabulary)
            .map(|(_, r)| r)
    }

    /// Candidates for one field, in priority order
    fn candidates<'a, T: 'a>(
        &'a self,
        priority: &'a [Vocabulary],
        field: impl Fn(&'a ReaderResult) -> Option<T> + 'a,
    ) -> impl Iterator<Item = (Vocabulary, T)> + 'a {
        priority
            .iter()
            .filter_map(move |&v| self.get(v).and_then(&field).map(|value| (v, value)))
    }

    /// First candidate in priority order
    fn first<'a, T: 'a>(
        &'a self,
        priority: &'a [Vocabulary],
        field: impl Fn(&'a ReaderResult) -> Option<T> + 'a,
    ) -> Option<T> {
        self.candidates(priority, field).next().map(|(_, value)| value)
    }
}

fn resolve_node(
    graph: &dyn Graph,
    subject: &str,
    depth_left: usize,
    ancestors: &mut HashSet<String>,
    is_root: bool,
) -> Result<Option<Credit>, CreditError> {
    let readings = Readings::read(graph, subject)?;

    if readings.is_empty() {
        if is_root {
            tracing::debug!(subject, "no credit metadata for document");
            return Ok(None);
        }
        // Bare reference to a source: the identifier is all we know
        let title = is_web_url(subject)
            .then(|| Link::new(None, Some(subject.to_string())))
            .flatten();
        return Ok(Credit::new(subject, title, None, None, Vec::new()));
    }

    let title_text = readings.first(TITLE_PRIORITY, |r| r.title.clone());
    let work_url = readings.first(WORK_URL_PRIORITY, |r| r.work_url.clone());
    let mut attribution = merge_attribution(&readings, subject);
    let license = readings
        .first(LICENSE_PRIORITY, |r| r.license.as_ref())
        .and_then(resolve_license);

    let mut title = None;
    if title_text.is_some() || work_url.is_some() {
        let url = work_url.or_else(|| is_web_url(subject).then(|| subject.to_string()));
        title = Link::new(title_text, url);
    } else if attribution.is_none() && license.is_none() {
        match readings.first(RIGHTS_PRIORITY, |r| r.rights.clone()) {
            Some(rights) => attribution = Some(rights),
            None if is_web_url(subject) => title = Link::new(None, Some(subject.to_string())),
            None => {}
        }
    }

    let sources = if depth_left > 0 {
        ancestors.insert(subject.to_string());
        let resolved = resolve_sources(graph, subject, &readings, depth_left - 1, ancestors);
        ancestors.remove(subject);
        resolved?
    } else {
        Vec::new()
    };

    Ok(Credit::new(subject, title, attribution, license, sources))
}

fn resolve_sources(
    graph: &dyn Graph,
    subject: &str,
    readings: &Readings,
    depth_left: usize,
    ancestors: &mut HashSet<String>,
) -> Result<Vec<Credit>, CreditError> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for (_, ids) in readings.candidates(SOURCE_PRIORITY, |r| Some(&r.sources)) {
        for id in ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            if id == subject || ancestors.contains(id) {
                tracing::debug!(subject, source = %id, "dropping source that is its own ancestor");
                continue;
            }
            if let Some(source) = resolve_node(graph, id, depth_left, ancestors, false)? {
                sources.push(source);
            }
        }
    }

    Ok(sources)
}

/// Merge attribution parts across vocabularies
///
/// The highest priority candidate provides the base; a missing name or URL
/// is filled from the next candidate that has one. Two vocabularies
/// disagreeing on a part is reported but not resolved: the higher priority
/// value stays.
fn merge_attribution(readings: &Readings, subject: &str) -> Option<Link> {
    let mut text: Option<(Vocabulary, &str)> = None;
    let mut url: Option<(Vocabulary, &str)> = None;

    let candidates = readings.candidates(ATTRIBUTION_PRIORITY, |r| r.attribution.as_ref());
    for (vocabulary, candidate) in candidates {
        merge_part(&mut text, vocabulary, candidate.text(), subject, "name");
        merge_part(&mut url, vocabulary, candidate.url(), subject, "url");
    }

    Link::new(
        text.map(|(_, t)| t.to_string()),
        url.map(|(_, u)| u.to_string()),
    )
}

fn merge_part<'a>(
    slot: &mut Option<(Vocabulary, &'a str)>,
    vocabulary: Vocabulary,
    value: Option<&'a str>,
    subject: &str,
    part: &str,
) {
    let Some(value) = value else {
        return;
    };
    match *slot {
        None => *slot = Some((vocabulary, value)),
        Some((kept_from, kept)) if kept != value => {
            tracing::debug!(
                subject,
                part,
                kept = %kept,
                kept_from = ?kept_from,
                ignored = %value,
                ignored_from = ?vocabulary,
                "conflicting attribution values"
            );
        }
        Some(_) => {}
    }
}

/// License URI to (display name, URI); literal license text is kept as is
fn resolve_license(candidate: &Link) -> Option<Link> {
    match candidate.url() {
        Some(uri) => Link::new(license_name(uri), Some(uri.to_string())),
        None => Link::new(candidate.text.clone(), None),
    }
}
