//! Vocabulary readers
//!
//! Each vocabulary has one reader that pulls candidate values for a single
//! resource out of the graph. Readers never decide between vocabularies;
//! they report what they find and the resolver applies precedence.

use crate::credit::Link;
use crate::error::CreditError;
use crate::graph::{Graph, Term};
use crate::vocab::{cc, dc, og, twitter, xhtml};

/// The metadata vocabularies credit information is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// ccREL rights expression terms
    CcRel,
    /// Dublin Core elements and terms
    DublinCore,
    /// Open Graph tags
    OpenGraph,
    /// XHTML `license` relation
    Xhtml,
    /// Twitter card tags
    Twitter,
}

impl Vocabulary {
    /// Every vocabulary, in the order readers are run
    pub const ALL: [Vocabulary; 5] = [
        Vocabulary::CcRel,
        Vocabulary::DublinCore,
        Vocabulary::OpenGraph,
        Vocabulary::Xhtml,
        Vocabulary::Twitter,
    ];

    /// Read this vocabulary's candidates for `subject`
    pub fn read(self, graph: &dyn Graph, subject: &str) -> Result<ReaderResult, CreditError> {
        match self {
            Vocabulary::CcRel => read_ccrel(graph, subject),
            Vocabulary::DublinCore => read_dublin_core(graph, subject),
            Vocabulary::OpenGraph => read_open_graph(graph, subject),
            Vocabulary::Xhtml => read_xhtml(graph, subject),
            Vocabulary::Twitter => read_twitter(graph, subject),
        }
    }
}

/// Candidate values one vocabulary holds for a resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderResult {
    pub title: Option<String>,
    /// Explicit URL of the work, more specific than the resource identifier
    pub work_url: Option<String>,
    pub attribution: Option<Link>,
    /// License URI in `url`, or license text when given as a literal
    pub license: Option<Link>,
    /// Plain rights statement
    pub rights: Option<Link>,
    /// Identifiers of resources credited as sources, in graph order
    pub sources: Vec<String>,
}

impl ReaderResult {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.work_url.is_none()
            && self.attribution.is_none()
            && self.license.is_none()
            && self.rights.is_none()
            && self.sources.is_empty()
    }
}

/// ccREL: explicit attribution, license and source relations
pub fn read_ccrel(graph: &dyn Graph, subject: &str) -> Result<ReaderResult, CreditError> {
    let name = first_text(&graph.objects(subject, cc::ATTRIBUTION_NAME)?);
    let url = first_url(&graph.objects(subject, cc::ATTRIBUTION_URL)?);

    Ok(ReaderResult {
        title: first_text(&graph.objects(subject, cc::WORK_TITLE)?),
        attribution: Link::new(name, url),
        license: first_link(&graph.objects(subject, cc::LICENSE)?),
        sources: nodes(&graph.objects(subject, cc::SOURCE)?),
        ..Default::default()
    })
}

/// Dublin Core: title, creator, rights statement and `dc:source`
pub fn read_dublin_core(graph: &dyn Graph, subject: &str) -> Result<ReaderResult, CreditError> {
    let mut creators = graph.objects(subject, dc::CREATOR)?;
    creators.extend(graph.objects(subject, dc::TERMS_CREATOR)?);

    let mut rights = graph.objects(subject, dc::RIGHTS)?;
    rights.extend(graph.objects(subject, dc::TERMS_RIGHTS)?);

    Ok(ReaderResult {
        title: first_text(&graph.objects(subject, dc::TITLE)?),
        attribution: Link::new(first_text(&creators), first_url(&creators)),
        rights: Link::new(first_text(&rights), first_url(&rights)),
        sources: nodes(&graph.objects(subject, dc::SOURCE)?),
        ..Default::default()
    })
}

/// Open Graph: page title and canonical URL
pub fn read_open_graph(graph: &dyn Graph, subject: &str) -> Result<ReaderResult, CreditError> {
    Ok(ReaderResult {
        title: first_text(&graph.objects(subject, og::TITLE)?),
        work_url: first_url(&graph.objects(subject, og::URL)?),
        ..Default::default()
    })
}

/// XHTML vocabulary: license declared in markup
pub fn read_xhtml(graph: &dyn Graph, subject: &str) -> Result<ReaderResult, CreditError> {
    Ok(ReaderResult {
        license: first_link(&graph.objects(subject, xhtml::LICENSE)?),
        ..Default::default()
    })
}

/// Twitter cards: creator handle as a last-resort attribution
pub fn read_twitter(graph: &dyn Graph, subject: &str) -> Result<ReaderResult, CreditError> {
    let attribution = first_text(&graph.objects(subject, twitter::CREATOR)?).and_then(|raw| {
        let handle = raw.trim().trim_start_matches('@');
        if handle.is_empty() {
            return None;
        }
        Link::new(
            Some(format!("@{}", handle)),
            Some(format!("{}{}", twitter::PROFILE_BASE, handle)),
        )
    });

    Ok(ReaderResult {
        attribution,
        ..Default::default()
    })
}

/// First non-blank literal
fn first_text(objects: &[Term]) -> Option<String> {
    objects
        .iter()
        .filter_map(Term::as_literal)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from)
}

/// First IRI. A literal naming an absolute http(s) URL counts too, since
/// markup often stores URLs as plain text.
fn first_url(objects: &[Term]) -> Option<String> {
    objects
        .iter()
        .find_map(|t| match t {
            Term::Iri(iri) => Some(iri.clone()),
            Term::Literal { value, .. } if is_web_url(value.trim()) => {
                Some(value.trim().to_string())
            }
            _ => None,
        })
}

/// First value as a link: IRIs (or URL literals) go in `url`, other literals in `text`
fn first_link(objects: &[Term]) -> Option<Link> {
    if let Some(url) = first_url(objects) {
        return Link::new(None, Some(url));
    }
    Link::new(first_text(objects), None)
}

/// Resource identifiers: IRIs, blank nodes and http(s) URL literals.
/// Other literals are skipped.
fn nodes(objects: &[Term]) -> Vec<String> {
    objects
        .iter()
        .filter_map(|t| match t {
            Term::Literal { value, .. } => Some(value.trim()).filter(|v| is_web_url(v)),
            _ => t.as_node(),
        })
        .map(String::from)
        .collect()
}

/// Whether `value` is an absolute http or https URL
pub fn is_web_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
