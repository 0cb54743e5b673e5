//! Vocabulary definitions for credit metadata
//!
//! Predicate IRIs for every vocabulary the readers understand, plus the
//! prefix context the JSON-LD parser starts from.

/// Dublin Core elements namespace
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Dublin Core terms namespace
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";

/// Creative Commons Rights Expression Language namespace
pub const CC_NS: &str = "http://creativecommons.org/ns#";

/// XHTML vocabulary namespace (`rel="license"` in markup)
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml/vocab#";

/// Open Graph protocol namespace
pub const OG_NS: &str = "http://ogp.me/ns#";

/// Twitter card markup namespace
pub const TWITTER_NS: &str = "https://dev.twitter.com/cards#";

/// RDF syntax namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Generic bibliographic terms (Dublin Core elements and terms)
pub mod dc {
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    pub const CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
    pub const RIGHTS: &str = "http://purl.org/dc/elements/1.1/rights";
    pub const SOURCE: &str = "http://purl.org/dc/elements/1.1/source";

    pub const TERMS_CREATOR: &str = "http://purl.org/dc/terms/creator";
    pub const TERMS_RIGHTS: &str = "http://purl.org/dc/terms/rights";
}

/// Rights expression terms (ccREL)
///
/// ccREL describes the work itself with `dcterms:title` and `dcterms:source`,
/// so those belong to this vocabulary rather than the generic one.
pub mod cc {
    pub const ATTRIBUTION_NAME: &str = "http://creativecommons.org/ns#attributionName";
    pub const ATTRIBUTION_URL: &str = "http://creativecommons.org/ns#attributionURL";
    pub const LICENSE: &str = "http://creativecommons.org/ns#license";
    pub const WORK_TITLE: &str = "http://purl.org/dc/terms/title";
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";
}

/// Open Graph tags
pub mod og {
    pub const TITLE: &str = "http://ogp.me/ns#title";
    pub const URL: &str = "http://ogp.me/ns#url";
}

/// License declared in document markup
pub mod xhtml {
    pub const LICENSE: &str = "http://www.w3.org/1999/xhtml/vocab#license";
}

/// Twitter card tags
pub mod twitter {
    pub const CREATOR: &str = "https://dev.twitter.com/cards#creator";

    /// Profile URL prefix for a creator handle
    pub const PROFILE_BASE: &str = "https://twitter.com/";
}

/// rdf:type, emitted for JSON-LD `@type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Prefixes available to every JSON-LD document before its own `@context`
pub fn default_prefixes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("dc", DC_NS),
        ("dcterms", DCTERMS_NS),
        ("cc", CC_NS),
        ("xhtml", XHTML_NS),
        ("og", OG_NS),
        ("twitter", TWITTER_NS),
        ("rdf", RDF_NS),
    ]
}
