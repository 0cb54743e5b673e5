//! Attribution statements from linked-data metadata
//!
//! This library reads the credit information a document carries in its
//! metadata graph and turns it into a human-readable attribution, such as
//!
//! ```text
//! a title by name of attribution (CC-BY-SA 3.0 Unported). Source:
//!     * subsrc title by subsrc attribution (CC-BY-NC-ND 3.0 Unported).
//! ```
//!
//! # Overview
//!
//! Credit metadata is spread over several overlapping vocabularies. The
//! library:
//!
//! 1. Reads candidate titles, attributions, licenses and source relations
//!    from each vocabulary (ccREL, Dublin Core, Open Graph, XHTML, Twitter)
//! 2. Picks one title, attribution and license per resource by fixed
//!    precedence, merging attribution name and URL across vocabularies
//! 3. Names Creative Commons licenses ("CC-BY 3.0 (AU)")
//! 4. Follows source relations recursively, bounded by depth and guarded
//!    against cycles
//! 5. Drives a [`CreditFormatter`] over the resulting [`Credit`] tree, so
//!    the same credit can be rendered as text, HTML or anything else
//!
//! # Usage
//!
//! ```
//! use libcredit::{credit, jsonld::parse_graph};
//!
//! let graph = parse_graph(
//!     r#"{
//!         "@id": "http://src/",
//!         "dc:title": "a title",
//!         "cc:attributionName": "name of attribution",
//!         "cc:license": {"@id": "http://creativecommons.org/licenses/by-sa/3.0/"}
//!     }"#,
//!     "example",
//! )?;
//!
//! let credit = credit(&graph, "http://src/")?.expect("document has credit metadata");
//! assert_eq!(
//!     credit.to_text(1, None),
//!     "a title by name of attribution (CC-BY-SA 3.0 Unported)."
//! );
//! # Ok::<(), libcredit::CreditError>(())
//! ```

pub mod credit;
pub mod error;
pub mod formatter;
pub mod graph;
pub mod html;
pub mod jsonld;
pub mod l10n;
pub mod license;
pub mod loader;
pub mod readers;
pub mod resolve;
pub mod text;
pub mod vocab;

// Re-export main types for convenience
pub use crate::credit::{Credit, Link, DEFAULT_FORMAT_DEPTH};
pub use crate::error::CreditError;
pub use crate::formatter::{CreditFormatter, EventRecorder, FormatEvent};
pub use crate::graph::{Graph, MemoryGraph, Term, Triple};
pub use crate::html::HtmlFormatter;
pub use crate::l10n::{Catalog, DefaultMessages, PluralRule, Translator};
pub use crate::license::{license_name, normalize_license_uri};
pub use crate::loader::{load_graph, GraphSource};
pub use crate::readers::{ReaderResult, Vocabulary};
pub use crate::resolve::{
    credit, credit_with, resolve, ResolveOptions, DEFAULT_RESOLVE_DEPTH,
};
pub use crate::text::TextFormatter;
