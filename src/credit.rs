//! Resolved credit trees
//!
//! A [`Credit`] is the title, attribution and license of one resource plus
//! the credits of the resources it was derived from. Credits are built once
//! by the resolver and never change afterwards.

use serde::Serialize;

use crate::formatter::CreditFormatter;
use crate::html::HtmlFormatter;
use crate::l10n::{DefaultMessages, Translator, SOURCE};
use crate::text::TextFormatter;

/// How many levels of sources `format` shows unless told otherwise
pub const DEFAULT_FORMAT_DEPTH: usize = 1;

/// Text with an optional link target; at least one of the two is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Link {
    /// `None` when both parts are missing
    pub fn new(text: Option<String>, url: Option<String>) -> Option<Self> {
        if text.is_none() && url.is_none() {
            None
        } else {
            Some(Self { text, url })
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Text, or the URL when there is no text
    pub fn label(&self) -> &str {
        self.text
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or_default()
    }
}

/// Attribution for one resource and, recursively, its sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credit {
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribution: Option<Link>,
    /// `text` holds the display name, absent for unknown licenses
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sources: Vec<Credit>,
}

impl Credit {
    /// Build a credit; `None` if it would carry no information at all
    pub fn new(
        subject: impl Into<String>,
        title: Option<Link>,
        attribution: Option<Link>,
        license: Option<Link>,
        sources: Vec<Credit>,
    ) -> Option<Self> {
        if title.is_none() && attribution.is_none() && license.is_none() && sources.is_empty() {
            return None;
        }
        Some(Self {
            subject: subject.into(),
            title,
            attribution,
            license,
            sources,
        })
    }

    /// Identifier of the credited resource
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn title(&self) -> Option<&Link> {
        self.title.as_ref()
    }

    pub fn attribution(&self) -> Option<&Link> {
        self.attribution.as_ref()
    }

    pub fn license(&self) -> Option<&Link> {
        self.license.as_ref()
    }

    pub fn sources(&self) -> &[Credit] {
        &self.sources
    }

    /// Drive `formatter` over this credit and up to `max_depth` levels of
    /// sources. `l10n` translates the sources heading; English is used
    /// when it is `None`.
    pub fn format(
        &self,
        formatter: &mut dyn CreditFormatter,
        max_depth: usize,
        l10n: Option<&dyn Translator>,
    ) {
        let l10n = l10n.unwrap_or(&DefaultMessages);
        self.format_node(formatter, max_depth, l10n);
    }

    fn format_node(
        &self,
        formatter: &mut dyn CreditFormatter,
        depth_left: usize,
        l10n: &dyn Translator,
    ) {
        formatter.begin();

        if let Some(title) = &self.title {
            formatter.add_title(title.text(), title.url());
        }
        if let Some(attrib) = &self.attribution {
            formatter.add_attrib(attrib.text(), attrib.url());
        }
        if let Some(license) = &self.license {
            formatter.add_license(license.label(), license.url());
        }

        if depth_left > 0 && !self.sources.is_empty() {
            formatter.begin_sources(&l10n.translate(SOURCE, self.sources.len()));
            for source in &self.sources {
                source.format_node(formatter, depth_left - 1, l10n);
            }
            formatter.end_sources();
        }

        formatter.end();
    }

    /// Render as plain text
    pub fn to_text(&self, max_depth: usize, l10n: Option<&dyn Translator>) -> String {
        let mut formatter = match l10n {
            Some(l10n) => TextFormatter::localized(l10n),
            None => TextFormatter::new(),
        };
        self.format(&mut formatter, max_depth, l10n);
        formatter.into_text()
    }

    /// Render as an HTML fragment
    pub fn to_html(&self, max_depth: usize, l10n: Option<&dyn Translator>) -> String {
        let mut formatter = match l10n {
            Some(l10n) => HtmlFormatter::localized(l10n),
            None => HtmlFormatter::new(),
        };
        self.format(&mut formatter, max_depth, l10n);
        formatter.into_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{EventRecorder, FormatEvent};

    fn titled(subject: &str, title: &str, sources: Vec<Credit>) -> Credit {
        Credit::new(
            subject,
            Link::new(Some(title.to_string()), Some(subject.to_string())),
            None,
            None,
            sources,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_credit_is_not_built() {
        assert!(Credit::new("urn:src", None, None, None, vec![]).is_none());
        assert!(Link::new(None, None).is_none());
    }

    #[test]
    fn test_sources_only_credit_is_built() {
        let child = titled("http://a/", "a", vec![]);
        let credit = Credit::new("urn:src", None, None, None, vec![child]).unwrap();
        assert_eq!(credit.sources().len(), 1);
    }

    #[test]
    fn test_link_label() {
        let url_only = Link::new(None, Some("http://a/".to_string())).unwrap();
        assert_eq!(url_only.label(), "http://a/");
        let both = Link::new(Some("A".to_string()), Some("http://a/".to_string())).unwrap();
        assert_eq!(both.label(), "A");
    }

    #[test]
    fn test_format_call_order() {
        let credit = Credit::new(
            "http://src/",
            Link::new(Some("title".to_string()), None),
            Link::new(Some("someone".to_string()), Some("http://someone/".to_string())),
            Link::new(None, Some("http://example.org/license".to_string())),
            vec![titled("http://a/", "a", vec![])],
        )
        .unwrap();

        let mut recorder = EventRecorder::new();
        credit.format(&mut recorder, 1, None);

        assert_eq!(
            recorder.events,
            vec![
                FormatEvent::Begin,
                FormatEvent::Title(Some("title".to_string()), None),
                FormatEvent::Attrib(
                    Some("someone".to_string()),
                    Some("http://someone/".to_string())
                ),
                FormatEvent::License(
                    "http://example.org/license".to_string(),
                    Some("http://example.org/license".to_string())
                ),
                FormatEvent::BeginSources("Source:".to_string()),
                FormatEvent::Begin,
                FormatEvent::Title(Some("a".to_string()), Some("http://a/".to_string())),
                FormatEvent::End,
                FormatEvent::EndSources,
                FormatEvent::End,
            ]
        );
    }

    #[test]
    fn test_format_depth_limits_nodes() {
        let credit = titled(
            "http://root/",
            "root",
            vec![
                titled("http://a/", "a", vec![titled("http://a1/", "a1", vec![])]),
                titled("http://b/", "b", vec![]),
            ],
        );

        let counts: Vec<usize> = (0..4)
            .map(|depth| {
                let mut recorder = EventRecorder::new();
                credit.format(&mut recorder, depth, None);
                recorder.nodes()
            })
            .collect();
        assert_eq!(counts, vec![1, 3, 4, 4]);

        let mut recorder = EventRecorder::new();
        credit.format(&mut recorder, 0, None);
        assert!(!recorder
            .events
            .iter()
            .any(|e| matches!(e, FormatEvent::BeginSources(_))));
    }

    #[test]
    fn test_plural_heading() {
        let credit = titled(
            "http://root/",
            "root",
            vec![titled("http://a/", "a", vec![]), titled("http://b/", "b", vec![])],
        );
        let mut recorder = EventRecorder::new();
        credit.format(&mut recorder, DEFAULT_FORMAT_DEPTH, None);
        assert!(recorder
            .events
            .contains(&FormatEvent::BeginSources("Sources:".to_string())));
    }
}
