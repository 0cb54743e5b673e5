//! HTML renderer
//!
//! Same sentence as the text renderer, as markup: linked parts become
//! anchors, the license anchor carries `rel="license"` and sources are a
//! nested `<ul>`.

use crate::formatter::CreditFormatter;
use crate::l10n::{fill, DefaultMessages, Translator, BY};

#[derive(Debug, Default)]
struct Frame {
    has_content: bool,
    paragraph_open: bool,
}

pub struct HtmlFormatter<'a> {
    html: String,
    frames: Vec<Frame>,
    l10n: &'a dyn Translator,
}

impl Default for HtmlFormatter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlFormatter<'static> {
    pub fn new() -> Self {
        HtmlFormatter::localized(&DefaultMessages)
    }
}

impl<'a> HtmlFormatter<'a> {
    pub fn localized(l10n: &'a dyn Translator) -> Self {
        Self {
            html: String::new(),
            frames: Vec::new(),
            l10n,
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    fn push_piece(&mut self, alone: String, joined: impl FnOnce(&str) -> String) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        if frame.has_content {
            self.html.push_str(&joined(&alone));
        } else {
            self.html.push_str(&alone);
        }
        frame.has_content = true;
    }
}

/// Escape text for use in element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<a href>` when there is a URL, escaped text otherwise
fn anchor(text: Option<&str>, url: Option<&str>, rel: Option<&str>) -> String {
    let label = escape(text.or(url).unwrap_or_default());
    match url {
        Some(url) => {
            let rel = rel
                .map(|r| format!(" rel=\"{}\"", escape(r)))
                .unwrap_or_default();
            format!("<a{} href=\"{}\">{}</a>", rel, escape(url), label)
        }
        None => label,
    }
}

impl CreditFormatter for HtmlFormatter<'_> {
    fn begin(&mut self) {
        if self.frames.is_empty() {
            self.html.clear();
            self.html.push_str("<div class=\"credit\"><p>");
        } else {
            self.html.push_str("<li><p>");
        }
        self.frames.push(Frame {
            has_content: false,
            paragraph_open: true,
        });
    }

    fn end(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if frame.paragraph_open {
            if frame.has_content {
                self.html.push('.');
            }
            self.html.push_str("</p>");
        }
        if self.frames.is_empty() {
            self.html.push_str("</div>");
        } else {
            self.html.push_str("</li>");
        }
    }

    fn add_title(&mut self, text: Option<&str>, url: Option<&str>) {
        self.push_piece(anchor(text, url, None), |t| format!(" {}", t));
    }

    fn add_attrib(&mut self, text: Option<&str>, url: Option<&str>) {
        let by = escape(&self.l10n.translate(BY, 1));
        self.push_piece(anchor(text, url, None), |a| format!(" {}", fill(&by, &[a])));
    }

    fn add_license(&mut self, text: &str, url: Option<&str>) {
        self.push_piece(anchor(Some(text), url, Some("license")), |l| {
            format!(" ({})", l)
        });
    }

    fn begin_sources(&mut self, label: &str) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        if frame.has_content {
            self.html.push_str(". ");
        }
        self.html.push_str(&escape(label));
        self.html.push_str("</p><ul>");
        frame.has_content = true;
        frame.paragraph_open = false;
    }

    fn end_sources(&mut self) {
        self.html.push_str("</ul>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_single_credit() {
        let mut f = HtmlFormatter::new();
        f.begin();
        f.add_title(Some("a <title>"), Some("http://src/?a=1&b=2"));
        f.add_attrib(Some("someone"), None);
        f.add_license(
            "CC-BY-SA 3.0 Unported",
            Some("http://creativecommons.org/licenses/by-sa/3.0/"),
        );
        f.end();

        assert_eq!(
            f.html(),
            "<div class=\"credit\"><p><a href=\"http://src/?a=1&amp;b=2\">a &lt;title&gt;</a> \
             by someone (<a rel=\"license\" href=\"http://creativecommons.org/licenses/by-sa/3.0/\">\
             CC-BY-SA 3.0 Unported</a>).</p></div>"
        );
    }

    #[test]
    fn test_sources_list() {
        let mut f = HtmlFormatter::new();
        f.begin();
        f.add_title(Some("main"), None);
        f.begin_sources("Sources:");
        f.begin();
        f.add_title(None, Some("http://a/"));
        f.end();
        f.begin();
        f.add_title(None, Some("http://b/"));
        f.end();
        f.end_sources();
        f.end();

        assert_eq!(
            f.into_html(),
            "<div class=\"credit\"><p>main. Sources:</p><ul>\
             <li><p><a href=\"http://a/\">http://a/</a>.</p></li>\
             <li><p><a href=\"http://b/\">http://b/</a>.</p></li>\
             </ul></div>"
        );
    }
}
