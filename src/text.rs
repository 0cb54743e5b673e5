//! Plain text renderer
//!
//! Produces one sentence per credit:
//!
//! ```text
//! a title by name of attribution (CC-BY-SA 3.0 Unported). Source:
//!     * subsrc title by subsrc attribution (CC-BY-NC-ND 3.0 Unported).
//! ```
//!
//! Sources go on their own lines under a bullet, indented one step per
//! nesting level.

use crate::formatter::CreditFormatter;
use crate::l10n::{fill, DefaultMessages, Translator, BY};

/// Indentation per nesting level
const INDENT: &str = "    ";

#[derive(Debug, Default)]
struct Frame {
    has_content: bool,
    terminated: bool,
}

pub struct TextFormatter<'a> {
    text: String,
    frames: Vec<Frame>,
    l10n: &'a dyn Translator,
}

impl Default for TextFormatter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter<'static> {
    pub fn new() -> Self {
        TextFormatter::localized(&DefaultMessages)
    }
}

impl<'a> TextFormatter<'a> {
    /// Text formatter translating its phrases through `l10n`
    pub fn localized(l10n: &'a dyn Translator) -> Self {
        Self {
            text: String::new(),
            frames: Vec::new(),
            l10n,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Append a piece of the current sentence; `joined` is used when the
    /// sentence already has content, `alone` when it would start it
    fn push_piece(&mut self, alone: &str, joined: impl FnOnce(&str) -> String) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        if frame.has_content {
            self.text.push_str(&joined(alone));
        } else {
            self.text.push_str(alone);
        }
        frame.has_content = true;
    }
}

impl CreditFormatter for TextFormatter<'_> {
    fn begin(&mut self) {
        if self.frames.is_empty() {
            self.text.clear();
        } else {
            self.text.push('\n');
            self.text.push_str(&INDENT.repeat(self.frames.len()));
            self.text.push_str("* ");
        }
        self.frames.push(Frame::default());
    }

    fn end(&mut self) {
        if let Some(frame) = self.frames.pop() {
            if frame.has_content && !frame.terminated {
                self.text.push('.');
            }
        }
    }

    fn add_title(&mut self, text: Option<&str>, url: Option<&str>) {
        let title = text.or(url).unwrap_or_default();
        self.push_piece(title, |t| format!(" {}", t));
    }

    fn add_attrib(&mut self, text: Option<&str>, url: Option<&str>) {
        let attrib = text.or(url).unwrap_or_default();
        let by = self.l10n.translate(BY, 1);
        self.push_piece(attrib, |a| format!(" {}", fill(&by, &[a])));
    }

    fn add_license(&mut self, text: &str, _url: Option<&str>) {
        self.push_piece(text, |l| format!(" ({})", l));
    }

    fn begin_sources(&mut self, label: &str) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        if frame.has_content {
            self.text.push_str(". ");
        }
        self.text.push_str(label);
        frame.has_content = true;
        frame.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l10n::Catalog;

    #[test]
    fn test_single_sentence() {
        let mut f = TextFormatter::new();
        f.begin();
        f.add_title(Some("a title"), Some("http://src/"));
        f.add_attrib(None, Some("http://someone/"));
        f.add_license("CC-BY 3.0 (AU)", None);
        f.end();
        assert_eq!(f.text(), "a title by http://someone/ (CC-BY 3.0 (AU)).");
    }

    #[test]
    fn test_attribution_without_title() {
        let mut f = TextFormatter::new();
        f.begin();
        f.add_attrib(Some("someone"), None);
        f.end();
        assert_eq!(f.text(), "someone.");
    }

    #[test]
    fn test_nested_sources_are_indented() {
        let mut f = TextFormatter::new();
        f.begin();
        f.add_title(Some("top"), None);
        f.begin_sources("Source:");
        f.begin();
        f.add_title(Some("mid"), None);
        f.begin_sources("Source:");
        f.begin();
        f.add_title(None, Some("http://leaf/"));
        f.end();
        f.end_sources();
        f.end();
        f.end_sources();
        f.end();

        assert_eq!(
            f.text(),
            "top. Source:\n    * mid. Source:\n        * http://leaf/."
        );
    }

    #[test]
    fn test_localized_by() {
        let sv = Catalog::from_json(include_str!("../locales/sv.json")).unwrap();
        let mut f = TextFormatter::localized(&sv);
        f.begin();
        f.add_title(Some("titel"), None);
        f.add_attrib(Some("någon"), None);
        f.end();
        assert_eq!(f.text(), "titel av någon.");
    }

    #[test]
    fn test_new_top_level_credit_resets_output() {
        let mut f = TextFormatter::new();
        f.begin();
        f.add_title(Some("first"), None);
        f.end();
        f.begin();
        f.add_title(Some("second"), None);
        f.end();
        assert_eq!(f.into_text(), "second.");
    }
}
