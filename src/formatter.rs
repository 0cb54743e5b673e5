//! The formatter contract
//!
//! [`Credit::format`](crate::credit::Credit::format) walks a credit tree and
//! drives a [`CreditFormatter`] depth first. For every node it calls, in
//! order:
//!
//! 1. `begin`
//! 2. `add_title`, `add_attrib`, `add_license` (each only when present)
//! 3. `begin_sources`, then every child node, then `end_sources`
//!    (only when children are formatted)
//! 4. `end`
//!
//! `begin`/`end` always pair up, also for nodes without any text of their
//! own. Renderers keep their own output and nesting state.

pub trait CreditFormatter {
    /// Enter a credit node
    fn begin(&mut self);

    /// Leave the node entered by the matching `begin`
    fn end(&mut self);

    fn add_title(&mut self, text: Option<&str>, url: Option<&str>);

    fn add_attrib(&mut self, text: Option<&str>, url: Option<&str>);

    /// `text` is the license display name, or the raw URI when the license
    /// has no known name
    fn add_license(&mut self, text: &str, url: Option<&str>);

    /// Children follow; `label` is the localized "Source:"/"Sources:" heading
    fn begin_sources(&mut self, _label: &str) {}

    fn end_sources(&mut self) {}
}

/// Formatter that records the call sequence, for callers that want the
/// events rather than rendered output
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventRecorder {
    pub events: Vec<FormatEvent>,
}

/// One formatter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatEvent {
    Begin,
    End,
    Title(Option<String>, Option<String>),
    Attrib(Option<String>, Option<String>),
    License(String, Option<String>),
    BeginSources(String),
    EndSources,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `begin` calls seen
    pub fn nodes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FormatEvent::Begin))
            .count()
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(String::from)
}

impl CreditFormatter for EventRecorder {
    fn begin(&mut self) {
        self.events.push(FormatEvent::Begin);
    }

    fn end(&mut self) {
        self.events.push(FormatEvent::End);
    }

    fn add_title(&mut self, text: Option<&str>, url: Option<&str>) {
        self.events.push(FormatEvent::Title(owned(text), owned(url)));
    }

    fn add_attrib(&mut self, text: Option<&str>, url: Option<&str>) {
        self.events.push(FormatEvent::Attrib(owned(text), owned(url)));
    }

    fn add_license(&mut self, text: &str, url: Option<&str>) {
        self.events
            .push(FormatEvent::License(text.to_string(), owned(url)));
    }

    fn begin_sources(&mut self, label: &str) {
        self.events.push(FormatEvent::BeginSources(label.to_string()));
    }

    fn end_sources(&mut self) {
        self.events.push(FormatEvent::EndSources);
    }
}
