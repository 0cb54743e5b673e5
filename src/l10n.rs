//! Localization of renderer messages
//!
//! Messages are identified by their English text (gettext style) and
//! carry `{0}` placeholders. A [`Catalog`] is a JSON locale file holding
//! every plural form of each message; the form is picked by the locale's
//! [`PluralRule`].

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CreditError;

/// "by {0}", where `{0}` is the attribution
pub const BY: &str = "by {0}";

/// Heading before nested sources, pluralized by the number of sources
pub const SOURCE: &str = "Source:";

/// Translates a message key into a locale string
pub trait Translator {
    /// Translation of `key` in the plural form for `count`
    fn translate(&self, key: &str, count: usize) -> String;
}

/// Built-in English messages
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultMessages;

impl Translator for DefaultMessages {
    fn translate(&self, key: &str, count: usize) -> String {
        match key {
            SOURCE if count != 1 => "Sources:".to_string(),
            _ => key.to_string(),
        }
    }
}

/// Replace `{0}`, `{1}`, ... with `args`
pub fn fill(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |acc, (i, arg)| {
            acc.replace(&format!("{{{}}}", i), arg)
        })
}

/// How a language picks a plural form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// One form for every count (ja, zh, ko, ...)
    Single,
    /// Singular for 1, plural otherwise (en, sv, de, ...)
    OneOther,
    /// Singular for 0 and 1 (fr, pt-BR)
    French,
    /// Three forms by last digits (ru, uk, be, hr, sr)
    Slavic,
    /// Three forms, Polish variant
    Polish,
    /// Three forms: 1, 2-4, other (cs, sk)
    Czech,
}

impl PluralRule {
    /// Rule for a language tag such as `sv` or `pt_BR`
    pub fn for_language(tag: &str) -> Self {
        let lang = tag
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();
        match lang.as_str() {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "tr" => PluralRule::Single,
            "fr" => PluralRule::French,
            "pt" if tag.to_ascii_lowercase().ends_with("br") => PluralRule::French,
            "ru" | "uk" | "be" | "hr" | "sr" | "bs" => PluralRule::Slavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            _ => PluralRule::OneOther,
        }
    }

    /// Index of the plural form for `n`
    pub fn form(self, n: usize) -> usize {
        let (m10, m100) = (n % 10, n % 100);
        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::Slavic => {
                if m10 == 1 && m100 != 11 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}

/// Messages for one locale, loaded from a JSON file such as `locales/sv.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub language: String,
    /// Overrides the rule derived from `language`
    #[serde(default)]
    pub plural_rule: Option<PluralRule>,
    /// msgid -> translations, one per plural form
    pub messages: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn from_json(content: &str) -> Result<Self, CreditError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| CreditError::Locale(e.to_string()))?;
        if catalog.messages.values().any(|forms| forms.is_empty()) {
            return Err(CreditError::Locale(format!(
                "catalog '{}' has a message without translations",
                catalog.language
            )));
        }
        Ok(catalog)
    }

    pub fn rule(&self) -> PluralRule {
        self.plural_rule
            .unwrap_or_else(|| PluralRule::for_language(&self.language))
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, count: usize) -> String {
        self.messages
            .get(key)
            .and_then(|forms| {
                let index = self.rule().form(count);
                forms.get(index).or_else(|| forms.last())
            })
            .cloned()
            .unwrap_or_else(|| DefaultMessages.translate(key, count))
    }
}
