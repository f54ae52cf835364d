use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Locale key holding the canonical text of a localized field
pub const DEFAULT_LOCALE: &str = "default";

/// A text field that the NHL API returns either as a plain string or as a
/// `{locale: text}` object such as `{"default": "Smith", "cs": "Smith"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedString {
    /// The default-locale text, or the plain string itself.
    pub fn default_text(&self) -> Option<&str> {
        match self {
            LocalizedString::Plain(text) => Some(text),
            LocalizedString::Localized(by_locale) => {
                by_locale.get(DEFAULT_LOCALE).map(String::as_str)
            }
        }
    }

    /// The default-locale text, or `fallback` when there is none.
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.default_text().unwrap_or(fallback)
    }

    /// Reads a localized field out of an arbitrary JSON value.
    ///
    /// Returns `None` for `null`, numbers and objects without a default locale.
    pub fn text_of(value: &Value) -> Option<&str> {
        match value {
            Value::String(text) => Some(text),
            Value::Object(map) => map.get(DEFAULT_LOCALE).and_then(Value::as_str),
            _ => None,
        }
    }
}

impl Default for LocalizedString {
    fn default() -> Self {
        LocalizedString::Plain(String::new())
    }
}

impl From<&str> for LocalizedString {
    fn from(text: &str) -> Self {
        LocalizedString::Plain(text.to_string())
    }
}

/// Resolves an optional localized field to owned text, blank when absent.
pub fn text_or_blank(field: Option<&LocalizedString>) -> String {
    field
        .and_then(LocalizedString::default_text)
        .unwrap_or_default()
        .to_string()
}
