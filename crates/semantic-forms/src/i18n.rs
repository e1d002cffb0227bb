//! Translation lookup for labels and button text.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::error::{FormError, Result};

/// Looks up display text by key.
pub trait Translator: Send + Sync {
    /// Returns the translation for `key`, or a placeholder naming the
    /// missing key.
    fn translate(&self, key: &str) -> String;

    /// Returns the active locale.
    fn locale(&self) -> &str;
}

/// A flat key/value translation catalog for one locale.
///
/// # Example
/// ```
/// use semantic_forms::{MessageCatalog, Translator};
///
/// let catalog = MessageCatalog::from_json(
///     "en",
///     r#"{"en": {"save": "Save", "user": {"name": "Full name"}}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.translate("save"), "Save");
/// assert_eq!(catalog.translate("user.name"), "Full name");
/// assert_eq!(catalog.translate("email"), "translation missing: en, email");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Creates an empty catalog for the given locale.
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    /// Parses a catalog from JSON.
    ///
    /// The document is either nested under the locale key
    /// (`{"en": {...}}`) or holds the messages directly. Nested objects are
    /// flattened into dotted keys.
    pub fn from_json(locale: &str, json: &str) -> Result<Self> {
        let root: Value =
            serde_json::from_str(json).map_err(|e| FormError::Translations(e.to_string()))?;
        let scoped = match root.get(locale) {
            Some(inner) => inner,
            None => &root,
        };
        let Value::Object(_) = scoped else {
            return Err(FormError::Translations(format!(
                "expected an object of messages for locale {locale}"
            )));
        };

        let mut catalog = Self::new(locale);
        flatten_into(&mut catalog.messages, String::new(), scoped);
        Ok(catalog)
    }

    /// Adds a translation.
    pub fn add(&mut self, key: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(key.into(), translation.into());
    }

    /// Builder variant of [`MessageCatalog::add`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, translation: impl Into<String>) -> Self {
        self.add(key, translation);
        self
    }

    /// Returns a translation if one is present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Returns the number of translations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        if let Some(text) = self.get(key) {
            return text.to_string();
        }
        warn!(locale = %self.locale, key, "translation missing");
        format!("translation missing: {}, {key}", self.locale)
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(out, path, inner);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
