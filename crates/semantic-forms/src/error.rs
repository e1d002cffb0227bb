//! Error types for form rendering.

use std::collections::BTreeMap;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A helper that needs content was called without a block.
    #[error("no block given to {0}")]
    MissingBlock(&'static str),

    /// Rendering configuration could not be parsed.
    #[error("invalid form configuration: {0}")]
    Config(String),

    /// A translation catalog could not be parsed.
    #[error("invalid translation catalog: {0}")]
    Translations(String),

    /// A format validator was given an invalid pattern.
    #[error("invalid validation pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Collection of validation errors by field.
///
/// Messages keep the order they were added in; fields iterate in name
/// order so summaries render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.values().filter(|m| !m.is_empty()).count()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns whether the field has at least one error.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|m| !m.is_empty())
    }

    /// Returns the message shown next to a field: the first one, with a
    /// leading `^` removed.
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|m| m.first())
            .map(|m| m.strip_prefix('^').unwrap_or(m))
    }

    /// Removes every error of a field.
    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
