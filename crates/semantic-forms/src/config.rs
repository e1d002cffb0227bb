//! Rendering settings.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Markup conventions shared by every field a builder renders.
///
/// Every key is optional when loading from JSON; missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Glyph placed in the `<abbr>` of required labels.
    pub required_marker: String,
    /// Appended to labels derived from a translation.
    pub label_suffix: String,
    /// `size` attribute of text-like inputs.
    pub text_size: u32,
    /// `rows` attribute of text areas.
    pub text_area_rows: u32,
    /// `cols` attribute of text areas.
    pub text_area_cols: u32,
    /// Default `name` of the submit button.
    pub submit_name: String,
    /// Translation key of the default submit text.
    pub save_key: String,
    /// Years offered before and after the selected one by `datetime_select`.
    pub datetime_year_span: u16,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            required_marker: "*".to_string(),
            label_suffix: ": ".to_string(),
            text_size: 30,
            text_area_rows: 20,
            text_area_cols: 40,
            submit_name: "commit".to_string(),
            save_key: "save".to_string(),
            datetime_year_span: 5,
        }
    }
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Sets the required marker glyph.
    #[must_use]
    pub fn required_marker(mut self, marker: impl Into<String>) -> Self {
        self.required_marker = marker.into();
        self
    }

    /// Sets the suffix of translated labels.
    #[must_use]
    pub fn label_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.label_suffix = suffix.into();
        self
    }

    /// Sets the default submit button name.
    #[must_use]
    pub fn submit_name(mut self, name: impl Into<String>) -> Self {
        self.submit_name = name.into();
        self
    }
}
