//! Base controls: the plain inputs the field decorator wraps.
//!
//! Controls follow the usual Rails-style markup: ids `<object>_<field>`,
//! names `<object>[<field>]`. The builder decides id and name and passes
//! them in; controls only render.

mod choice;
mod select;

pub use choice::{CheckBox, CheckBoxTag, RadioButton};
pub use select::{DatetimeSelect, Select};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static NON_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-a-zA-Z0-9:.]").unwrap());

/// Attributes that can be applied to a control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlAttrs {
    /// HTML attributes, rendered in name order.
    pub attrs: BTreeMap<String, String>,
}

impl ControlAttrs {
    /// Creates new empty control attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Sets an attribute unless it is already present.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Renders attributes as an HTML attribute string, each preceded by a
    /// space.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for controls that render a single form input.
pub trait Widget: Send + Sync {
    /// Renders the control as HTML.
    ///
    /// # Arguments
    /// * `name` - The name attribute, e.g. `user[name]`
    /// * `value` - The current value (if any)
    /// * `attrs` - Further HTML attributes, including the id
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String;
}

/// An `<input>` carrying its value, such as text, password or email.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type.
    pub input_type: String,
    /// The `size` attribute.
    pub size: Option<u32>,
    /// Whether the current value is written out.
    pub keep_value: bool,
}

impl TextInput {
    /// Creates an input of the given type.
    pub fn new(input_type: impl Into<String>, size: Option<u32>) -> Self {
        Self {
            input_type: input_type.into(),
            size,
            keep_value: true,
        }
    }

    /// Creates a password input, which never echoes its value.
    pub fn password(size: Option<u32>) -> Self {
        Self {
            keep_value: false,
            ..Self::new("password", size)
        }
    }

    /// Creates a file input.
    pub fn file(size: Option<u32>) -> Self {
        Self {
            keep_value: false,
            ..Self::new("file", size)
        }
    }

    /// Creates a hidden input.
    pub fn hidden() -> Self {
        Self::new("hidden", None)
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String {
        let mut attrs = attrs.clone();
        if let Some(size) = self.size {
            attrs.set_default("size", size.to_string());
        }
        let value_attr = value
            .filter(|_| self.keep_value)
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="{}" name="{}"{value_attr}{} />"#,
            self.input_type,
            html_escape(name),
            attrs.to_html()
        )
    }
}

/// A `<textarea>`.
#[derive(Debug, Clone)]
pub struct TextArea {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl Default for TextArea {
    fn default() -> Self {
        Self { rows: 20, cols: 40 }
    }
}

impl Widget for TextArea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String {
        let mut attrs = attrs.clone();
        attrs.set_default("rows", self.rows.to_string());
        attrs.set_default("cols", self.cols.to_string());
        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{}"{}>{content}</textarea>"#,
            html_escape(name),
            attrs.to_html()
        )
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Turns a control name or joined parts into a DOM id.
///
/// `]` is dropped and anything outside `[-A-Za-z0-9:.]` becomes `_`, so
/// `user[role]` gives `user_role`.
pub fn sanitize_id(raw: &str) -> String {
    NON_ID_CHARS
        .replace_all(&raw.replace(']', ""), "_")
        .into_owned()
}

/// Returns the name attribute of a field: `<object>[<field>]`.
pub fn field_name(object_name: &str, field: &str) -> String {
    format!("{object_name}[{field}]")
}

/// Returns the id of a field's control: `<object>_<field>`.
pub fn field_id(object_name: &str, field: &str) -> String {
    sanitize_id(&format!("{object_name}_{field}"))
}

/// Returns the id of one option of a field: `<object>_<field>_<value>`.
pub fn option_id(object_name: &str, field: &str, value: &str) -> String {
    sanitize_id(&format!("{object_name}_{field}_{value}"))
}
