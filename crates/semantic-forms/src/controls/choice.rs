//! Check boxes and radio buttons.

use super::{html_escape, ControlAttrs, Widget};

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "on" | "yes" | "t")
}

/// A boolean check box.
///
/// A hidden input carrying the unchecked value precedes the box, so an
/// unticked box still submits a value.
#[derive(Debug, Clone)]
pub struct CheckBox {
    /// Value submitted when ticked.
    pub checked_value: String,
    /// Value submitted when not ticked.
    pub unchecked_value: String,
}

impl Default for CheckBox {
    fn default() -> Self {
        Self {
            checked_value: "1".to_string(),
            unchecked_value: "0".to_string(),
        }
    }
}

impl Widget for CheckBox {
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String {
        let checked = value.is_some_and(|v| v == self.checked_value || is_truthy(v));
        let checked_attr = if checked { r#" checked="checked""# } else { "" };
        let name = html_escape(name);
        let hidden = format!(
            r#"<input type="hidden" name="{name}" value="{}" />"#,
            html_escape(&self.unchecked_value)
        );
        format!(
            r#"{hidden}<input type="checkbox" name="{name}" value="{}"{checked_attr}{} />"#,
            html_escape(&self.checked_value),
            attrs.to_html()
        )
    }
}

/// A radio input for one value of a field.
#[derive(Debug, Clone)]
pub struct RadioButton {
    /// The value this radio submits.
    pub tag_value: String,
}

impl RadioButton {
    /// Creates a radio for `tag_value`.
    pub fn new(tag_value: impl Into<String>) -> Self {
        Self {
            tag_value: tag_value.into(),
        }
    }
}

impl Widget for RadioButton {
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String {
        let checked_attr = if value == Some(self.tag_value.as_str()) {
            r#" checked="checked""#
        } else {
            ""
        };
        format!(
            r#"<input type="radio" name="{}" value="{}"{checked_attr}{} />"#,
            html_escape(name),
            html_escape(&self.tag_value),
            attrs.to_html()
        )
    }
}

/// One check box of a multi-valued field, named `<object>[<field>][]`.
#[derive(Debug, Clone)]
pub struct CheckBoxTag {
    /// The value this box submits.
    pub tag_value: String,
    /// Whether the box starts ticked.
    pub checked: bool,
}

impl CheckBoxTag {
    /// Creates a box for `tag_value`.
    pub fn new(tag_value: impl Into<String>, checked: bool) -> Self {
        Self {
            tag_value: tag_value.into(),
            checked,
        }
    }
}

impl Widget for CheckBoxTag {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &ControlAttrs) -> String {
        let checked_attr = if self.checked { r#" checked="checked""# } else { "" };
        format!(
            r#"<input type="checkbox" name="{}" value="{}"{checked_attr}{} />"#,
            html_escape(name),
            html_escape(&self.tag_value),
            attrs.to_html()
        )
    }
}
