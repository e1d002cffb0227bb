//! Render options for fields, buttons and forms.

use std::collections::BTreeMap;

use crate::controls::ControlAttrs;

/// Options recognised by every field helper.
///
/// `label`, `label_class`, `label_for`, `hint`, `required` and `legend`
/// shape the wrapper and label; the remaining options become attributes of
/// the control itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Explicit label text.
    pub label: Option<String>,
    /// Space separated label classes.
    pub label_class: Option<String>,
    /// Target of the label's `for` attribute.
    pub label_for: Option<String>,
    /// Text shown below the control when the field has no error.
    pub hint: Option<String>,
    /// Overrides the presence rule of the bound model.
    pub required: Option<bool>,
    /// Control class.
    pub class: Option<String>,
    /// Control id.
    pub id: Option<String>,
    /// Control name.
    pub name: Option<String>,
    /// Control value, replacing the bound model's value.
    pub value: Option<String>,
    /// Disables the control and marks the wrapper.
    pub disabled: Option<bool>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Title of a submit button's text.
    pub title: Option<String>,
    /// Legend of a fieldset.
    pub legend: Option<String>,
    /// Any other control attributes.
    pub attrs: BTreeMap<String, String>,
}

impl FieldOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    /// Sets the label classes.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = Some(class.into());
        self
    }

    /// Sets the label's `for` target.
    #[must_use]
    pub fn label_for(mut self, id: impl Into<String>) -> Self {
        self.label_for = Some(id.into());
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }

    /// Overrides whether the field is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the control class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the control id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the control name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the control value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Disables the control.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = Some(true);
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets the submit text title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the fieldset legend.
    #[must_use]
    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Sets an arbitrary control attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Returns whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Merges `other` over `self`; options set in `other` win.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut attrs = self.attrs.clone();
        attrs.extend(other.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            label: other.label.clone().or_else(|| self.label.clone()),
            label_class: other.label_class.clone().or_else(|| self.label_class.clone()),
            label_for: other.label_for.clone().or_else(|| self.label_for.clone()),
            hint: other.hint.clone().or_else(|| self.hint.clone()),
            required: other.required.or(self.required),
            class: other.class.clone().or_else(|| self.class.clone()),
            id: other.id.clone().or_else(|| self.id.clone()),
            name: other.name.clone().or_else(|| self.name.clone()),
            value: other.value.clone().or_else(|| self.value.clone()),
            disabled: other.disabled.or(self.disabled),
            placeholder: other.placeholder.clone().or_else(|| self.placeholder.clone()),
            title: other.title.clone().or_else(|| self.title.clone()),
            legend: other.legend.clone().or_else(|| self.legend.clone()),
            attrs,
        }
    }

    /// Returns the attributes handed to the control.
    ///
    /// Wrapper-only options are left out; `name` and `value` are handled
    /// by the control renderers themselves.
    pub fn control_attrs(&self) -> ControlAttrs {
        let mut attrs = ControlAttrs::new();
        for (key, value) in &self.attrs {
            attrs.set(key, value);
        }
        if let Some(class) = &self.class {
            attrs.set("class", class);
        }
        if let Some(id) = &self.id {
            attrs.set("id", id);
        }
        if let Some(placeholder) = &self.placeholder {
            attrs.set("placeholder", placeholder);
        }
        if self.is_disabled() {
            attrs.set("disabled", "disabled");
        }
        attrs
    }
}

/// Options of the `<form>` element rendered by [`form_for`](crate::form_for).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    /// Form action URL.
    pub action: String,
    /// HTTP method; anything but GET and POST is tunnelled through `_method`.
    pub method: String,
    /// Form id.
    pub id: Option<String>,
    /// Form class.
    pub class: Option<String>,
    /// Whether to send `multipart/form-data` (needed by file fields).
    pub multipart: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            id: None,
            class: None,
            multipart: false,
        }
    }
}

impl FormOptions {
    /// Creates options posting to `action`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the form id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the form class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sends the form as `multipart/form-data`.
    #[must_use]
    pub fn multipart(mut self) -> Self {
        self.multipart = true;
        self
    }
}
