//! Field kinds and the controls they render.

use std::fmt;

use crate::model::FormObject;

/// The category of control a field renders as.
///
/// The tag doubles as the wrapper's CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text input.
    TextField,
    /// Password input; the value is never echoed.
    PasswordField,
    /// File upload input.
    FileField,
    /// Multi-line `<textarea>`.
    TextArea,
    /// `<select>` over explicit choices.
    Select,
    /// `<select>` over a collection of values or records.
    CollectionSelect,
    /// `<select>` with `<optgroup>`s.
    GroupedCollectionSelect,
    /// Year, month, day, hour and minute selects.
    DatetimeSelect,
    /// `type="email"` input.
    EmailField,
    /// `type="url"` input.
    UrlField,
    /// `type="tel"` input.
    PhoneField,
    /// `type="search"` input.
    SearchField,
    /// `type="number"` input.
    NumericField,
    /// Boolean check box with a hidden unchecked value.
    CheckBox,
    /// One radio input for a given value.
    RadioButton,
    /// A radio input per collection entry.
    RadioButtons,
    /// A check box per collection entry, submitted as a list.
    CheckBoxes,
}

/// Where the label goes relative to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    /// Label, then control.
    Before,
    /// Control, then label.
    After,
    /// No field label; each option carries its own.
    None,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::TextField,
        Self::PasswordField,
        Self::FileField,
        Self::TextArea,
        Self::Select,
        Self::CollectionSelect,
        Self::GroupedCollectionSelect,
        Self::DatetimeSelect,
        Self::EmailField,
        Self::UrlField,
        Self::PhoneField,
        Self::SearchField,
        Self::NumericField,
        Self::CheckBox,
        Self::RadioButton,
        Self::RadioButtons,
        Self::CheckBoxes,
    ];

    /// The helper name, used as the wrapper class.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextField => "text_field",
            Self::PasswordField => "password_field",
            Self::FileField => "file_field",
            Self::TextArea => "text_area",
            Self::Select => "select",
            Self::CollectionSelect => "collection_select",
            Self::GroupedCollectionSelect => "grouped_collection_select",
            Self::DatetimeSelect => "datetime_select",
            Self::EmailField => "email_field",
            Self::UrlField => "url_field",
            Self::PhoneField => "phone_field",
            Self::SearchField => "search_field",
            Self::NumericField => "numeric_field",
            Self::CheckBox => "check_box",
            Self::RadioButton => "radio_button",
            Self::RadioButtons => "radio_buttons",
            Self::CheckBoxes => "check_boxes",
        }
    }

    /// The forced `type` of the HTML5 text input kinds.
    pub const fn html5_type(self) -> Option<&'static str> {
        match self {
            Self::EmailField => Some("email"),
            Self::UrlField => Some("url"),
            Self::PhoneField => Some("tel"),
            Self::SearchField => Some("search"),
            Self::NumericField => Some("number"),
            _ => None,
        }
    }

    /// Where the field label is placed.
    pub const fn label_position(self) -> LabelPosition {
        match self {
            Self::CheckBox | Self::RadioButton => LabelPosition::After,
            Self::RadioButtons | Self::CheckBoxes => LabelPosition::None,
            _ => LabelPosition::Before,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Displayed text.
    pub text: String,
}

impl Choice {
    /// Creates a choice.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

impl From<(&str, &str)> for Choice {
    fn from((value, text): (&str, &str)) -> Self {
        Self::new(value, text)
    }
}

/// A labelled group of choices (`<optgroup>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    /// Group label.
    pub label: String,
    /// Choices in the group.
    pub choices: Vec<Choice>,
}

impl OptionGroup {
    /// Creates a group.
    pub fn new(label: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            label: label.into(),
            choices,
        }
    }
}

/// The options offered by a radio group, check box group or collection
/// select.
#[derive(Clone, Copy)]
pub enum Collection<'c> {
    /// Plain values; their text is looked up in the translator.
    Values(&'c [&'c str]),
    /// Model instances; value and text are read from the named fields.
    Records {
        /// The instances offered.
        items: &'c [&'c dyn FormObject],
        /// Field read for each option's value.
        value_method: &'c str,
        /// Field read for each option's text.
        text_method: &'c str,
    },
}

impl fmt::Debug for Collection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Self::Records {
                items,
                value_method,
                text_method,
            } => f
                .debug_struct("Records")
                .field("len", &items.len())
                .field("value_method", value_method)
                .field("text_method", text_method)
                .finish(),
        }
    }
}

impl<'c> Collection<'c> {
    /// A collection of model instances.
    pub fn records(
        items: &'c [&'c dyn FormObject],
        value_method: &'c str,
        text_method: &'c str,
    ) -> Self {
        Self::Records {
            items,
            value_method,
            text_method,
        }
    }

    /// Resolves the collection into choices, translating plain values with
    /// `translate`.
    pub fn choices(&self, translate: impl Fn(&str) -> String) -> Vec<Choice> {
        match self {
            Self::Values(values) => values
                .iter()
                .map(|value| Choice::new(*value, translate(*value)))
                .collect(),
            Self::Records {
                items,
                value_method,
                text_method,
            } => items
                .iter()
                .map(|item| {
                    Choice::new(
                        item.value(value_method).unwrap_or_default(),
                        item.value(text_method).unwrap_or_default(),
                    )
                })
                .collect(),
        }
    }
}

/// What a field renders: the kind plus whatever data the control needs.
///
/// Variants without data render from the bound value alone; see
/// [`FieldKind`] for what each one produces.
#[derive(Debug, Clone, Copy)]
pub enum Control<'c> {
    /// See [`FieldKind::TextField`].
    TextField,
    /// See [`FieldKind::PasswordField`].
    PasswordField,
    /// See [`FieldKind::FileField`].
    FileField,
    /// See [`FieldKind::TextArea`].
    TextArea,
    /// See [`FieldKind::DatetimeSelect`].
    DatetimeSelect,
    /// See [`FieldKind::EmailField`].
    EmailField,
    /// See [`FieldKind::UrlField`].
    UrlField,
    /// See [`FieldKind::PhoneField`].
    PhoneField,
    /// See [`FieldKind::SearchField`].
    SearchField,
    /// See [`FieldKind::NumericField`].
    NumericField,
    /// See [`FieldKind::CheckBox`].
    CheckBox,
    /// A single radio input with its value.
    RadioButton(&'c str),
    /// A select over these choices.
    Select(&'c [Choice]),
    /// A select over a collection.
    CollectionSelect(Collection<'c>),
    /// A select made of these groups.
    GroupedCollectionSelect(&'c [OptionGroup]),
    /// A radio group over a collection.
    RadioButtons(Collection<'c>),
    /// A check box group over a collection.
    CheckBoxes(Collection<'c>),
}

impl Control<'_> {
    /// The kind tag of this control.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::TextField => FieldKind::TextField,
            Self::PasswordField => FieldKind::PasswordField,
            Self::FileField => FieldKind::FileField,
            Self::TextArea => FieldKind::TextArea,
            Self::DatetimeSelect => FieldKind::DatetimeSelect,
            Self::EmailField => FieldKind::EmailField,
            Self::UrlField => FieldKind::UrlField,
            Self::PhoneField => FieldKind::PhoneField,
            Self::SearchField => FieldKind::SearchField,
            Self::NumericField => FieldKind::NumericField,
            Self::CheckBox => FieldKind::CheckBox,
            Self::RadioButton(_) => FieldKind::RadioButton,
            Self::Select(_) => FieldKind::Select,
            Self::CollectionSelect(_) => FieldKind::CollectionSelect,
            Self::GroupedCollectionSelect(_) => FieldKind::GroupedCollectionSelect,
            Self::RadioButtons(_) => FieldKind::RadioButtons,
            Self::CheckBoxes(_) => FieldKind::CheckBoxes,
        }
    }
}
