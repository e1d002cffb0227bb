//! The object a form edits.

use std::collections::BTreeMap;

use crate::error::ValidationErrors;
use crate::validation::{ValidationKind, ValidationRules, Validator};

/// A model instance bound to a form.
///
/// The builder only reads from it: current values, the error collection
/// and the declared validators used to decide whether a field is required.
pub trait FormObject {
    /// Snake-case model name, e.g. `user`.
    fn model_name(&self) -> &str;

    /// Errors collected by the last validation.
    fn errors(&self) -> &ValidationErrors;

    /// Validators declared on a field.
    fn validators_on(&self, field: &str) -> Vec<&dyn Validator>;

    /// Current value of a field as form text.
    fn value(&self, field: &str) -> Option<String>;

    /// Current values of a multi-valued field.
    fn values(&self, field: &str) -> Vec<String> {
        self.value(field).into_iter().collect()
    }

    /// Returns whether a presence rule is declared on the field.
    fn is_required(&self, field: &str) -> bool {
        self.validators_on(field)
            .iter()
            .any(|v| v.kind() == ValidationKind::Presence)
    }
}

/// A field value held by a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single value.
    Single(String),
    /// Several values, e.g. the ids picked with `check_boxes`.
    Many(Vec<String>),
}

/// A generic in-memory model instance.
///
/// # Example
/// ```
/// use semantic_forms::{FormObject, Record, ValidationRules};
///
/// let mut user = Record::new("user")
///     .with_rules(ValidationRules::new().presence_of(&["email"]))
///     .set("name", "Ada");
///
/// assert!(!user.validate());
/// assert_eq!(user.errors().first_message("email"), Some("can't be blank"));
/// assert_eq!(user.value("name").as_deref(), Some("Ada"));
/// ```
#[derive(Debug, Default)]
pub struct Record {
    name: String,
    values: BTreeMap<String, FieldValue>,
    rules: ValidationRules,
    errors: ValidationErrors,
}

impl Record {
    /// Creates an empty record of the given model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Replaces the validation rules.
    #[must_use]
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Sets a single value.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets several values.
    #[must_use]
    pub fn set_many<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.insert(
            field.to_string(),
            FieldValue::Many(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Sets a single value in place.
    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        self.values
            .insert(field.to_string(), FieldValue::Single(value.into()));
    }

    /// Mutable access to the error collection.
    pub fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    /// Adds an error to a field.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Runs the declared rules, replacing the error collection.
    ///
    /// Returns whether the record is valid.
    pub fn validate(&mut self) -> bool {
        let errors = self.rules.validate(|field| self.value(field));
        self.errors = errors;
        self.errors.is_empty()
    }
}

impl FormObject for Record {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn validators_on(&self, field: &str) -> Vec<&dyn Validator> {
        self.rules.validators_on(field)
    }

    fn value(&self, field: &str) -> Option<String> {
        match self.values.get(field)? {
            FieldValue::Single(v) => Some(v.clone()),
            FieldValue::Many(v) => Some(v.join(",")),
        }
    }

    fn values(&self, field: &str) -> Vec<String> {
        match self.values.get(field) {
            Some(FieldValue::Single(v)) => vec![v.clone()],
            Some(FieldValue::Many(v)) => v.clone(),
            None => Vec::new(),
        }
    }
}
