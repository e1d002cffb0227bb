//! Declared validation rules.
//!
//! The form builder never runs these itself; it inspects them to decide
//! whether a field is required. [`ValidationRules::validate`] is provided
//! so a [`Record`](crate::Record) can fill its own error collection.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ValidationErrors};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// The category of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// The value must not be blank.
    Presence,
    /// The value length is bounded.
    Length,
    /// The value must match a pattern.
    Format,
    /// The value must be a number, optionally within bounds.
    Numericality,
}

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> std::result::Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;

    /// Returns the rule category, used for presence introspection.
    fn kind(&self) -> ValidationKind;
}

/// Validator that requires a non-blank value.
#[derive(Debug, Clone)]
pub struct PresenceValidator {
    message: String,
}

impl PresenceValidator {
    /// Creates a new PresenceValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "can't be blank".to_string(),
        }
    }

    /// Creates a new PresenceValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for PresenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PresenceValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidationKind {
        ValidationKind::Presence
    }
}

/// Validator that bounds the length of a value in characters.
#[derive(Debug, Clone)]
pub struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
    message: String,
}

impl LengthValidator {
    /// Requires at least `min` characters.
    pub fn minimum(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
            message: format!("is too short (minimum is {min} characters)"),
        }
    }

    /// Allows at most `max` characters.
    pub fn maximum(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
            message: format!("is too long (maximum is {max} characters)"),
        }
    }

    /// Requires a length within `min..=max`.
    pub fn within(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            message: format!("must be between {min} and {max} characters"),
        }
    }

    /// Replaces the error message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator for LengthValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        let len = value.chars().count();
        if self.min.is_some_and(|min| len < min) || self.max.is_some_and(|max| len > max) {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidationKind {
        ValidationKind::Length
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct FormatValidator {
    pattern: Regex,
    message: String,
}

impl FormatValidator {
    /// Creates a new FormatValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Validates email addresses.
    pub fn email() -> Self {
        Self {
            pattern: EMAIL_PATTERN.clone(),
            message: "is not a valid email address".to_string(),
        }
    }
}

impl Validator for FormatValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidationKind {
        ValidationKind::Format
    }
}

/// Validator for numeric values with optional bounds.
#[derive(Debug, Clone)]
pub struct NumericalityValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl NumericalityValidator {
    /// Creates a new NumericalityValidator with min and max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be greater than or equal to {min}"),
            (None, Some(max)) => format!("must be less than or equal to {max}"),
            (None, None) => "is not a number".to_string(),
        };
        Self { min, max, message }
    }
}

impl Validator for NumericalityValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        let num: f64 = value
            .trim()
            .parse()
            .map_err(|_| "is not a number".to_string())?;

        if self.min.is_some_and(|min| num < min) || self.max.is_some_and(|max| num > max) {
            return Err(self.message.clone());
        }

        Ok(())
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidationKind {
        ValidationKind::Numericality
    }
}

/// Validation rules declared per field.
#[derive(Default)]
pub struct ValidationRules {
    rules: BTreeMap<String, Vec<Box<dyn Validator>>>,
}

impl std::fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.rules.iter().map(|(field, validators)| {
                let kinds: Vec<ValidationKind> = validators.iter().map(|v| v.kind()).collect();
                (field, kinds)
            }))
            .finish()
    }
}

impl ValidationRules {
    /// Creates an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a validator on a field.
    #[must_use]
    pub fn rule(mut self, field: &str, validator: impl Validator + 'static) -> Self {
        self.add(field, validator);
        self
    }

    /// Declares a presence rule on each of the given fields.
    #[must_use]
    pub fn presence_of(mut self, fields: &[&str]) -> Self {
        for field in fields {
            self.add(field, PresenceValidator::new());
        }
        self
    }

    /// Declares a validator on a field.
    pub fn add(&mut self, field: &str, validator: impl Validator + 'static) {
        self.rules
            .entry(field.to_string())
            .or_default()
            .push(Box::new(validator));
    }

    /// Returns the validators declared on a field.
    pub fn validators_on(&self, field: &str) -> Vec<&dyn Validator> {
        self.rules
            .get(field)
            .map(|v| v.iter().map(AsRef::as_ref).collect())
            .unwrap_or_default()
    }

    /// Runs every rule against the values returned by `lookup`.
    ///
    /// Blank values are only checked by presence rules.
    pub fn validate<F>(&self, lookup: F) -> ValidationErrors
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = ValidationErrors::new();
        for (field, validators) in &self.rules {
            let value = lookup(field).unwrap_or_default();
            let blank = value.trim().is_empty();
            for validator in validators {
                if blank && validator.kind() != ValidationKind::Presence {
                    continue;
                }
                if let Err(msg) = validator.validate(&value) {
                    errors.add(field, msg);
                }
            }
        }
        errors
    }
}
