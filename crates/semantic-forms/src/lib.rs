//! # semantic-forms
//!
//! A form builder that wraps every field in the same semantic markup: a
//! wrapper `<div>` carrying state classes, a label, the control, and either
//! the field's first error or its hint.
//!
//! This crate provides:
//! - A [`FormBuilder`] with one helper per control kind
//! - Base controls for text, selects, check boxes, radios and dates
//! - A [`FormObject`] trait and an in-memory [`Record`] to bind forms to
//! - Translation lookup for labels and button text
//! - Validation rules, used to mark required fields
//!
//! ## Quick Start
//!
//! ```rust
//! use semantic_forms::{
//!     form_for, FieldOptions, FormBuilder, FormOptions, MessageCatalog, Record,
//!     RenderContext, ValidationRules,
//! };
//!
//! let catalog = MessageCatalog::new("en")
//!     .with("name", "name")
//!     .with("email", "email")
//!     .with("save", "Sign up");
//! let ctx = RenderContext::new(catalog);
//!
//! let mut user = Record::new("user")
//!     .with_rules(ValidationRules::new().presence_of(&["email"]))
//!     .set("name", "Ada");
//! user.validate();
//!
//! let html = form_for(
//!     &ctx,
//!     "user",
//!     &user,
//!     &FormOptions::new("/users"),
//!     Some(&|f: &FormBuilder<'_>| {
//!         [
//!             f.text_field("name", &FieldOptions::new().hint("As shown on your profile")),
//!             f.email_field("email", &FieldOptions::new()),
//!             f.submit(None, &FieldOptions::new()),
//!         ]
//!         .concat()
//!     }),
//! )
//! .unwrap();
//!
//! assert!(html.contains(r#"class="control_wrapper email_field field_with_error required""#));
//! assert!(html.contains("<abbr>*</abbr>"));
//! assert!(html.contains("As shown on your profile"));
//! ```
//!
//! ## Field kinds
//!
//! Each helper sets a wrapper class named after itself:
//! - `text_field`, `password_field`, `file_field`, `text_area`
//! - `email_field`, `url_field`, `phone_field`, `search_field`, `numeric_field`
//! - `select`, `collection_select`, `grouped_collection_select`, `datetime_select`
//! - `check_box`, `radio_button`, `radio_buttons`, `check_boxes`
//!
//! Fields without errors never go through the [`ErrorDecorator`]; fields
//! with errors have their control passed to it, see
//! [`RenderContext::with_error_decorator`].

mod builder;
mod config;
pub mod controls;
mod error;
mod helper;
mod i18n;
mod kind;
mod model;
mod options;
pub mod validation;

pub use builder::FormBuilder;
pub use config::FormConfig;
pub use error::{FormError, Result, ValidationErrors};
pub use helper::{form_for, ErrorDecorator, RenderContext};
pub use i18n::{MessageCatalog, Translator};
pub use kind::{Choice, Collection, Control, FieldKind, LabelPosition, OptionGroup};
pub use model::{FieldValue, FormObject, Record};
pub use options::{FieldOptions, FormOptions};
pub use validation::{
    FormatValidator, LengthValidator, NumericalityValidator, PresenceValidator, ValidationKind,
    ValidationRules, Validator,
};
