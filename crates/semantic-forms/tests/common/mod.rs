#![allow(dead_code)]

use semantic_forms::{
    FieldOptions, FormBuilder, MessageCatalog, Record, RenderContext, ValidationRules,
};

/// A context whose catalog is empty, so labels show the missing-translation
/// placeholder.
pub fn bare_context() -> RenderContext {
    RenderContext::default()
}

/// A context with English labels for the user fields.
pub fn english_context() -> RenderContext {
    RenderContext::new(
        MessageCatalog::new("en")
            .with("name", "name")
            .with("email", "email")
            .with("bio", "biography")
            .with("age", "age")
            .with("user", "user")
            .with("admin", "administrator")
            .with("save", "Save"),
    )
}

/// A new user whose email is required.
pub fn user() -> Record {
    Record::new("user").with_rules(ValidationRules::new().presence_of(&["email"]))
}

/// A user with errors on the given fields.
pub fn user_with_errors(errors: &[(&str, &str)]) -> Record {
    let mut user = user();
    for (field, message) in errors {
        user.add_error(field, *message);
    }
    user
}

pub fn text_field(
    ctx: &RenderContext,
    user: &Record,
    field: &str,
    options: &FieldOptions,
) -> String {
    FormBuilder::new(ctx, "user", user).text_field(field, options)
}
