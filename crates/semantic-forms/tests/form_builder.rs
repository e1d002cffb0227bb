//! Tests for the markup every wrapped field shares.

mod common;
use common::*;

use semantic_forms::{
    form_for, Collection, FieldKind, FieldOptions, FormBuilder, FormConfig, FormError,
    FormOptions, MessageCatalog, RenderContext,
};

// =============================================================================
// Wrapper
// =============================================================================

#[test]
fn wrapper_has_field_id() {
    let ctx = bare_context();
    let user = user();
    let opts = FieldOptions::new();
    assert!(text_field(&ctx, &user, "name", &opts).contains(r#"id="wrapper_user_name""#));
    assert!(text_field(&ctx, &user, "bio", &opts).contains(r#"id="wrapper_user_bio""#));
}

#[test]
fn wrapper_has_control_wrapper_class() {
    let ctx = bare_context();
    let user = user();
    let html = text_field(&ctx, &user, "name", &FieldOptions::new());
    assert!(html.contains(r#"class="control_wrapper text_field""#));
}

#[test]
fn wrapper_marks_required_attribute() {
    let ctx = bare_context();
    let user = user();
    let html = text_field(&ctx, &user, "email", &FieldOptions::new());
    assert!(html.contains("control_wrapper text_field required"));
}

#[test]
fn valid_attribute_has_no_error_class() {
    let ctx = bare_context();
    let user = user();
    assert!(!text_field(&ctx, &user, "name", &FieldOptions::new()).contains("field_with_error"));
}

#[test]
fn invalid_attribute_has_error_class() {
    let ctx = bare_context();
    let user = user_with_errors(&[("name", "Name is required")]);
    assert!(text_field(&ctx, &user, "name", &FieldOptions::new()).contains("field_with_error"));
}

#[test]
fn wrapper_class_follows_kind() {
    let ctx = english_context();
    let user = user();
    let f = FormBuilder::new(&ctx, "user", &user);
    let opts = FieldOptions::new();
    let cases = [
        (f.password_field("password", &opts), FieldKind::PasswordField),
        (f.file_field("avatar", &opts), FieldKind::FileField),
        (f.text_area("bio", &opts), FieldKind::TextArea),
        (f.url_field("homepage", &opts), FieldKind::UrlField),
        (f.search_field("q", &opts), FieldKind::SearchField),
        (f.phone_field("phone", &opts), FieldKind::PhoneField),
    ];
    for (html, kind) in cases {
        assert!(
            html.contains(&format!("control_wrapper {kind}")),
            "{kind} missing from {html}"
        );
    }
}

// =============================================================================
// Error and hint
// =============================================================================

#[test]
fn error_absent_for_valid_attribute() {
    let ctx = bare_context();
    let user = user();
    assert!(!text_field(&ctx, &user, "name", &FieldOptions::new()).contains("error_message"));
}

#[test]
fn error_shows_message() {
    let ctx = bare_context();
    let user = user_with_errors(&[("name", "Name is required")]);
    let html = text_field(&ctx, &user, "name", &FieldOptions::new());
    assert!(html.contains(r#"<span class="error_message field_hint">Name is required</span>"#));
}

#[test]
fn error_shows_first_message_only() {
    let ctx = bare_context();
    let user = user_with_errors(&[("name", "Name is required"), ("name", "Second error")]);
    let html = text_field(&ctx, &user, "name", &FieldOptions::new());
    assert!(html.contains("Name is required"));
    assert!(!html.contains("Second error"));
}

#[test]
fn hint_absent_without_option() {
    let ctx = bare_context();
    let user = user();
    assert!(!text_field(&ctx, &user, "name", &FieldOptions::new()).contains("field_hint"));
}

#[test]
fn hint_present_with_option() {
    let ctx = bare_context();
    let user = user();
    let html = text_field(&ctx, &user, "name", &FieldOptions::new().hint("Some hint"));
    assert!(html.contains(r#"<span class="field_hint">Some hint</span>"#));
}

#[test]
fn hint_replaced_by_error() {
    let ctx = bare_context();
    let user = user_with_errors(&[("name", "Error message")]);
    let html = text_field(&ctx, &user, "name", &FieldOptions::new().hint("Some hint"));
    assert!(!html.contains("Some hint"));
    assert!(html.contains(">Error message</span>"));
}

// =============================================================================
// Label
// =============================================================================

#[test]
fn label_falls_back_to_translation_key() {
    let ctx = bare_context();
    let user = user();
    let html = text_field(&ctx, &user, "name", &FieldOptions::new());
    assert!(html.contains("Translation missing: en, name: "));
}

#[test]
fn label_targets_control() {
    let ctx = bare_context();
    let user = user();
    let html = text_field(&ctx, &user, "name", &FieldOptions::new());
    assert!(html.contains(r#"for="user_name""#));
    assert!(html.contains(r#"id="user_name""#));
}

#[test]
fn label_marks_required_attribute() {
    let ctx = bare_context();
    let user = user();
    let html = text_field(&ctx, &user, "email", &FieldOptions::new());
    assert!(html.contains("<abbr>*</abbr></label>"));
}

#[test]
fn label_uses_explicit_text_and_class() {
    let ctx = english_context();
    let user = user();
    let html = text_field(
        &ctx,
        &user,
        "email",
        &FieldOptions::new().label("Your email").label_class("big bold"),
    );
    assert!(html.contains("Your email"));
    assert!(html.contains(r#"class="big bold required""#));
    assert!(!html.contains("Email: "));
}

#[test]
fn label_uses_configured_marker_and_suffix() {
    let ctx = english_context().with_config(
        FormConfig::new().required_marker("(required)").label_suffix(""),
    );
    let user = user();
    let html = text_field(&ctx, &user, "email", &FieldOptions::new());
    assert!(html.contains("<abbr>(required)</abbr>"));
    assert!(html.contains(">Email <abbr>"));
}

#[test]
fn label_comes_from_catalog() {
    let catalog = MessageCatalog::from_json("nl", r#"{"nl": {"name": "naam"}}"#).unwrap();
    let ctx = RenderContext::new(catalog);
    let user = user();
    let html = text_field(&ctx, &user, "name", &FieldOptions::new());
    assert!(html.contains("Naam: "));
}

// =============================================================================
// Controls
// =============================================================================

#[test]
fn html5_fields_force_type_and_size() {
    let ctx = english_context();
    let user = user();
    let html = FormBuilder::new(&ctx, "user", &user)
        .email_field("email", &FieldOptions::new().attr("size", "5"));
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"size="30""#));
    assert!(!html.contains(r#"size="5""#));
}

#[test]
fn radio_group_renders_one_input_per_value() {
    let ctx = english_context();
    let user = user();
    let roles = ["user", "admin"];
    let html = FormBuilder::new(&ctx, "user", &user).radio_buttons(
        "role",
        Collection::Values(&roles),
        &FieldOptions::new(),
    );
    assert_eq!(html.matches(r#"type="radio""#).count(), 2);
    assert_eq!(html.matches(r#"name="user[role]""#).count(), 2);
    assert!(html.contains(">administrator</label>"));
    assert!(html.contains("control_wrapper radio_buttons"));
}

#[test]
fn check_box_label_after_control() {
    let ctx = english_context();
    let user = user().set("accepted_terms", "1");
    let html = FormBuilder::new(&ctx, "user", &user)
        .check_box("accepted_terms", &FieldOptions::new().label("I agree"));
    let input = html.find(r#"type="checkbox""#).unwrap();
    let label = html.find(">I agree</label>").unwrap();
    assert!(input < label);
    assert!(html.contains(r#"checked="checked""#));
}

#[test]
fn disabled_and_required_overrides() {
    let ctx = english_context();
    let user = user();
    let html = text_field(
        &ctx,
        &user,
        "email",
        &FieldOptions::new().required(false).disabled(),
    );
    assert!(html.contains(r#"class="control_wrapper text_field disabled""#));
    assert!(!html.contains("<abbr>"));
}

// =============================================================================
// Submit, fieldset and form
// =============================================================================

#[test]
fn submit_defaults() {
    let ctx = english_context();
    let user = user();
    let html = FormBuilder::new(&ctx, "user", &user).submit(None, &FieldOptions::new());
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains(r#"name="commit""#));
    assert!(html.contains("<span>Save</span></button>"));
}

#[test]
fn fieldset_requires_block() {
    let ctx = english_context();
    let user = user();
    let err = FormBuilder::new(&ctx, "user", &user)
        .fieldset(&FieldOptions::new(), None)
        .unwrap_err();
    assert!(matches!(err, FormError::MissingBlock(_)));
    assert_eq!(err.to_string(), "no block given to fieldset");
}

#[test]
fn form_wraps_fields() {
    let ctx = english_context();
    let mut user = user().set("name", "Ada");
    assert!(!user.validate());

    let html = form_for(
        &ctx,
        "user",
        &user,
        &FormOptions::new("/users").id("new_user"),
        Some(&|f: &FormBuilder<'_>| {
            [
                f.error_messages(),
                f.text_field("name", &FieldOptions::new()),
                f.text_field("email", &FieldOptions::new()),
                f.submit(None, &FieldOptions::new()),
            ]
            .concat()
        }),
    )
    .unwrap();

    assert!(html.starts_with("<form"));
    assert!(html.ends_with("</form>"));
    assert!(html.contains(r#"action="/users""#));
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(r#"id="error_messages_user""#));
    assert!(html.contains("<li>can"));
    assert!(html.contains(r#"class="control_wrapper text_field field_with_error required""#));
    assert!(!html.contains("_method"));
}
