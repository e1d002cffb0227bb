//! Renders a sign-up form to stdout.
//!
//! ```text
//! cargo run -p semantic-forms --example signup_form -- --verbose --invalid
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use semantic_forms::{
    form_for, Choice, Collection, FieldOptions, FormBuilder, FormConfig, FormOptions,
    LengthValidator, MessageCatalog, PresenceValidator, Record, RenderContext, ValidationRules,
};

const CATALOG: &str = r#"{
    "en": {
        "name": "full name",
        "email": "email",
        "password": "password",
        "country": "country",
        "role": "role",
        "user": "regular user",
        "admin": "administrator",
        "newsletter": "send me the newsletter",
        "save": "Create account"
    }
}"#;

/// Render a sign-up form with the semantic form builder.
#[derive(Parser)]
#[command(name = "signup_form")]
#[command(about, long_about = None)]
struct Cli {
    /// Translation catalog (JSON, optionally rooted at the locale).
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Rendering configuration (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale of the translation catalog.
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Validate the empty submission first so errors are shown.
    #[arg(long)]
    invalid: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = match &cli.translations {
        Some(path) => MessageCatalog::from_json(&cli.locale, &std::fs::read_to_string(path)?)?,
        None => MessageCatalog::from_json(&cli.locale, CATALOG)?,
    };
    let config = match &cli.config {
        Some(path) => FormConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => FormConfig::default(),
    };
    info!(locale = %cli.locale, entries = catalog.len(), "loaded translations");

    let ctx = RenderContext::new(catalog)
        .with_config(config)
        .with_error_decorator(|html, _| format!(r#"<div class="field_error">{html}</div>"#));

    let rules = ValidationRules::new()
        .presence_of(&["name", "email"])
        .rule("password", LengthValidator::minimum(8))
        .rule("country", PresenceValidator::with_message("^Pick a country"));
    let mut user = Record::new("user").with_rules(rules).set("role", "user");
    if cli.invalid {
        user.validate();
    }

    let countries = [
        Choice::new("be", "Belgium"),
        Choice::new("fr", "France"),
        Choice::new("nl", "Netherlands"),
    ];
    let roles = ["user", "admin"];

    let html = form_for(
        &ctx,
        "user",
        &user,
        &FormOptions::new("/users").id("new_user").class("signup"),
        Some(&|f: &FormBuilder<'_>| {
            let account = f
                .fieldset(
                    &FieldOptions::new().legend("Account"),
                    Some(&|f: &FormBuilder<'_>| {
                        [
                            f.text_field("name", &FieldOptions::new()),
                            f.email_field(
                                "email",
                                &FieldOptions::new().placeholder("you@example.com"),
                            ),
                            f.password_field(
                                "password",
                                &FieldOptions::new().hint("At least 8 characters"),
                            ),
                        ]
                        .concat()
                    }),
                )
                .unwrap_or_default();

            [
                f.error_messages(),
                account,
                f.select("country", &countries, &FieldOptions::new()),
                f.radio_buttons("role", Collection::Values(&roles), &FieldOptions::new()),
                f.check_box("newsletter", &FieldOptions::new()),
                f.submit(None, &FieldOptions::new()),
            ]
            .concat()
        }),
    )?;

    println!("{html}");
    Ok(())
}
