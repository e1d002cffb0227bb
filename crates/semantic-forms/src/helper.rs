//! Render context and the form entry helper.

use std::sync::{Arc, LazyLock};

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Form};
use regex::{Captures, Regex};
use tracing::debug;

use crate::builder::FormBuilder;
use crate::config::FormConfig;
use crate::controls::{ControlAttrs, TextInput, Widget};
use crate::error::{FormError, Result};
use crate::i18n::{MessageCatalog, Translator};
use crate::model::FormObject;
use crate::options::FormOptions;

static CONTROL_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<input\b[^>]*/>|<select\b.*?</select>|<textarea\b.*?</textarea>").unwrap()
});

/// Applied to each visible control of a field that has errors.
///
/// Receives one control tag and the field's messages and returns the
/// markup to use instead. Hidden inputs and labels never reach it.
pub type ErrorDecorator = Arc<dyn Fn(&str, &[String]) -> String + Send + Sync>;

/// Everything a builder needs besides the bound object.
pub struct RenderContext {
    /// Markup settings.
    pub config: FormConfig,
    translator: Box<dyn Translator>,
    error_decorator: ErrorDecorator,
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("config", &self.config)
            .field("locale", &self.translator.locale())
            .finish_non_exhaustive()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(MessageCatalog::default())
    }
}

impl RenderContext {
    /// Creates a context with the default configuration and a decorator
    /// that leaves controls unchanged.
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self {
            config: FormConfig::default(),
            translator: Box::new(translator),
            error_decorator: Arc::new(|html, _| html.to_string()),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the error decorator.
    #[must_use]
    pub fn with_error_decorator<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        self.error_decorator = Arc::new(decorator);
        self
    }

    /// Looks up a translation.
    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// Runs the error decorator on every visible control tag in `html`.
    ///
    /// Hidden inputs, labels and surrounding markup are kept as they are.
    pub fn decorate(&self, html: &str, errors: &[String]) -> String {
        CONTROL_TAGS
            .replace_all(html, |caps: &Captures<'_>| {
                let tag = &caps[0];
                if tag.starts_with(r#"<input type="hidden""#) {
                    tag.to_string()
                } else {
                    (self.error_decorator)(tag, errors)
                }
            })
            .into_owned()
    }

    /// Creates a builder for `object` under `object_name`.
    pub fn builder<'a>(&'a self, object_name: &str, object: &'a dyn FormObject) -> FormBuilder<'a> {
        FormBuilder::new(self, object_name, object)
    }
}

/// Renders a `<form>` whose fields are produced by a [`FormBuilder`].
///
/// Methods other than GET and POST are sent as POST with a hidden
/// `_method` input naming the real one.
///
/// # Errors
///
/// Returns [`FormError::MissingBlock`] when `block` is `None`.
///
/// # Example
/// ```
/// use semantic_forms::{form_for, FieldOptions, FormOptions, Record, RenderContext};
///
/// let ctx = RenderContext::default();
/// let user = Record::new("user");
/// let html = form_for(
///     &ctx,
///     "user",
///     &user,
///     &FormOptions::new("/users"),
///     Some(&|f| f.text_field("name", &FieldOptions::new().label("Name"))),
/// )
/// .unwrap();
///
/// assert!(html.contains(r#"id="wrapper_user_name""#));
/// ```
pub fn form_for(
    ctx: &RenderContext,
    object_name: &str,
    object: &dyn FormObject,
    options: &FormOptions,
    block: Option<&dyn Fn(&FormBuilder<'_>) -> String>,
) -> Result<String> {
    let block = block.ok_or(FormError::MissingBlock("form_for"))?;
    debug!(object = object_name, action = %options.action, "rendering form");

    let builder = ctx.builder(object_name, object);
    let content = block(&builder);

    let method = options.method.to_lowercase();
    let (form_method, tunnelled) = match method.as_str() {
        "get" | "post" => (method.as_str(), None),
        other => ("post", Some(other)),
    };

    let mut form = Element::<Form>::new()
        .attr("action", options.action.as_str())
        .attr("method", form_method)
        .attr("accept-charset", "UTF-8");
    if let Some(id) = &options.id {
        form = form.attr("id", id.as_str());
    }
    if let Some(class) = &options.class {
        form = form.class(class.as_str());
    }
    if options.multipart {
        form = form.attr("enctype", "multipart/form-data");
    }
    if let Some(real_method) = tunnelled {
        let hidden = TextInput::hidden().render("_method", Some(real_method), &ControlAttrs::new());
        form = form.child::<Div, _>(|d| {
            d.attr("style", "margin:0;padding:0;display:inline")
                .raw(hidden.as_str())
        });
    }

    Ok(form.raw(content.as_str()).render())
}
