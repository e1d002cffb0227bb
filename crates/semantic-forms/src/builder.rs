//! The field wrapper decorator.
//!
//! Every field helper renders the same shape:
//!
//! ```text
//! <div id="wrapper_user_name"
//!      class="control_wrapper text_field [field_with_error] [required] [disabled]">
//!   <label for="user_name">Name:  <abbr>*</abbr></label>
//!   <input type="text" name="user[name]" id="user_name" size="30" />
//!   <span class="error_message field_hint">first error</span>
//!   or <span class="field_hint">hint</span>
//! </div>
//! ```
//!
//! Check boxes and single radio buttons put the label after the control.
//! Radio and check box groups give each option its own label.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Abbr, Button, Div, Fieldset, Label, Legend, Li, Span, Ul};
use tracing::debug;

use crate::controls::{
    field_id, field_name, option_id, CheckBox, CheckBoxTag, ControlAttrs, DatetimeSelect,
    RadioButton, Select, TextArea, TextInput, Widget,
};
use crate::error::{FormError, Result};
use crate::helper::RenderContext;
use crate::i18n::capitalize;
use crate::kind::{Choice, Collection, Control, FieldKind, LabelPosition, OptionGroup};
use crate::model::FormObject;
use crate::options::FieldOptions;

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

/// Renders wrapped fields for one bound object.
pub struct FormBuilder<'a> {
    object_name: String,
    object: &'a dyn FormObject,
    ctx: &'a RenderContext,
}

impl std::fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("model", &self.object.model_name())
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder for `object`, naming its inputs `<object_name>[...]`.
    pub fn new(ctx: &'a RenderContext, object_name: &str, object: &'a dyn FormObject) -> Self {
        Self {
            object_name: object_name.to_string(),
            object,
            ctx,
        }
    }

    /// The name inputs are scoped under.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// The bound object.
    pub fn object(&self) -> &'a dyn FormObject {
        self.object
    }

    /// Renders a field: wrapper, label, control and error or hint.
    ///
    /// This is the single entry point every field helper goes through.
    pub fn render(&self, field: &str, control: Control<'_>, options: &FieldOptions) -> String {
        let kind = control.kind();
        debug!(object = %self.object_name, field, %kind, "rendering field");

        let control_html = self.control(field, control, options);
        let control_html = match self.object.errors().get(field) {
            Some(errors) if !errors.is_empty() => self.ctx.decorate(&control_html, errors),
            _ => control_html,
        };
        let feedback = self.field_error_or_hint(field, options);

        let inner = match kind.label_position() {
            LabelPosition::Before => {
                self.field_label(field, options) + &control_html + &feedback
            }
            LabelPosition::After => {
                let options = match control {
                    Control::RadioButton(value) if options.label_for.is_none() => {
                        let target = non_empty(&options.id).map_or_else(
                            || option_id(&self.object_name, field, value),
                            str::to_string,
                        );
                        options.clone().label_for(target)
                    }
                    _ => options.clone(),
                };
                control_html + &self.field_label(field, &options) + &feedback
            }
            LabelPosition::None => {
                let label = if non_empty(&options.label).is_some() {
                    self.field_label(field, options)
                } else {
                    String::new()
                };
                label + &control_html + &feedback
            }
        };

        self.wrap(Some(kind), Some(field), options, &inner)
    }

    /// Wraps the block's markup in a field wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingBlock`] when `block` is `None`.
    pub fn field_wrapper(
        &self,
        kind: Option<FieldKind>,
        field: Option<&str>,
        block: Option<&dyn Fn(&FormBuilder<'_>) -> String>,
    ) -> Result<String> {
        let block = block.ok_or(FormError::MissingBlock("field_wrapper"))?;
        let content = block(self);
        Ok(self.wrap(kind, field, &FieldOptions::default(), &content))
    }

    /// Renders the label of a field.
    ///
    /// The text is the `label` option, or the translated field name
    /// (without an `_id` suffix) capitalised and followed by the label
    /// suffix. Required fields get the `required` class and a marker.
    pub fn field_label(&self, field: &str, options: &FieldOptions) -> String {
        let required = self.is_required(field, options);

        let mut classes: Vec<&str> = options
            .label_class
            .as_deref()
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default();
        if required {
            classes.push("required");
        }

        let text = non_empty(&options.label)
            .map_or_else(|| self.default_label(field), str::to_string);
        let target = non_empty(&options.label_for)
            .map_or_else(|| field_id(&self.object_name, field), str::to_string);

        let mut label = Element::<Label>::new().attr("for", target.as_str());
        if !classes.is_empty() {
            label = label.class(classes.join(" ").as_str());
        }
        label = label.text(text.as_str());
        if required {
            let marker = self.ctx.config.required_marker.as_str();
            label = label.text(" ").child::<Abbr, _>(|a| a.text(marker));
        }
        label.render()
    }

    /// Renders the first error of a field, if it has any.
    pub fn field_error(&self, field: &str) -> Option<String> {
        let message = self.object.errors().first_message(field)?;
        Some(html! { span.class("error_message field_hint") { #message } }.render())
    }

    /// Renders the hint option, if one is given.
    pub fn field_hint(&self, options: &FieldOptions) -> Option<String> {
        let hint = non_empty(&options.hint)?;
        Some(html! { span.class("field_hint") { #hint } }.render())
    }

    /// The field's first error, or else its hint, or else nothing.
    pub fn field_error_or_hint(&self, field: &str, options: &FieldOptions) -> String {
        self.field_error(field)
            .or_else(|| self.field_hint(options))
            .unwrap_or_default()
    }

    /// Renders every error of the bound object in a summary list.
    ///
    /// Returns an empty string when the object has no errors.
    pub fn error_messages(&self) -> String {
        let errors = self.object.errors();
        if errors.is_empty() {
            return String::new();
        }

        let messages: Vec<&str> = errors
            .all_errors()
            .into_iter()
            .map(|(_, message)| message.strip_prefix('^').unwrap_or(message))
            .collect();
        let id = format!("error_messages_{}", self.object_name);

        Element::<Div>::new()
            .attr("id", id.as_str())
            .class("error_messages")
            .child::<Ul, _>(|ul| {
                ul.children(messages.iter(), |message, li: Element<Li>| li.text(*message))
            })
            .render()
    }

    /// Renders a `<fieldset>` around the block's markup, with a
    /// `<legend>` when the `legend` option is given.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingBlock`] when `block` is `None`.
    pub fn fieldset(
        &self,
        options: &FieldOptions,
        block: Option<&dyn Fn(&FormBuilder<'_>) -> String>,
    ) -> Result<String> {
        let block = block.ok_or(FormError::MissingBlock("fieldset"))?;
        debug!(object = %self.object_name, legend = ?options.legend, "rendering fieldset");
        let content = block(self);

        let mut fieldset = Element::<Fieldset>::new();
        if let Some(class) = non_empty(&options.class) {
            fieldset = fieldset.class(class);
        }
        if let Some(id) = non_empty(&options.id) {
            fieldset = fieldset.attr("id", id);
        }
        if let Some(legend) = non_empty(&options.legend) {
            fieldset = fieldset.child::<Legend, _>(|l| l.text(legend));
        }
        Ok(fieldset.raw(content.as_str()).render())
    }

    /// Renders a submit button.
    ///
    /// The text defaults to the translation of the configured save key and
    /// always sits in an inner `<span>`, which carries the `title` option.
    /// The button is named `commit` unless the `name` option says otherwise.
    pub fn submit(&self, text: Option<&str>, options: &FieldOptions) -> String {
        let config = &self.ctx.config;
        let text = text
            .filter(|t| !t.trim().is_empty())
            .map_or_else(|| self.ctx.translate(&config.save_key), str::to_string);
        let name = non_empty(&options.name).unwrap_or(config.submit_name.as_str());

        let mut button = Element::<Button>::new();
        if let Some(class) = non_empty(&options.class) {
            button = button.class(class);
        }
        if let Some(id) = non_empty(&options.id) {
            button = button.attr("id", id);
        }
        button = button.attr("name", name).attr("type", "submit");
        if let Some(value) = &options.value {
            button = button.attr("value", value.as_str());
        }
        if options.is_disabled() {
            button = button.attr("disabled", "disabled");
        }

        let title = non_empty(&options.title);
        button
            .child::<Span, _>(|span| match title {
                Some(title) => span.attr("title", title).text(text.as_str()),
                None => span.text(text.as_str()),
            })
            .render()
    }

    /// A plain hidden input; hidden fields are never wrapped.
    pub fn hidden_field(&self, field: &str, options: &FieldOptions) -> String {
        let (name, value, attrs) =
            self.control_parts(field, options, field_id(&self.object_name, field));
        TextInput::hidden().render(&name, value.as_deref(), &attrs)
    }

    /// A wrapped text input.
    pub fn text_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::TextField, options)
    }

    /// A wrapped password input; the current value is never echoed.
    pub fn password_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::PasswordField, options)
    }

    /// A wrapped file input.
    pub fn file_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::FileField, options)
    }

    /// A wrapped text area.
    pub fn text_area(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::TextArea, options)
    }

    /// A wrapped date and time picker made of five selects.
    pub fn datetime_select(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::DatetimeSelect, options)
    }

    /// A wrapped `type="email"` input.
    pub fn email_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::EmailField, options)
    }

    /// A wrapped `type="url"` input.
    pub fn url_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::UrlField, options)
    }

    /// A wrapped `type="tel"` input.
    pub fn phone_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::PhoneField, options)
    }

    /// Same as [`FormBuilder::phone_field`].
    pub fn telephone_field(&self, field: &str, options: &FieldOptions) -> String {
        self.phone_field(field, options)
    }

    /// A wrapped `type="search"` input.
    pub fn search_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::SearchField, options)
    }

    /// A wrapped `type="number"` input.
    pub fn numeric_field(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::NumericField, options)
    }

    /// A wrapped check box, labelled after the box.
    pub fn check_box(&self, field: &str, options: &FieldOptions) -> String {
        self.render(field, Control::CheckBox, options)
    }

    /// A wrapped radio input for one value, labelled after the input.
    pub fn radio_button(&self, field: &str, value: &str, options: &FieldOptions) -> String {
        self.render(field, Control::RadioButton(value), options)
    }

    /// A wrapped select.
    pub fn select(&self, field: &str, choices: &[Choice], options: &FieldOptions) -> String {
        self.render(field, Control::Select(choices), options)
    }

    /// A wrapped select whose options come from a collection.
    pub fn collection_select(
        &self,
        field: &str,
        collection: Collection<'_>,
        options: &FieldOptions,
    ) -> String {
        self.render(field, Control::CollectionSelect(collection), options)
    }

    /// A wrapped select with `<optgroup>`s.
    pub fn grouped_collection_select(
        &self,
        field: &str,
        groups: &[OptionGroup],
        options: &FieldOptions,
    ) -> String {
        self.render(field, Control::GroupedCollectionSelect(groups), options)
    }

    /// A wrapped group of radio inputs, one per collection entry.
    ///
    /// Plain values are labelled with their translation and submitted
    /// under the model name; records use their `value_method` and
    /// `text_method` fields. Each input's id, and its label's `for`, is
    /// `<object>_<field>_<value>`.
    pub fn radio_buttons(
        &self,
        field: &str,
        collection: Collection<'_>,
        options: &FieldOptions,
    ) -> String {
        self.render(field, Control::RadioButtons(collection), options)
    }

    /// A wrapped group of check boxes submitting `<object>[<field>][]`.
    pub fn check_boxes(
        &self,
        field: &str,
        collection: Collection<'_>,
        options: &FieldOptions,
    ) -> String {
        self.render(field, Control::CheckBoxes(collection), options)
    }

    fn is_required(&self, field: &str, options: &FieldOptions) -> bool {
        options
            .required
            .unwrap_or_else(|| self.object.is_required(field))
    }

    fn default_label(&self, field: &str) -> String {
        let key = field.replacen("_id", "", 1);
        format!(
            "{}{}",
            capitalize(&self.ctx.translate(&key)),
            self.ctx.config.label_suffix
        )
    }

    fn wrapper_classes(
        &self,
        kind: Option<FieldKind>,
        field: Option<&str>,
        options: &FieldOptions,
    ) -> String {
        let mut classes = vec!["control_wrapper"];
        if let Some(kind) = kind {
            classes.push(kind.as_str());
        }
        if let Some(field) = field {
            if self.object.errors().has_error(field) {
                classes.push("field_with_error");
            }
            if self.is_required(field, options) {
                classes.push("required");
            }
        }
        if options.is_disabled() {
            classes.push("disabled");
        }
        classes.join(" ")
    }

    fn wrap(
        &self,
        kind: Option<FieldKind>,
        field: Option<&str>,
        options: &FieldOptions,
        inner: &str,
    ) -> String {
        let classes = self.wrapper_classes(kind, field, options);
        let mut wrapper = Element::<Div>::new();
        if let Some(field) = field.filter(|f| !f.is_empty()) {
            let id = format!("wrapper_{}_{field}", self.object_name);
            wrapper = wrapper.attr("id", id.as_str());
        }
        wrapper.class(classes.as_str()).raw(inner).render()
    }

    fn control_parts(
        &self,
        field: &str,
        options: &FieldOptions,
        default_id: String,
    ) -> (String, Option<String>, ControlAttrs) {
        let name = non_empty(&options.name)
            .map_or_else(|| field_name(&self.object_name, field), str::to_string);
        let value = options.value.clone().or_else(|| self.object.value(field));
        let mut attrs = options.control_attrs();
        attrs.set_default("id", default_id);
        (name, value, attrs)
    }

    fn control(&self, field: &str, control: Control<'_>, options: &FieldOptions) -> String {
        let config = &self.ctx.config;
        let size = Some(config.text_size);

        let default_id = match control {
            Control::RadioButton(tag_value) => option_id(&self.object_name, field, tag_value),
            _ => field_id(&self.object_name, field),
        };
        let (name, value, mut attrs) = self.control_parts(field, options, default_id);
        let value = value.as_deref();

        match control {
            Control::TextField => TextInput::new("text", size).render(&name, value, &attrs),
            Control::PasswordField => TextInput::password(size).render(&name, value, &attrs),
            Control::FileField => TextInput::file(size).render(&name, value, &attrs),
            Control::TextArea => TextArea {
                rows: config.text_area_rows,
                cols: config.text_area_cols,
            }
            .render(&name, value, &attrs),
            Control::DatetimeSelect => DatetimeSelect {
                year_span: config.datetime_year_span,
            }
            .render(&name, value, &attrs),
            Control::EmailField
            | Control::UrlField
            | Control::PhoneField
            | Control::SearchField
            | Control::NumericField => {
                let input_type = control.kind().html5_type().unwrap_or("text");
                attrs.set("size", config.text_size.to_string());
                TextInput::new(input_type, None).render(&name, value, &attrs)
            }
            Control::CheckBox => CheckBox::default().render(&name, value, &attrs),
            Control::RadioButton(tag_value) => {
                RadioButton::new(tag_value).render(&name, value, &attrs)
            }
            Control::Select(choices) => Select::new(choices.to_vec()).render(&name, value, &attrs),
            Control::CollectionSelect(collection) => {
                Select::new(self.choices(collection)).render(&name, value, &attrs)
            }
            Control::GroupedCollectionSelect(groups) => {
                Select::grouped(groups.to_vec()).render(&name, value, &attrs)
            }
            Control::RadioButtons(collection) => {
                attrs.remove("id");
                self.radio_group(field, collection, value, &attrs)
            }
            Control::CheckBoxes(collection) => {
                attrs.remove("id");
                self.check_box_group(field, collection, &attrs)
            }
        }
    }

    fn choices(&self, collection: Collection<'_>) -> Vec<Choice> {
        collection.choices(|value| self.ctx.translate(value))
    }

    /// Like [`Self::choices`], but record texts are translated too.
    fn translated_choices(&self, collection: Collection<'_>) -> Vec<Choice> {
        let choices = self.choices(collection);
        match collection {
            Collection::Values(_) => choices,
            Collection::Records { .. } => choices
                .into_iter()
                .map(|choice| {
                    let text = self.ctx.translate(&choice.text);
                    Choice { text, ..choice }
                })
                .collect(),
        }
    }

    fn option_label(target: &str, text: &str) -> String {
        Element::<Label>::new()
            .attr("for", target)
            .text(text)
            .render()
    }

    fn radio_group(
        &self,
        field: &str,
        collection: Collection<'_>,
        current: Option<&str>,
        shared: &ControlAttrs,
    ) -> String {
        let scope = match collection {
            Collection::Values(_) => self.object.model_name(),
            Collection::Records { .. } => self.object_name.as_str(),
        };
        let name = field_name(scope, field);

        let mut html = String::new();
        for choice in self.choices(collection) {
            let id = option_id(&self.object_name, field, &choice.value);
            let attrs = shared.clone().with("id", id.as_str());
            let radio = RadioButton::new(choice.value.as_str());
            html.push_str(&radio.render(&name, current, &attrs));
            html.push_str(&Self::option_label(&id, &choice.text));
        }

        Element::<Div>::new()
            .class("buttons_holder")
            .raw(html.as_str())
            .render()
    }

    fn check_box_group(
        &self,
        field: &str,
        collection: Collection<'_>,
        shared: &ControlAttrs,
    ) -> String {
        let name = format!("{}[]", field_name(&self.object_name, field));
        let selected = self.object.values(field);

        let mut fallback = ControlAttrs::new();
        if let Some(disabled) = shared.get("disabled") {
            fallback.set("disabled", disabled.as_str());
        }
        let mut html = TextInput::hidden().render(&name, Some(""), &fallback);
        for choice in self.translated_choices(collection) {
            let id = option_id(&self.object_name, field, &choice.value);
            let attrs = shared.clone().with("id", id.as_str());
            let checked = selected.iter().any(|v| *v == choice.value);
            let tag = CheckBoxTag::new(choice.value.as_str(), checked);
            html.push_str(&tag.render(&name, None, &attrs));
            html.push_str(&Self::option_label(&id, &choice.text));
        }

        Element::<Div>::new()
            .class("buttons_holder")
            .raw(html.as_str())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageCatalog;
    use crate::model::Record;
    use crate::validation::ValidationRules;

    fn ctx() -> RenderContext {
        RenderContext::new(
            MessageCatalog::new("en")
                .with("name", "name")
                .with("email", "e-mail")
                .with("country", "country")
                .with("save", "Save"),
        )
    }

    fn user() -> Record {
        Record::new("user")
            .with_rules(ValidationRules::new().presence_of(&["email"]))
            .set("name", "Ada")
    }

    #[test]
    fn test_wrapper_id_and_classes() {
        let ctx = ctx();
        let user = user();
        let html = ctx.builder("user", &user).text_field("name", &FieldOptions::new());
        assert!(html.starts_with("<div"));
        assert!(html.contains(r#"id="wrapper_user_name""#));
        assert!(html.contains(r#"class="control_wrapper text_field""#));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn test_label_drops_id_suffix() {
        let ctx = ctx();
        let user = user();
        let html = ctx
            .builder("user", &user)
            .select("country_id", &[Choice::from("be")], &FieldOptions::new());
        assert!(html.contains("Country: "));
        assert!(html.contains(r#"for="user_country_id""#));
        assert!(html.contains(r#"name="user[country_id]""#));
    }

    #[test]
    fn test_required_marker() {
        let ctx = ctx();
        let user = user();
        let html = ctx.builder("user", &user).email_field("email", &FieldOptions::new());
        assert!(html.contains("control_wrapper email_field required"));
        assert!(html.contains("<abbr>*</abbr>"));
        assert!(html.contains("E-mail: "));
    }

    #[test]
    fn test_required_option_overrides_rules() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);

        let html = builder.email_field("email", &FieldOptions::new().required(false));
        assert!(!html.contains("required"));
        assert!(!html.contains("<abbr>"));

        let html = builder.text_field("name", &FieldOptions::new().required(true));
        assert!(html.contains("text_field required"));
    }

    #[test]
    fn test_only_first_error_is_shown() {
        let ctx = ctx();
        let mut user = user();
        user.add_error("name", "^Name is taken");
        user.add_error("name", "is too short");
        let html = ctx
            .builder("user", &user)
            .text_field("name", &FieldOptions::new().hint("Your full name"));
        assert!(html.contains("field_with_error"));
        assert!(html.contains(r#"<span class="error_message field_hint">Name is taken</span>"#));
        assert!(!html.contains("is too short"));
        assert!(!html.contains("Your full name"));
    }

    #[test]
    fn test_hint() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);
        let html = builder.text_field("name", &FieldOptions::new().hint("Your full name"));
        assert!(html.contains(r#"<span class="field_hint">Your full name</span>"#));
        let html = builder.text_field("name", &FieldOptions::new());
        assert!(!html.contains("field_hint"));
    }

    #[test]
    fn test_check_box_label_follows_control() {
        let ctx = ctx();
        let user = user();
        let html = ctx
            .builder("user", &user)
            .check_box("subscribed", &FieldOptions::new().label("Subscribe"));
        let control = html.find(r#"type="checkbox""#).unwrap();
        let label = html.find("<label").unwrap();
        assert!(control < label);
        assert!(html.contains("control_wrapper check_box"));
    }

    #[test]
    fn test_single_radio_label_targets_radio() {
        let ctx = ctx();
        let user = user();
        let html = ctx
            .builder("user", &user)
            .radio_button("role", "admin", &FieldOptions::new().label("Admin"));
        assert!(html.contains(r#"id="user_role_admin""#));
        assert!(html.contains(r#"for="user_role_admin""#));
        assert!(html.contains(r#"value="admin""#));
    }

    #[test]
    fn test_radio_group() {
        let ctx = ctx();
        let user = user().set("role", "admin");
        let roles = ["user", "admin"];
        let html = ctx
            .builder("user", &user)
            .radio_buttons("role", Collection::Values(&roles), &FieldOptions::new());
        assert_eq!(html.matches(r#"name="user[role]""#).count(), 2);
        assert!(html.contains(r#"class="buttons_holder""#));
        assert!(html.contains(r#"value="admin" checked="checked" id="user_role_admin""#));
        assert!(html.contains(r#"for="user_role_user""#));
        assert!(html.contains("translation missing: en, admin"));
        assert!(!html.contains(r#"for="user_role""#));
    }

    #[test]
    fn test_radio_group_of_records() {
        let ctx = ctx();
        let user = user();
        let basic = Record::new("plan").set("id", "1").set("title", "Basic");
        let pro = Record::new("plan").set("id", "2").set("title", "Pro");
        let plans: [&dyn FormObject; 2] = [&basic, &pro];
        let html = ctx.builder("account", &user).radio_buttons(
            "plan_id",
            Collection::records(&plans, "id", "title"),
            &FieldOptions::new().label("Plan"),
        );
        assert_eq!(html.matches(r#"name="account[plan_id]""#).count(), 2);
        assert!(html.contains(r#"id="account_plan_id_2""#));
        assert!(html.contains(">Pro</label>"));
        assert!(html.contains(">Plan</label>"));
    }

    #[test]
    fn test_check_box_group() {
        let ctx = ctx();
        let user = user().set_many("tags", ["rust"]);
        let tags = ["rust", "ruby"];
        let html = ctx
            .builder("user", &user)
            .check_boxes("tags", Collection::Values(&tags), &FieldOptions::new());
        assert!(html.contains(r#"<input type="hidden" name="user[tags][]" value="" />"#));
        assert!(html.contains(r#"value="rust" checked="checked" id="user_tags_rust""#));
        assert!(html.contains(
            r#"<input type="checkbox" name="user[tags][]" value="ruby" id="user_tags_ruby" />"#
        ));
        assert!(html.contains("control_wrapper check_boxes"));
    }

    #[test]
    fn test_html5_fields_force_type_and_size() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);
        let html = builder.phone_field("phone", &FieldOptions::new().attr("size", "12"));
        assert!(html.contains(r#"type="tel""#));
        assert!(html.contains(r#"size="30""#));
        assert!(html.contains("control_wrapper phone_field"));
        let html = builder.telephone_field("phone", &FieldOptions::new());
        assert!(html.contains(r#"type="tel""#));
        let html = builder.numeric_field("age", &FieldOptions::new());
        assert!(html.contains(r#"type="number""#));
    }

    #[test]
    fn test_disabled_marks_wrapper_and_control() {
        let ctx = ctx();
        let user = user();
        let html = ctx
            .builder("user", &user)
            .text_field("name", &FieldOptions::new().disabled());
        assert!(html.contains("control_wrapper text_field disabled"));
        assert!(html.contains(r#"disabled="disabled""#));
    }

    #[test]
    fn test_submit() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);
        let html = builder.submit(None, &FieldOptions::new());
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"name="commit""#));
        assert!(html.contains("<span>Save</span>"));

        let html = builder.submit(
            Some("Go"),
            &FieldOptions::new().title("Send it").name("go").disabled(),
        );
        assert!(html.contains(r#"name="go""#));
        assert!(html.contains(r#"disabled="disabled""#));
        assert!(html.contains(r#"title="Send it""#));
        assert!(html.contains(">Go</span>"));
    }

    #[test]
    fn test_fieldset() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);
        let err = builder.fieldset(&FieldOptions::new(), None).unwrap_err();
        assert!(matches!(err, FormError::MissingBlock("fieldset")));

        let html = builder
            .fieldset(
                &FieldOptions::new().legend("Account"),
                Some(&|f: &FormBuilder<'_>| f.text_field("name", &FieldOptions::new())),
            )
            .unwrap();
        assert!(html.starts_with("<fieldset"));
        assert!(html.contains("<legend>Account</legend>"));
        assert!(html.contains(r#"id="wrapper_user_name""#));
    }

    #[test]
    fn test_field_wrapper_block() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);
        assert!(builder.field_wrapper(None, None, None).is_err());

        let html = builder
            .field_wrapper(
                Some(FieldKind::TextField),
                Some("email"),
                Some(&|_: &FormBuilder<'_>| "<p>custom</p>".to_string()),
            )
            .unwrap();
        assert!(html.contains(r#"id="wrapper_user_email""#));
        assert!(html.contains("control_wrapper text_field required"));
        assert!(html.contains("<p>custom</p>"));
    }

    #[test]
    fn test_error_messages() {
        let ctx = ctx();
        let mut user = user();
        assert_eq!(ctx.builder("user", &user).error_messages(), "");

        user.add_error("name", "^Name is taken");
        user.add_error("email", "Email can't be blank");
        let html = ctx.builder("user", &user).error_messages();
        assert!(html.contains(r#"id="error_messages_user""#));
        assert!(
            html.contains("<li>Email can&#x27;t be blank</li>")
                || html.contains("<li>Email can't be blank</li>")
        );
        assert!(html.contains("<li>Name is taken</li>"));
    }

    #[test]
    fn test_hidden_field_is_not_wrapped() {
        let ctx = ctx();
        let user = user();
        let html = ctx.builder("user", &user).hidden_field("name", &FieldOptions::new());
        assert_eq!(
            html,
            r#"<input type="hidden" name="user[name]" value="Ada" id="user_name" />"#
        );
    }

    #[test]
    fn test_datetime_select_is_wrapped() {
        let ctx = ctx();
        let user = user().set("born_at", "1990-06-01 08:30");
        let html = ctx
            .builder("user", &user)
            .datetime_select("born_at", &FieldOptions::new().label("Born"));
        assert!(html.contains("control_wrapper datetime_select"));
        assert!(html.contains(r#"name="user[born_at(1i)]""#));
        assert!(html.contains(r#"<option value="30" selected="selected">30</option>"#));
    }

    #[test]
    fn test_groups_pass_control_options_to_every_input() {
        let ctx = ctx();
        let user = user();
        let builder = ctx.builder("user", &user);
        let options = FieldOptions::new().disabled().class("big");

        let roles = ["user", "admin"];
        let html = builder.radio_buttons("role", Collection::Values(&roles), &options);
        assert!(html.contains("control_wrapper radio_buttons disabled"));
        assert_eq!(html.matches(r#"class="big" disabled="disabled""#).count(), 2);
        assert!(html.contains(r#"id="user_role_user""#));
        assert!(!html.contains(r#"id="user_role""#));

        let tags = ["rust", "ruby"];
        let html = builder.check_boxes("tags", Collection::Values(&tags), &options);
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 2);
        assert_eq!(html.matches(r#"disabled="disabled""#).count(), 3);
        assert!(html.contains(r#"name="user[tags][]" value="" disabled="disabled" />"#));
    }

    #[test]
    fn test_check_box_group_translates_record_text() {
        let catalog = MessageCatalog::new("en").with("roles.admin", "Administrator");
        let ctx = RenderContext::new(catalog);
        let user = user();
        let admin = Record::new("role").set("id", "1").set("name", "roles.admin");
        let roles: [&dyn FormObject; 1] = [&admin];
        let html = ctx.builder("user", &user).check_boxes(
            "role_ids",
            Collection::records(&roles, "id", "name"),
            &FieldOptions::new(),
        );
        assert!(html.contains(r#"for="user_role_ids_1""#));
        assert!(html.contains(">Administrator</label>"));
        assert!(!html.contains("roles.admin</label>"));
        assert!(html.contains(r#"value="1" id="user_role_ids_1""#));
    }
}
