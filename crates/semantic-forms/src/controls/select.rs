//! Select boxes.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use super::{html_escape, ControlAttrs, Widget};
use crate::kind::{Choice, OptionGroup};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A `<select>` with plain options and optional groups.
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Ungrouped choices, rendered first.
    pub choices: Vec<Choice>,
    /// Grouped choices.
    pub groups: Vec<OptionGroup>,
    /// Whether to include an empty option.
    pub include_blank: bool,
}

impl Select {
    /// Creates a select with the given choices.
    pub fn new(choices: Vec<Choice>) -> Self {
        Self {
            choices,
            ..Default::default()
        }
    }

    /// Creates a select made of option groups.
    pub fn grouped(groups: Vec<OptionGroup>) -> Self {
        Self {
            groups,
            ..Default::default()
        }
    }

    /// Adds an empty first option.
    #[must_use]
    pub fn include_blank(mut self) -> Self {
        self.include_blank = true;
        self
    }
}

fn render_options(choices: &[Choice], selected: Option<&str>) -> String {
    choices
        .iter()
        .map(|choice| {
            let selected_attr = if selected == Some(choice.value.as_str()) {
                r#" selected="selected""#
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(&choice.value),
                html_escape(&choice.text)
            )
        })
        .collect()
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String {
        let mut options = String::new();

        if self.include_blank {
            options.push_str(r#"<option value=""></option>"#);
        }

        options.push_str(&render_options(&self.choices, value));

        for group in &self.groups {
            options.push_str(&format!(
                r#"<optgroup label="{}">{}</optgroup>"#,
                html_escape(&group.label),
                render_options(&group.choices, value)
            ));
        }

        format!(
            r#"<select name="{}"{}>{options}</select>"#,
            html_escape(name),
            attrs.to_html()
        )
    }
}

/// Five selects for year, month, day, hour and minute.
///
/// Parts are named `<name>(1i)` to `<name>(5i)` inside the brackets, e.g.
/// `user[registered_at(1i)]`, and get ids suffixed `_1i` to `_5i`.
#[derive(Debug, Clone)]
pub struct DatetimeSelect {
    /// Years offered before and after the selected one.
    pub year_span: u16,
}

impl Default for DatetimeSelect {
    fn default() -> Self {
        Self { year_span: 5 }
    }
}

impl DatetimeSelect {
    /// Parses a stored value; date-only values select midnight.
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    fn part(
        name: &str,
        attrs: &ControlAttrs,
        index: u8,
        choices: &[Choice],
        selected: &str,
    ) -> String {
        let part_name = match name.strip_suffix(']') {
            Some(stem) => format!("{stem}({index}i)]"),
            None => format!("{name}({index}i)"),
        };
        let mut attrs = attrs.clone();
        if let Some(id) = attrs.remove("id") {
            attrs.set("id", format!("{id}_{index}i"));
        }
        Select::new(choices.to_vec()).render(&part_name, Some(selected), &attrs)
    }
}

fn numbered(range: impl Iterator<Item = u32>, width: usize) -> Vec<Choice> {
    range
        .map(|n| {
            let padded = format!("{n:0width$}");
            Choice::new(padded.clone(), padded)
        })
        .collect()
}

impl Widget for DatetimeSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &ControlAttrs) -> String {
        let current = value
            .and_then(Self::parse)
            .unwrap_or_else(|| Local::now().naive_local());

        let span = i32::from(self.year_span);
        let years: Vec<Choice> = (current.year() - span..=current.year() + span)
            .map(|y| Choice::from(y.to_string().as_str()))
            .collect();
        let months: Vec<Choice> = MONTHS
            .iter()
            .zip(1..)
            .map(|(month, n): (&&str, u32)| Choice::new(n.to_string(), *month))
            .collect();
        let days = numbered(1..=31, 1);
        let hours = numbered(0..=23, 2);
        let minutes = numbered(0..=59, 2);

        let mut html = String::new();
        html.push_str(&Self::part(name, attrs, 1, &years, &current.year().to_string()));
        html.push_str(&Self::part(name, attrs, 2, &months, &current.month().to_string()));
        html.push_str(&Self::part(name, attrs, 3, &days, &current.day().to_string()));
        html.push_str(" &mdash; ");
        html.push_str(&Self::part(name, attrs, 4, &hours, &format!("{:02}", current.hour())));
        html.push_str(" : ");
        html.push_str(&Self::part(name, attrs, 5, &minutes, &format!("{:02}", current.minute())));
        html
    }
}
