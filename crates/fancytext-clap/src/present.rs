//! Result presenter.
//!
//! [`ResultFilter`] narrows conversion results the way the interactive
//! view does: first by category, then by a case-insensitive substring
//! match on the style name or the converted text.
//!
//! [`Presenter`] renders the surviving rows through minijinja templates.
//! Templates use a `style` filter that looks a name up in a [`Theme`]
//! and applies the matching `console::Style`:
//!
//! ```text
//! {{ row.name | style("name") }}  {{ row.text }}
//! ```
//!
//! Alignment is computed before styling, so escape codes never count
//! toward column widths.

use std::collections::HashMap;
use std::sync::Arc;

use console::Style;
use fancytext::{display_width, pad_to_width, truncate_to_width, Category, ConversionResult};
use minijinja::{Environment, Error, Value};
use serde::Serialize;

use crate::cli::CategoryFilter;

/// Shown in place of converted text that came out empty.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Width of the longest category name.
const CATEGORY_WIDTH: usize = 8;

const RESULTS_TEMPLATE: &str = "{% for row in rows %}\
{{ row.name | style(\"name\") }}  {{ row.category | style(\"category\") }}  {{ row.text }}\n\
{% else %}{{ \"no matching styles\" | style(\"muted\") | nl }}{% endfor %}\
{% if rows and summary %}{{ summary | style(\"muted\") | nl }}{% endif %}";

const STYLES_TEMPLATE: &str = "{% for row in rows %}\
{{ row.name | style(\"name\") }}  {{ row.category | style(\"category\") }}\n\
{% else %}{{ \"no matching styles\" | style(\"muted\") | nl }}{% endfor %}";

/// Category and search filter over conversion results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFilter {
    pub category: CategoryFilter,
    search: Option<String>,
}

impl ResultFilter {
    /// Creates a filter. A blank search term matches everything.
    pub fn new(category: CategoryFilter, search: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);
        Self { category, search }
    }

    /// Returns true if a style with this name, category and output passes.
    pub fn accepts(&self, name: &str, category: Category, text: &str) -> bool {
        if !self.category.accepts(category) {
            return false;
        }
        match &self.search {
            None => true,
            Some(term) => {
                name.to_lowercase().contains(term.as_str())
                    || text.to_lowercase().contains(term.as_str())
            }
        }
    }

    pub fn matches(&self, result: &ConversionResult) -> bool {
        self.accepts(&result.name, result.category, &result.text)
    }

    /// Keeps the matching results, preserving order.
    pub fn apply<'a>(&self, results: &'a [ConversionResult]) -> Vec<&'a ConversionResult> {
        results.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Named console styles available to templates.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Adds or replaces a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies the named style. Unknown names leave the text unstyled.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new()
            .add("name", Style::new().bold())
            .add("category", Style::new().dim())
            .add("muted", Style::new().dim().italic())
    }
}

#[derive(Serialize)]
struct Row {
    name: String,
    category: String,
    text: String,
}

#[derive(Serialize)]
struct Rows {
    rows: Vec<Row>,
    summary: Option<String>,
}

/// Renders conversion results and style listings as aligned text.
pub struct Presenter {
    env: Environment<'static>,
    max_width: Option<usize>,
    summary: bool,
}

impl Presenter {
    /// Creates a presenter.
    ///
    /// `max_width` is the terminal width; when set, converted text is
    /// truncated so each row fits on one line.
    pub fn new(theme: Theme, use_color: bool, max_width: Option<usize>) -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env, Arc::new(theme), use_color);
        env.add_template("results", RESULTS_TEMPLATE)?;
        env.add_template("styles", STYLES_TEMPLATE)?;
        Ok(Self {
            env,
            max_width,
            summary: false,
        })
    }

    /// Ends result listings with a "N styles shown" line.
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// A presenter without color or truncation.
    pub fn plain() -> Result<Self, Error> {
        Self::new(Theme::default(), false, None)
    }

    /// One row per result: padded name, category, converted text.
    pub fn render_results(&self, results: &[&ConversionResult]) -> Result<String, Error> {
        let name_width = column_width(results.iter().map(|r| r.name.as_str()));
        let text_budget = self
            .max_width
            .map(|w| w.saturating_sub(name_width + CATEGORY_WIDTH + 4));
        let rows = results
            .iter()
            .map(|r| {
                let text = if r.text.is_empty() {
                    EMPTY_PLACEHOLDER.to_string()
                } else {
                    match text_budget {
                        Some(budget) if budget > 0 => truncate_to_width(&r.text, budget),
                        _ => r.text.clone(),
                    }
                };
                Row {
                    name: pad_to_width(&r.name, name_width),
                    category: pad_to_width(r.category.as_str(), CATEGORY_WIDTH),
                    text,
                }
            })
            .collect();
        let summary = self.summary.then(|| match results.len() {
            1 => "1 style shown".to_string(),
            n => format!("{n} styles shown"),
        });
        self.render("results", &Rows { rows, summary })
    }

    /// One row per style: padded name and category.
    pub fn render_styles(&self, styles: &[(&str, Category)]) -> Result<String, Error> {
        let name_width = column_width(styles.iter().map(|(name, _)| *name));
        let rows = styles
            .iter()
            .map(|&(name, category)| Row {
                name: pad_to_width(name, name_width),
                category: category.as_str().to_string(),
                text: String::new(),
            })
            .collect();
        self.render(
            "styles",
            &Rows {
                rows,
                summary: None,
            },
        )
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

fn column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(display_width).max().unwrap_or(0)
}

fn register_filters(env: &mut Environment<'static>, theme: Arc<Theme>, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, text: &str, category: Category) -> ConversionResult {
        ConversionResult {
            name: name.to_string(),
            text: text.to_string(),
            category,
        }
    }

    fn sample() -> Vec<ConversionResult> {
        vec![
            result("Bold", "𝐇𝐢", Category::Standard),
            result("Script", "𝓗𝓲", Category::Standard),
            result("Leet Speak", "H1", Category::Special),
            result("Reverse", "ıH", Category::Special),
        ]
    }

    #[test]
    fn test_filter_by_category() {
        let results = sample();
        let special = ResultFilter::new(CategoryFilter::Special, None).apply(&results);
        let names: Vec<_> = special.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Leet Speak", "Reverse"]);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let results = sample();
        let found = ResultFilter::new(CategoryFilter::All, Some("SCR")).apply(&results);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Script");
    }

    #[test]
    fn test_search_matches_text() {
        let results = sample();
        let found = ResultFilter::new(CategoryFilter::All, Some("h1")).apply(&results);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Leet Speak");
    }

    #[test]
    fn test_category_applies_before_search() {
        let results = sample();
        let found = ResultFilter::new(CategoryFilter::Standard, Some("leet")).apply(&results);
        assert!(found.is_empty());
    }

    #[test]
    fn test_blank_search_matches_all() {
        let results = sample();
        assert_eq!(ResultFilter::new(CategoryFilter::All, Some("  ")).apply(&results).len(), 4);
    }

    #[test]
    fn test_render_results_aligns_names() {
        let results = sample();
        let refs: Vec<_> = results.iter().collect();
        let out = Presenter::plain().unwrap().render_results(&refs).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Bold        standard  𝐇𝐢");
        assert_eq!(lines[2], "Leet Speak  special   H1");
    }

    #[test]
    fn test_render_results_marks_empty_text() {
        let empty = result("Underline", "", Category::Special);
        let out = Presenter::plain().unwrap().render_results(&[&empty]).unwrap();
        assert_eq!(out, format!("Underline  special   {EMPTY_PLACEHOLDER}\n"));
    }

    #[test]
    fn test_render_nothing_matched() {
        let out = Presenter::plain().unwrap().render_results(&[]).unwrap();
        assert_eq!(out, "no matching styles\n");
    }

    #[test]
    fn test_render_truncates_to_terminal_width() {
        let long = result("Bold", &"x".repeat(80), Category::Standard);
        let presenter = Presenter::new(Theme::default(), false, Some(40)).unwrap();
        let out = presenter.render_results(&[&long]).unwrap();
        let line = out.lines().next().unwrap();
        assert!(display_width(line) <= 40, "{line:?}");
    }

    #[test]
    fn test_color_wraps_names() {
        let presenter = Presenter::new(Theme::default(), true, None).unwrap();
        let out = presenter.render_styles(&[("Bold", Category::Standard)]).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Bold"));
    }

    #[test]
    fn test_render_styles() {
        let out = Presenter::plain()
            .unwrap()
            .render_styles(&[("Bold", Category::Standard), ("Zalgo", Category::Special)])
            .unwrap();
        assert_eq!(out, "Bold   standard\nZalgo  special\n");
    }

    #[test]
    fn test_render_styles_leaves_category_unpadded() {
        let out = Presenter::plain()
            .unwrap()
            .render_styles(&[("Zalgo", Category::Special)])
            .unwrap();
        assert!(out.lines().all(|line| !line.ends_with(' ')), "{out:?}");
    }

    #[test]
    fn test_summary_counts_shown_results() {
        let results = sample();
        let shown = ResultFilter::new(CategoryFilter::Special, None).apply(&results);
        let presenter = Presenter::plain().unwrap().with_summary(true);
        let out = presenter.render_results(&shown).unwrap();
        assert_eq!(out.lines().last(), Some("2 styles shown"));

        let one = presenter.render_results(&shown[..1]).unwrap();
        assert_eq!(one.lines().last(), Some("1 style shown"));
    }

    #[test]
    fn test_summary_skipped_when_nothing_matched() {
        let presenter = Presenter::plain().unwrap().with_summary(true);
        assert_eq!(presenter.render_results(&[]).unwrap(), "no matching styles\n");
    }

    #[test]
    fn test_summary_off_by_default() {
        let results = sample();
        let refs: Vec<_> = results.iter().collect();
        let out = Presenter::plain().unwrap().render_results(&refs).unwrap();
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_unknown_theme_style_is_plain() {
        assert_eq!(Theme::new().apply("nope", "x", true), "x");
    }
}
