use crate::domain::model::{ConferenceSeries, YearInstance};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// The built-in page template. Placeholders are written `{{name}}`.
pub const DEFAULT_PAGE_TEMPLATE: &str = include_str!("../../assets/page.html");

/// The built-in stylesheet shared by every page.
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/style.css");

/// Placeholder names a page template may use.
pub const PLACEHOLDERS: [&str; 10] = [
    "title",
    "year",
    "dblp",
    "ccf_rank",
    "date",
    "place",
    "description",
    "abstract_deadline",
    "submit_deadline",
    "link",
];

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").expect("static pattern is valid"));

fn field<'a>(series: &'a ConferenceSeries, instance: &'a YearInstance, name: &str) -> Option<&'a str> {
    let value = match name {
        "title" => &series.title,
        "year" => &instance.year,
        "dblp" => &series.dblp,
        "ccf_rank" => &series.ccf_rank,
        "date" => &instance.date,
        "place" => &instance.place,
        "description" => &series.description,
        "abstract_deadline" => &instance.abstract_deadline,
        "submit_deadline" => &instance.submit_deadline,
        "link" => &instance.link,
        _ => return None,
    };
    Some(value.as_str())
}

/// Entity-escapes a value so it is inert both as HTML text and inside the
/// JavaScript template literal the page body is built from.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'', '`', '$', '\\']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '`' => escaped.push_str("&#96;"),
            '$' => escaped.push_str("&#36;"),
            '\\' => escaped.push_str("&#92;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Fills `template` with one conference edition.
///
/// Substitution is a single pass over the template, so a feed value that
/// happens to contain `{{title}}` is copied verbatim. Unknown placeholders are
/// left untouched. Values are inserted raw unless `escape` is set.
pub fn render(
    template: &str,
    series: &ConferenceSeries,
    instance: &YearInstance,
    escape: bool,
) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            match field(series, instance, &caps[1]) {
                Some(value) if escape => escape_html(value).into_owned(),
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ConferenceSeries {
        ConferenceSeries {
            title: "FOO".to_string(),
            file_title: "FOO".to_string(),
            dblp: "foo".to_string(),
            ccf_rank: "A".to_string(),
            description: "Desc".to_string(),
            instances: vec![],
        }
    }

    fn instance() -> YearInstance {
        YearInstance {
            year: "2025".to_string(),
            date: "1-3 Jan".to_string(),
            place: "City".to_string(),
            link: "http://x".to_string(),
            abstract_deadline: "2024-09-01".to_string(),
            submit_deadline: "2024-09-15".to_string(),
        }
    }

    #[test]
    fn test_render_default_template() {
        let html = render(DEFAULT_PAGE_TEMPLATE, &series(), &instance(), false);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>FOO 2025</title>"));
        assert!(html.contains(r#"<a href="https://dblp.uni-trier.de/db/conf/foo" class="link">FOO</a> 2025"#));
        assert!(html.contains(r#"<span class="tag">CCF A</span>"#));
        assert!(html.contains("1-3 Jan · City"));
        assert!(html.contains(r#"<p class="conference-desc">Desc</p>"#));
        assert!(html.contains("abstract deadline on 2024-09-01"));
        assert!(html.contains("Deadline: 2024-09-15"));
        assert!(html.contains(r#"<a href="http://x" class="link">http://x</a>"#));
        assert!(html.contains(r#"const abstractDeadline = "2024-09-01";"#));
        assert!(html.contains(r#"const submitDeadline = "2024-09-15";"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_keeps_countdown_script() {
        let html = render(DEFAULT_PAGE_TEMPLATE, &series(), &instance(), false);

        assert!(html.contains("js-yaml@4.1.0/dist/js-yaml.min.js"));
        assert!(html.contains("function renderCountdown(targetId, deadline)"));
        assert!(html.contains("if (!deadline || deadline === 'TBD') return el.textContent = 'TBD';"));
        assert!(html.contains("if (diff <= 0) return el.textContent = 'Passed';"));
        assert!(html.contains("`${days}d ${hours}h ${minutes}m ${seconds}s`"));
        assert!(html.contains("setInterval(update, 1000);"));
        assert!(html.contains(r#"renderCountdown("abstract-countdown", abstractDeadline);"#));
        assert!(html.contains(r#"renderCountdown("submit-countdown", submitDeadline);"#));
    }

    #[test]
    fn test_render_tbd_deadlines() {
        let mut instance = instance();
        instance.abstract_deadline = "TBD".to_string();
        instance.submit_deadline = "TBD".to_string();

        let html = render(DEFAULT_PAGE_TEMPLATE, &series(), &instance, false);
        assert!(html.contains(r#"const abstractDeadline = "TBD";"#));
        assert!(html.contains(r#"const submitDeadline = "TBD";"#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render(DEFAULT_PAGE_TEMPLATE, &series(), &instance(), false);
        let second = render(DEFAULT_PAGE_TEMPLATE, &series(), &instance(), false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_inserts_values_raw_by_default() {
        let mut series = series();
        series.description = "<em>Top</em> venue".to_string();

        let html = render("<p>{{description}}</p>", &series, &instance(), false);
        assert_eq!(html, "<p><em>Top</em> venue</p>");
    }

    #[test]
    fn test_render_escapes_when_asked() {
        let mut series = series();
        series.description = "<em>S&P</em> `${x}`".to_string();

        let html = render("<p>{{description}}</p>", &series, &instance(), true);
        assert_eq!(html, "<p>&lt;em&gt;S&amp;P&lt;/em&gt; &#96;&#36;{x}&#96;</p>");
    }

    #[test]
    fn test_render_does_not_expand_placeholders_in_values() {
        let mut series = series();
        series.title = "{{year}}".to_string();

        let html = render("{{title}}-{{year}}", &series, &instance(), false);
        assert_eq!(html, "{{year}}-2025");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let html = render("{{ title }} {{unknown}}", &series(), &instance(), false);
        assert_eq!(html, "FOO {{unknown}}");
    }

    #[test]
    fn test_escape_html_borrows_safe_values() {
        assert!(matches!(escape_html("2024-09-01"), Cow::Borrowed(_)));
    }
}
