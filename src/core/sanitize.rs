use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:"*?<>|]+"#).expect("static pattern is valid"));

/// Builds the page file name for one conference edition: `{title}_{year}.html`
/// with every run of characters that are unsafe in file names collapsed to a
/// single underscore.
///
/// Distinct titles can map to the same name (`A:B` and `A?B`); the caller
/// decides what to do about that.
pub fn file_name(title: &str, year: &str) -> String {
    let raw_name = format!("{}_{}", title, year);
    format!("{}.html", UNSAFE_RUN.replace_all(&raw_name, "_"))
}
