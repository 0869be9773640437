use std::borrow::Cow;

/// Joins summary lines inside a `<summary>` element
pub const SUMMARY_SEPARATOR: &str = "<br>";

/// Escape `&`, `<`, `>` and both quote characters
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Escape the first `count` lines and join them with [`SUMMARY_SEPARATOR`]
pub fn summarize<S: AsRef<str>>(lines: &[S], count: usize) -> String {
    lines
        .iter()
        .take(count)
        .map(|line| escape_html(line.as_ref()))
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}
