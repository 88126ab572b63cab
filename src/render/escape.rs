use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::quiz::text_of;

static LINE_ENDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());

/// Escapes the five HTML-significant characters. `&` goes first so later
/// entities are not escaped twice.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Like [`escape`], but any non-string value escapes to the empty string.
pub fn escape_value(value: &Value) -> String {
    escape(text_of(value))
}

/// Escapes `text` and lays it out as paragraphs: blank lines split
/// paragraphs, single newlines become `<br>`, double spaces are kept.
pub fn format(text: &str) -> String {
    let text = LINE_ENDING.replace_all(text, "\n");

    escape(&text)
        .split("\n\n")
        .map(|block| format!("<p>{}</p>", block.replace('\n', "<br>").replace("  ", "&nbsp;&nbsp;")))
        .collect()
}

pub fn format_value(value: &Value) -> String {
    format(text_of(value))
}
