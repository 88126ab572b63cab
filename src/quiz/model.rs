use serde_json::Value;

/// One row of the index document.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    /// quiz file name, relative to the data directory
    pub file: String,

    /// display title, untrusted
    pub title: String,
}

/// A loaded quiz document that passed the shape check.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDocument {
    pub title: String,

    // kept loose, the quiz renderer decides what is usable
    pub questions: Value,
}

/// An index entry joined with its quiz content, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizItem {
    pub entry: IndexEntry,
    pub content: QuizDocument,
}

impl QuizItem {
    pub fn new(entry: IndexEntry, content: QuizDocument) -> Self {
        Self { entry, content }
    }

    pub fn file(&self) -> &str {
        &self.entry.file
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// 0-based position in the source document, names the form field
    pub position: usize,
    pub question: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub answer: String,
    pub correct: bool,
}

/// Coerces untrusted JSON into display text. Non-strings become empty.
pub fn text_of(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

/// Whether a JSON value counts as a set flag.
pub fn flag_of(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    }
}

/// A required field counts as missing when absent, null, false or an empty string.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(flag_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_of_drops_non_strings() {
        assert_eq!(text_of(&json!("hi")), "hi");
        assert_eq!(text_of(&json!(45)), "");
        assert_eq!(text_of(&json!(null)), "");
        assert_eq!(text_of(&json!({"a": 1})), "");
    }

    #[test]
    fn flag_of_follows_truthiness() {
        assert!(flag_of(&json!(true)));
        assert!(flag_of(&json!(1)));
        assert!(flag_of(&json!("yes")));
        assert!(!flag_of(&json!(false)));
        assert!(!flag_of(&json!(0)));
        assert!(!flag_of(&json!("")));
        assert!(!flag_of(&json!(null)));
    }

    #[test]
    fn empty_question_list_is_present() {
        assert!(is_present(Some(&json!([]))));
        assert!(!is_present(None));
        assert!(!is_present(Some(&json!(null))));
    }
}
