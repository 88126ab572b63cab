use std::path::PathBuf;

use thiserror::Error;

/// Why an input was left out of the build. None of these stop the run.
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{file}' is not a plain file name inside the data directory")]
    NotAFileName { file: String },

    #[error("{what} is missing required field '{field}'")]
    MissingField { what: String, field: &'static str },

    #[error("{what} is not a list")]
    NotAList { what: String },

    #[error("no valid questions found for {file}")]
    QuestionsNotAList { file: String },
}

impl SkipReason {
    pub(crate) fn missing(what: impl Into<String>, field: &'static str) -> Self {
        SkipReason::MissingField {
            what: what.into(),
            field,
        }
    }
}
