use std::path::Path;

use log::warn;

use super::{
    error::SkipReason,
    loader::read_json,
    model::{is_present, text_of, IndexEntry, QuizDocument, QuizItem},
};

/// Loads the quiz behind each entry and keeps the ones with a usable body.
/// The result follows index order.
pub fn normalize(entries: Vec<IndexEntry>, data_dir: &Path) -> Vec<QuizItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let file = entry.file.clone();
            match load_quiz(entry, data_dir) {
                Ok(item) => Some(item),
                Err(reason) => {
                    warn!("skipping {}: {}", file, reason);
                    None
                }
            }
        })
        .collect()
}

pub fn load_quiz(entry: IndexEntry, data_dir: &Path) -> Result<QuizItem, SkipReason> {
    let document = read_json(&data_dir.join(&entry.file))?;

    let title = document.get("title");
    if !is_present(title) {
        return Err(SkipReason::missing(&entry.file, "title"));
    }
    let questions = document.get("questions");
    if !is_present(questions) {
        return Err(SkipReason::missing(&entry.file, "questions"));
    }

    let content = QuizDocument {
        title: title.map(text_of).unwrap_or_default().to_string(),
        questions: questions.cloned().unwrap_or_default(),
    };

    Ok(QuizItem::new(entry, content))
}
