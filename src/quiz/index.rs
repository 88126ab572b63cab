use std::path::{Component, Path};

use log::warn;
use serde_json::Value;

use super::{
    error::SkipReason,
    loader::file_exists,
    model::{text_of, IndexEntry},
};

/// Keeps the index entries that have a `file` and a `title` and whose file
/// exists under `data_dir`. Order is preserved; anything else is dropped.
pub fn validate_index(index: &Value, data_dir: &Path) -> Vec<IndexEntry> {
    let Some(entries) = index.as_array() else {
        warn!("{}", SkipReason::NotAList { what: String::from("index") });
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match check_entry(entry, position, data_dir) {
            Ok(entry) => Some(entry),
            Err(reason) => {
                warn!("skipping index entry {}: {}", position, reason);
                None
            }
        })
        .collect()
}

pub fn check_entry(entry: &Value, position: usize, data_dir: &Path) -> Result<IndexEntry, SkipReason> {
    let what = format!("index entry {}", position);

    let file = entry
        .get("file")
        .and_then(|f| f.as_str())
        .ok_or_else(|| SkipReason::missing(&what, "file"))?;
    let title = entry
        .get("title")
        .ok_or_else(|| SkipReason::missing(&what, "title"))?;

    if !is_plain_file_name(file) {
        return Err(SkipReason::NotAFileName {
            file: file.to_string(),
        });
    }

    let path = data_dir.join(file);
    if !file_exists(&path) {
        return Err(SkipReason::NotFound { path });
    }

    Ok(IndexEntry {
        file: file.to_string(),
        title: text_of(title).to_string(),
    })
}

/// Only a single normal component, so the entry stays inside the data
/// directory and maps onto a flat output name.
fn is_plain_file_name(file: &str) -> bool {
    let mut components = Path::new(file).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
