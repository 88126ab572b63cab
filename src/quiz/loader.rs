use std::{fs, io::ErrorKind, path::Path};

use log::debug;
use serde_json::Value;

use super::error::SkipReason;

/// Reads and parses a JSON file, keeping the failure reason.
pub fn read_json(path: &Path) -> Result<Value, SkipReason> {
    debug!("reading {}", path.display());

    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SkipReason::NotFound {
            path: path.to_path_buf(),
        },
        _ => SkipReason::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&data).map_err(|source| SkipReason::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// A path is usable when it is a regular file we can open.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file()) && fs::File::open(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quizgen-loader-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_valid_json() {
        let dir = scratch("valid");
        let path = dir.join("data.json");
        fs::write(&path, r#"{"slay": "slay?"}"#).unwrap();

        let value = read_json(&path).unwrap();
        assert_eq!(value["slay"], "slay?");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn distinguishes_missing_from_malformed() {
        let dir = scratch("reasons");
        let broken = dir.join("broken.json");
        fs::write(&broken, "{ not json").unwrap();

        assert!(matches!(
            read_json(&dir.join("nope.json")),
            Err(SkipReason::NotFound { .. })
        ));
        assert!(matches!(read_json(&broken), Err(SkipReason::Malformed { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn directories_do_not_count_as_files() {
        let dir = scratch("exists");
        let file = dir.join("a.json");
        fs::write(&file, "[]").unwrap();

        assert!(file_exists(&file));
        assert!(!file_exists(&dir));
        assert!(!file_exists(&dir.join("missing.json")));

        fs::remove_dir_all(&dir).unwrap();
    }
}
