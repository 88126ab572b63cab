use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "quizgen.yaml";

/// Where to read quizzes from and where to write the site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// index document listing quiz files and titles, default `data/index.json`
    pub index_path: PathBuf,

    /// directory the index's `file` entries are relative to, default `data`
    pub data_dir: PathBuf,

    /// output directory, default `dist`
    pub output_dir: PathBuf,

    pub site: SiteText,
}

/// Fixed text and links used by the page templates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteText {
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub stylesheet: String,
    pub back_label: String,
    pub clear_label: String,
    pub check_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("data/index.json"),
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("dist"),
            site: SiteText::default(),
        }
    }
}

impl Default for SiteText {
    fn default() -> Self {
        Self {
            title: String::from("Quizzes"),
            heading: String::from("Pick a quiz"),
            intro: String::from("Choose a category to get started."),
            stylesheet: String::from("../public/styles.css"),
            back_label: String::from("<"),
            clear_label: String::from("Clear answers"),
            check_label: String::from("Check answers"),
        }
    }
}

impl Config {
    /// Config rooted at `root` with the default layout underneath it.
    pub fn with_root(root: &Path) -> Self {
        let defaults = Self::default();
        Self {
            index_path: root.join(defaults.index_path),
            data_dir: root.join(defaults.data_dir),
            output_dir: root.join(defaults.output_dir),
            site: defaults.site,
        }
    }

    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        serde_yaml_ng::from_str(source).context("invalid config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .context(format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&source).context(format!("failed to parse {}", path.display()))
    }

    /// Loads `path` when given, else the default config file if there is one.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}
