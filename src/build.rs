use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{info, warn};

use crate::{
    config::Config,
    quiz::{normalize, read_json, validate_index, QuizItem},
    render::{page_name, render_index_page, render_quiz_page},
};

pub const INDEX_PAGE: &str = "index.html";

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// entries that passed index validation
    pub indexed: usize,

    /// quizzes with a usable body, all of them are linked from the index page
    pub quizzes: usize,

    /// quiz pages that could not be rendered
    pub skipped: usize,

    /// every file written, index page first
    pub written: Vec<PathBuf>,
}

/// Runs the whole pipeline: validate the index, load the quizzes, then write
/// the index page and one page per quiz into the output directory.
pub fn build_site(config: &Config) -> anyhow::Result<BuildReport> {
    let entries = match read_json(&config.index_path) {
        Ok(index) => validate_index(&index, &config.data_dir),
        Err(reason) => {
            warn!("no usable index: {}", reason);
            Vec::new()
        }
    };
    let mut report = BuildReport {
        indexed: entries.len(),
        ..Default::default()
    };
    info!("{} index entries are valid", entries.len());

    let items = normalize(entries, &config.data_dir);
    report.quizzes = items.len();

    create_output_dir(&config.output_dir).context("failed to create output directory")?;

    let index_path = config.output_dir.join(INDEX_PAGE);
    write_file(&index_path, &render_index_page(&items, &config.site))?;
    report.written.push(index_path);

    for item in &items {
        match write_quiz_page(item, config)? {
            Some(path) => report.written.push(path),
            None => report.skipped += 1,
        }
    }

    info!(
        "wrote {} files to {}",
        report.written.len(),
        config.output_dir.display()
    );
    Ok(report)
}

/// Writes one quiz page, or returns `None` when the quiz had nothing to render.
fn write_quiz_page(item: &QuizItem, config: &Config) -> anyhow::Result<Option<PathBuf>> {
    let html = match render_quiz_page(item, &config.site) {
        Ok(html) => html,
        Err(reason) => {
            warn!("{}", reason);
            return Ok(None);
        }
    };

    let path = config.output_dir.join(page_name(item.file()));
    write_file(&path, &html)?;

    Ok(Some(path))
}

fn create_output_dir(output_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)?;
    Ok(())
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).context(format!("failed to write {}", path.display()))
}
