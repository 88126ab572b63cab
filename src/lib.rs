//! Renders quizzes authored as JSON into a static HTML site.
//!
//! An index document lists quiz files and titles. Each valid quiz becomes a
//! page with a multiple-choice form that checks itself in the browser, and an
//! index page links them all.

pub mod build;
pub mod config;
pub mod quiz;
pub mod render;

pub use build::{build_site, BuildReport};
pub use config::Config;
