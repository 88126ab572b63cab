use std::{env, path::PathBuf};

use anyhow::Context;
use quizgen::{build_site, Config};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let path = args.next().map(PathBuf::from);
    Config::resolve(path.as_deref())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&env::var("RUST_LOG").unwrap_or_else(|_| String::from("info")))
        .init();

    let config = match parse_config(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: quizgen [config.yaml]");
            return Err(e);
        }
    };

    let report = build_site(&config).context("failed to build quiz site")?;

    println!(
        "rendered {BOLD}{}{RESET} of {BOLD}{}{RESET} indexed quizzes into {BOLD}{}{RESET}",
        report.quizzes - report.skipped,
        report.indexed,
        config.output_dir.display()
    );

    Ok(())
}
