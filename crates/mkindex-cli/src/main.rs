use anyhow::{Context, Result};
use clap::Parser;
use mkindex_config::Config;
use mkindex_engine::{IndexOptions, IndexReport, generate_index, io};
use std::path::PathBuf;
use std::process;

/// Generate an index.md page summarising every markdown file in a directory
#[derive(Parser, Debug)]
#[command(name = "mkindex", version, about, long_about = None)]
struct Cli {
    /// Category directory containing the markdown files to index
    category_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    // Usage errors exit 1; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            process::exit(code);
        }
    };

    match run(&cli) {
        Ok(report) => println!("Generated {}", report.output_path.display()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<IndexReport> {
    let options = index_options(&load_config());

    io::validate_category_dir(&cli.category_dir).with_context(|| {
        format!(
            "Category path '{}' is invalid",
            cli.category_dir.display()
        )
    })?;

    let report = generate_index(&cli.category_dir, &options)
        .with_context(|| format!("Failed to index '{}'", cli.category_dir.display()))?;

    log::info!(
        "Indexed {} documents under \"{}\"",
        report.written.len(),
        report.title
    );
    if !report.skipped.is_empty() {
        log::info!("Skipped unreadable: {}", report.skipped.join(", "));
    }

    Ok(report)
}

/// Load the user config, falling back to defaults when it is missing or broken
fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    }
}

fn index_options(config: &Config) -> IndexOptions {
    IndexOptions {
        summary_lines: config.summary_lines,
        demote_headings: config.demote_headings,
        ..IndexOptions::default()
    }
}
