//! CLI demo entry point.
//!
//! # Responsibility
//! - Walk through build, copy, assign, save and load on a sample newsletter.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `newsletter_cli [OUTPUT_PATH]`. Logging is enabled only when
//! `NEWSLETTER_LOG_DIR` is set; `NEWSLETTER_LOG_LEVEL` overrides the level.

use log::info;
use newsletter_core::{core_version, init_logging, Item, LoggingConfig, Newsletter};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "NEWSLETTER_LOG_DIR";
const LOG_LEVEL_ENV: &str = "NEWSLETTER_LOG_LEVEL";
const DEFAULT_FILE_NAME: &str = "weekly_newsletter.txt";

fn main() -> ExitCode {
    if let Err(message) = setup_logging() {
        eprintln!("logging disabled: {message}");
    }

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_FILE_NAME));

    match run(output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let config = match std::env::var(LOG_LEVEL_ENV) {
        Ok(level) => LoggingConfig::new(&level, &log_dir)?,
        Err(_) => LoggingConfig::with_default_level(&log_dir)?,
    };
    init_logging(&config)
}

fn run(output: PathBuf) -> Result<(), String> {
    println!("newsletter_core version={}", core_version());
    info!("event=demo_start module=cli status=start");

    let mut weekly_update = Newsletter::new("Weekly Update");
    weekly_update.add_item(&Item::text("This is a note from Rob."));
    weekly_update.add_item(&Item::picture("RobFlattering.jpg"));
    println!("Newsletter details:\n{weekly_update}");

    let mut copy = weekly_update.clone();
    println!("Copy of the newsletter:\n{copy}");

    copy.add_item(&Item::text("This is a note from Nik"));
    copy.add_item(&Item::picture("Nik.jpg"));
    println!("Copy after adding items:\n{copy}");
    println!("Original is unchanged:\n{weekly_update}");

    weekly_update.clone_from(&copy);
    println!("Original after assignment:\n{weekly_update}");

    weekly_update
        .save(&output)
        .map_err(|err| format!("save failed: {err}"))?;
    println!("Saved to {}", output.display());

    let mut restored = Newsletter::default();
    let report = restored
        .load(&output)
        .map_err(|err| format!("load failed: {err}"))?;
    println!(
        "Loaded {} item(s), skipped {} line(s):\n{restored}",
        report.items_loaded,
        report.skipped_lines.len()
    );

    info!("event=demo_start module=cli status=ok");
    Ok(())
}
