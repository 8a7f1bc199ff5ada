use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json, find_config_file};

/// Write a default config into the current directory.
///
/// Refuses when a config is already in effect here, whether it sits in this
/// directory or in a parent below the repository root.
pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    if let Some(existing) = find_config_file(&cwd) {
        eprintln!("Error: {} already exists", existing.display());
        return Ok(ExitStatus::Failure);
    }

    let config_path = cwd.join(CONFIG_FILE_NAME);
    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
