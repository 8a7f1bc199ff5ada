use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use super::command_result::{FileOutcome, FileStatus, WriteMode};
use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{JsonEditor, LocaleDir, scan_locale_dirs},
};

/// Resolved settings for one run of an editing command.
///
/// Command-line flags win over the config file, which wins over defaults.
#[derive(Debug, Clone)]
pub struct PatchContext {
    pub locales_root: PathBuf,
    pub source_locale: String,
    pub mode: WriteMode,
}

impl PatchContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        Self::from_dir(args, &cwd)
    }

    /// Build a context, looking for the config file from `start_dir` upwards.
    pub fn from_dir(args: &CommonArgs, start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        let locales_root = match &args.root {
            Some(root) => root.clone(),
            None => loaded.locales_root(),
        };
        let source_locale = args
            .source_locale
            .clone()
            .unwrap_or(loaded.config.source_locale);

        Ok(Self {
            locales_root,
            source_locale,
            mode: WriteMode::from_flags(args.dry_run, args.check),
        })
    }

    pub fn locales(&self) -> Result<Vec<LocaleDir>> {
        scan_locale_dirs(&self.locales_root)
    }

    /// Path of a file in the source locale's directory.
    pub fn source_file(&self, file_name: &str) -> PathBuf {
        self.locales_root.join(&self.source_locale).join(file_name)
    }

    /// Persist an edited document according to the write mode.
    ///
    /// Nothing is written when the rendered text matches the file on disk.
    pub fn commit(&self, editor: &mut JsonEditor, changes: Vec<String>) -> Result<FileOutcome> {
        let status = if self.mode.writes() {
            if editor.save()? {
                FileStatus::Updated
            } else {
                FileStatus::Unchanged
            }
        } else if editor.is_changed()? {
            FileStatus::WouldUpdate
        } else {
            FileStatus::Unchanged
        };

        Ok(FileOutcome {
            path: editor.path().to_path_buf(),
            status,
            changes,
        })
    }
}
