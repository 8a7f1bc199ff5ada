use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// One locale bundle: an immediate subdirectory of the locales root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    pub path: PathBuf,
}

impl LocaleDir {
    /// Path of a file inside this locale, e.g. `settings.json`.
    pub fn file(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

/// List the locale directories directly under `root`, sorted by name.
///
/// Plain files and dangling symlinks next to the locale directories are
/// ignored. Only an unreadable root is an error.
pub fn scan_locale_dirs(root: &Path) -> Result<Vec<LocaleDir>> {
    if !root.is_dir() {
        bail!("Locales directory not found: {}", root.display());
    }

    let mut locales = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 && !err.path().is_some_and(Path::is_dir) => continue,
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read locales directory: {}", root.display())
                });
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        locales.push(LocaleDir {
            path: entry.into_path(),
        });
    }

    Ok(locales)
}
