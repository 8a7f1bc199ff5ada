use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
    time::SystemTime,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod remove_browser;

const BIN_NAME: &str = "locale-patch";

/// Default locales root, relative to the project directory.
pub const LOCALES: &str = "webview-ui/src/i18n/locales";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a file under the default locales root, e.g. `("fr", "chat.json")`.
    pub fn write_locale_file(&self, locale: &str, file_name: &str, content: &str) -> Result<()> {
        self.write_file(&format!("{}/{}/{}", LOCALES, locale, file_name), content)
    }

    pub fn read_locale_file(&self, locale: &str, file_name: &str) -> Result<String> {
        self.read_file(&format!("{}/{}/{}", LOCALES, locale, file_name))
    }

    pub fn modified(&self, path: &str) -> Result<SystemTime> {
        let file_path = self.project_dir.join(path);
        fs::metadata(&file_path)
            .and_then(|meta| meta.modified())
            .with_context(|| format!("Failed to stat file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn add_experiment_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("add-experiment");
        cmd
    }

    pub fn remove_browser_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("remove-browser");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
