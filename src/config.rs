use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".localepatchrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one subdirectory per locale.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    /// Locale whose values are copied into the other locales.
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
}

fn default_locales_root() -> String {
    "webview-ui/src/i18n/locales".to_string()
}

fn default_source_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            source_locale: default_source_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locales_root.trim().is_empty() {
            bail!("'localesRoot' must not be empty");
        }
        if self.source_locale.trim().is_empty() {
            bail!("'sourceLocale' must not be empty");
        }
        if self.source_locale.contains(['/', '\\']) {
            bail!(
                "'sourceLocale' must be a directory name, got \"{}\"",
                self.source_locale
            );
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory containing the config file; `None` when using defaults.
    pub base_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// The locales root, resolved against the config file's directory.
    pub fn locales_root(&self) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(&self.config.locales_root),
            None => PathBuf::from(&self.config.locales_root),
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                base_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: None,
        }),
    }
}
