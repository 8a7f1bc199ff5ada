//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `add-experiment`: Copy a new `experimental` settings key from the source
//!   locale into every other locale
//! - `remove-browser`: Remove the browser tool's strings from every locale
//! - `init`: Write a default configuration file
//!
//! Both editing commands run with no arguments; every flag only overrides a
//! default.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{DEFAULT_ANCHOR, DEFAULT_KEY, DEFAULT_SECTION, Insertion};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::AddExperiment(args)) => args.common.verbose,
            Some(Command::RemoveBrowser(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the editing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locales directory (overrides config file)
    #[arg(long, env = "LOCALE_PATCH_ROOT")]
    pub root: Option<PathBuf>,

    /// Locale used as the source of truth (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Show which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit with status 1 if any file would change
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct AddExperimentArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Section the key is inserted into
    #[arg(long, default_value = DEFAULT_SECTION)]
    pub section: String,

    /// Key to propagate from the source locale
    #[arg(long, default_value = DEFAULT_KEY)]
    pub key: String,

    /// Existing key the new key is placed after
    #[arg(long, default_value = DEFAULT_ANCHOR)]
    pub anchor: String,
}

impl AddExperimentArgs {
    pub fn insertion(&self) -> Insertion {
        Insertion {
            section: self.section.clone(),
            key: self.key.clone(),
            anchor: self.anchor.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RemoveBrowserArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Insert an experimental settings key into every locale, after its anchor key
    AddExperiment(AddExperimentArgs),
    /// Remove browser tool strings from settings, kilocode, chat and prompts files
    RemoveBrowser(RemoveBrowserArgs),
    /// Initialize a new .localepatchrc.json configuration file
    Init,
}
