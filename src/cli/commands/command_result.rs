use std::path::PathBuf;

use super::super::exit_status::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    AddExperiment,
    RemoveBrowser,
}

impl CommandKind {
    /// Verb used when listing the key paths a command touched.
    pub fn change_verb(&self) -> &'static str {
        match self {
            CommandKind::AddExperiment => "added",
            CommandKind::RemoveBrowser => "removed",
        }
    }
}

/// Whether a command writes files or only reports what it would write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Apply,
    DryRun,
    /// Dry run that fails when anything would change.
    Check,
}

impl WriteMode {
    pub fn from_flags(dry_run: bool, check: bool) -> Self {
        if check {
            WriteMode::Check
        } else if dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Apply
        }
    }

    pub fn writes(&self) -> bool {
        matches!(self, WriteMode::Apply)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The locale has no file of this name.
    MissingFile,
    /// The key to insert is already there.
    AlreadyPresent,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingFile => "no such file",
            SkipReason::AlreadyPresent => "key already present",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Updated,
    WouldUpdate,
    Unchanged,
    Skipped(SkipReason),
}

/// What happened to one locale file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Key paths added or removed in this file.
    pub changes: Vec<String>,
}

impl FileOutcome {
    pub fn skipped(path: PathBuf, reason: SkipReason) -> Self {
        Self {
            path,
            status: FileStatus::Skipped(reason),
            changes: Vec::new(),
        }
    }
}

/// Result of running an editing command.
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub mode: WriteMode,
    /// Number of locale directories visited.
    pub locales_checked: usize,
    /// One entry per candidate file, in visiting order.
    pub files: Vec<FileOutcome>,
}

impl CommandResult {
    pub fn updated_count(&self) -> usize {
        self.count(FileStatus::Updated)
    }

    pub fn pending_count(&self) -> usize {
        self.count(FileStatus::WouldUpdate)
    }

    fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    /// `--check` fails while files still need updating; everything else succeeds.
    pub fn exit_status(&self) -> ExitStatus {
        if self.mode == WriteMode::Check && self.pending_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
