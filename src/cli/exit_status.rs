use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; files were updated or already up to date
/// - `Failure` (1): `--check` found files that still need updating
/// - `Error` (2): Command failed (missing source key, unreadable or malformed JSON, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Check mode found pending changes.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
