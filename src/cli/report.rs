//! Report formatting and printing utilities.
//!
//! Separate from the commands so that they can be used as a library without
//! printing side effects. Commands hand each [`FileOutcome`] to a callback as
//! soon as it is known, so a file rewritten before a later failure is still
//! reported.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandKind, CommandResult, FileOutcome, FileStatus, WriteMode};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print one file's outcome to stdout.
///
/// `updated: <path>` for a rewritten file; verbose mode also lists the touched
/// key paths and every file that was left alone.
pub fn print_file(kind: CommandKind, file: &FileOutcome, verbose: bool) {
    print_file_to(kind, file, verbose, &mut io::stdout().lock());
}

/// Print one file's outcome to a custom writer.
pub fn print_file_to<W: Write>(kind: CommandKind, file: &FileOutcome, verbose: bool, writer: &mut W) {
    let path = file.path.display();
    match file.status {
        FileStatus::Updated => {
            let _ = writeln!(writer, "{} {}", "updated:".green(), path);
        }
        FileStatus::WouldUpdate => {
            let _ = writeln!(writer, "{} {}", "would update:".yellow(), path);
        }
        FileStatus::Unchanged if verbose => {
            let _ = writeln!(writer, "{}", format!("unchanged: {}", path).dimmed());
        }
        FileStatus::Skipped(reason) if verbose => {
            let _ = writeln!(
                writer,
                "{}",
                format!("skipped: {} ({})", path, reason.as_str()).dimmed()
            );
        }
        FileStatus::Unchanged | FileStatus::Skipped(_) => {}
    }

    let touched = matches!(file.status, FileStatus::Updated | FileStatus::WouldUpdate);
    if verbose && touched {
        for change in &file.changes {
            let _ = writeln!(writer, "  - {} {}", kind.change_verb(), change);
        }
    }
}

/// Print the closing lines of a run to stdout. The last line is always `done`.
pub fn print_summary(result: &CommandResult, verbose: bool) {
    print_summary_to(result, verbose, &mut io::stdout().lock());
}

/// Print the closing lines of a run to a custom writer.
pub fn print_summary_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    if verbose {
        let (count, verb) = if result.mode.writes() {
            (result.updated_count(), "updated")
        } else {
            (result.pending_count(), "would be updated")
        };
        let _ = writeln!(
            writer,
            "{} file(s) {} across {} locale(s)",
            count, verb, result.locales_checked
        );
    }

    if result.mode == WriteMode::Check && result.pending_count() > 0 {
        let _ = writeln!(
            writer,
            "{} file(s) need updating. Run without {} to apply.",
            result.pending_count(),
            "--check".cyan()
        );
    }

    let _ = writeln!(writer, "done");
}
