//! Dispatch a parsed command line to its command handler.
//!
//! Each file outcome is printed as soon as the command produces it; the
//! closing `done` follows once the command succeeds. `init` prints its own
//! message.
//!
//! # Returns
//! - `Ok(ExitStatus)`: `Failure` only when `--check` finds pending changes
//! - `Err` if the command fails (e.g., missing source key, malformed JSON)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandKind, CommandResult, add_experiment::add_experiment, init::init,
        remove_browser::remove_browser,
    },
    exit_status::ExitStatus,
    report,
};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    match args.command {
        Some(Command::AddExperiment(args)) => {
            let result = add_experiment(&args, &mut |file| {
                report::print_file(CommandKind::AddExperiment, file, verbose)
            })?;
            Ok(finish(&result, verbose))
        }
        Some(Command::RemoveBrowser(args)) => {
            let result = remove_browser(&args, &mut |file| {
                report::print_file(CommandKind::RemoveBrowser, file, verbose)
            })?;
            Ok(finish(&result, verbose))
        }
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn finish(result: &CommandResult, verbose: bool) -> ExitStatus {
    report::print_summary(result, verbose);
    result.exit_status()
}
