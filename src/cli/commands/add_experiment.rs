use anyhow::{Result, bail};
use serde_json::Value;

use super::{
    command_result::{CommandKind, CommandResult, FileOutcome, SkipReason},
    context::PatchContext,
};
use crate::{
    cli::args::AddExperimentArgs,
    core::{InsertOutcome, Insertion, JsonEditor},
};

pub const SETTINGS_FILE: &str = "settings.json";

pub fn add_experiment(
    args: &AddExperimentArgs,
    on_file: &mut impl FnMut(&FileOutcome),
) -> Result<CommandResult> {
    let ctx = PatchContext::new(&args.common)?;
    run(&ctx, &args.insertion(), on_file)
}

/// Insert `insertion.key` into every locale's settings file.
///
/// The source locale must already define the key; its value is copied as-is.
/// This check happens before any file is touched.
pub fn run(
    ctx: &PatchContext,
    insertion: &Insertion,
    on_file: &mut impl FnMut(&FileOutcome),
) -> Result<CommandResult> {
    let locales = ctx.locales()?;
    let value = source_value(ctx, insertion)?;

    let mut files = Vec::new();
    let mut record = |outcome: FileOutcome| {
        on_file(&outcome);
        files.push(outcome);
    };
    for locale in &locales {
        let path = locale.file(SETTINGS_FILE);
        let Some(mut editor) = JsonEditor::open_if_exists(&path)? else {
            record(FileOutcome::skipped(path, SkipReason::MissingFile));
            continue;
        };

        match insertion.apply(editor.data_mut(), &value) {
            InsertOutcome::AlreadyPresent => {
                record(FileOutcome::skipped(path, SkipReason::AlreadyPresent));
            }
            InsertOutcome::AfterAnchor | InsertOutcome::Appended => {
                record(ctx.commit(&mut editor, vec![insertion.key_path()])?);
            }
        }
    }

    Ok(CommandResult {
        kind: CommandKind::AddExperiment,
        mode: ctx.mode,
        locales_checked: locales.len(),
        files,
    })
}

fn source_value(ctx: &PatchContext, insertion: &Insertion) -> Result<Value> {
    let source = JsonEditor::open_if_exists(&ctx.source_file(SETTINGS_FILE))?;
    match source
        .as_ref()
        .and_then(|editor| insertion.source_value(editor.data()))
    {
        Some(value) => Ok(value.clone()),
        None => bail!(
            "Missing {} in {} settings",
            insertion.key,
            ctx.source_locale
        ),
    }
}
