use anyhow::Result;

use super::{
    command_result::{CommandKind, CommandResult, FileOutcome, SkipReason},
    context::PatchContext,
};
use crate::{
    cli::args::RemoveBrowserArgs,
    core::{BROWSER_RULES, JsonEditor, RemovalRule},
};

pub fn remove_browser(
    args: &RemoveBrowserArgs,
    on_file: &mut impl FnMut(&FileOutcome),
) -> Result<CommandResult> {
    let ctx = PatchContext::new(&args.common)?;
    run(&ctx, BROWSER_RULES, on_file)
}

/// Apply every removal rule to the matching file of every locale.
///
/// Files are re-rendered even when no key was removed, so a file whose
/// formatting drifted from the canonical layout is rewritten as well.
///
/// `on_file` sees each outcome as soon as it is known, so files written before
/// a later error are still reported.
pub fn run(
    ctx: &PatchContext,
    rules: &[RemovalRule],
    on_file: &mut impl FnMut(&FileOutcome),
) -> Result<CommandResult> {
    let locales = ctx.locales()?;

    let mut files = Vec::new();
    let mut record = |outcome: FileOutcome| {
        on_file(&outcome);
        files.push(outcome);
    };
    for locale in &locales {
        for rule in rules {
            let path = locale.file(rule.file_name);
            let Some(mut editor) = JsonEditor::open_if_exists(&path)? else {
                record(FileOutcome::skipped(path, SkipReason::MissingFile));
                continue;
            };

            let removed = rule.apply(editor.data_mut());
            let changes = removed.into_iter().map(String::from).collect();
            record(ctx.commit(&mut editor, changes)?);
        }
    }

    Ok(CommandResult {
        kind: CommandKind::RemoveBrowser,
        mode: ctx.mode,
        locales_checked: locales.len(),
        files,
    })
}
