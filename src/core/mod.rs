//! Core editing engine: locale discovery, JSON round-tripping and the
//! document transformations applied by the CLI commands.
//!
//! Everything here is side-effect free except [`JsonEditor::save`], which is
//! the only place a locale file is written.

mod indent;
mod insert;
mod json_editor;
pub mod key_path;
mod locales;
mod remove;

pub use indent::Indent;
pub use insert::{
    DEFAULT_ANCHOR, DEFAULT_KEY, DEFAULT_SECTION, InsertOutcome, Insertion, insert_after,
};
pub use json_editor::{JsonEditor, render};
pub use locales::{LocaleDir, scan_locale_dirs};
pub use remove::{BROWSER_RULES, RemovalRule};
