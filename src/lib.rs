//! locale-patch - batch edits for webview locale JSON files
//!
//! Every locale of the webview keeps its strings in a directory of JSON files
//! (`<root>/<locale>/settings.json`, `chat.json`, ...). locale-patch applies
//! one-off migrations to all of them at once while keeping each file's key
//! order and indentation style, and only rewrites files whose text changes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale discovery, JSON round-tripping and document transforms

pub mod cli;
pub mod config;
pub mod core;
