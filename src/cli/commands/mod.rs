pub mod add_experiment;
mod command_result;
pub mod context;
pub mod init;
pub mod remove_browser;

pub use command_result::*;
