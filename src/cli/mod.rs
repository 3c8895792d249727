//! CLI module - argument parsing, interactive wizard and headless flow

mod args;
pub mod config;
pub mod file_selector;
pub mod headless;
mod prompts;
pub mod wizard;

pub use args::{Cli, Commands};
pub use config::RunConfig;
pub use headless::{run_headless, HeadlessOptions};
pub use prompts::*;
pub use wizard::{run_wizard, WizardOutcome};
