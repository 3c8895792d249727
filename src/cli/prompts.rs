//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm starting the simulated run
pub fn confirm_start_run(dataset: &str) -> Result<bool> {
    let target = if dataset.is_empty() {
        "no dataset".to_string()
    } else {
        format!("'{}'", dataset)
    };
    confirm_step(&format!("Start pipeline on {}?", target))
}
