use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Asks how many resources to create. Defaults to 1 and re-prompts until the answer
/// is a positive integer.
pub(crate) fn count(what: &str) -> Result<usize> {
    let count: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("How many {} should be created?", what))
        .default(1)
        .validate_with(|value: &usize| {
            if *value >= 1 {
                Ok(())
            } else {
                Err("enter a positive integer")
            }
        })
        .interact_text()
        .context("Unable to read the count")?;
    Ok(count)
}

/// Offers the namespace detected from the kube context; the user accepts it or types
/// a replacement. The replacement is not validated against the cluster.
pub(crate) fn namespace(detected: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Target namespace")
        .default(detected.to_string())
        .interact_text()
        .context("Unable to read the namespace")
}

pub(crate) fn required_string(prompt_text: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt_text)
        .interact_text()
        .context("Unable to read the answer")
}

pub(crate) fn confirm(prompt_text: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt_text)
        .default(default)
        .interact()
        .context("Unable to read the answer")
}
