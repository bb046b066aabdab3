use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use log::warn;

use crate::template_variables::project_name::validate_project_name;
use crate::template_variables::project_title::validate_project_title;

/// Ask for a project name until one passes validation.
pub fn project_name() -> Result<String> {
    prompt_until_valid("🤷 Project name", None, validate_project_name)
}

/// Ask for the display title, defaulting to the title-cased name.
pub fn project_title(default: &str) -> Result<String> {
    prompt_until_valid(
        "🤷 Formatted project title",
        Some(default),
        validate_project_title,
    )
}

// Blocking prompt loop; a rejected answer is reported and the same question
// asked again.
fn prompt_until_valid(
    prompt: &str,
    default: Option<&str>,
    validate: impl Fn(&str) -> Result<(), String>,
) -> Result<String> {
    loop {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_owned());
        }
        let answer = input.interact()?;
        match validate(&answer) {
            Ok(()) => break Ok(answer),
            Err(reason) => {
                warn!(
                    "{} \"{}\": {}",
                    style("Sorry,").bold().red(),
                    style(&answer).bold().yellow(),
                    style(&reason).bold().red()
                );
            }
        }
    }
}
