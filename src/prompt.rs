use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Checks a line of input, returning the message to show when it is rejected.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive questions asked by the command handlers.
pub trait Prompter {
    /// Pick one of `choices`, returning its index.
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<usize>;
    /// Ask for a line of text, re-asking until `validate` accepts it.
    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String>;
}

#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<usize> {
        let idx = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(default)
            .interact()?;
        Ok(idx)
    }

    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        let value = input
            .validate_with(|v: &String| validate(v.as_str()))
            .interact_text()?;
        Ok(value)
    }
}
