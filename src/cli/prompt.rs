use crate::errors::{BranchToolError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Interactive questions the tasks ask the user
pub trait Prompter {
    /// Yes/no question
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Pick one of `items`, returning its index
    fn select(&self, message: &str, items: &[String]) -> Result<usize>;

    /// Free text answer; empty answers are rejected
    fn input(&self, message: &str) -> Result<String>;
}

/// `Prompter` backed by dialoguer on the controlling terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        if items.is_empty() {
            return Err(BranchToolError::prompt("Nothing to choose from"));
        }

        Ok(Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&self, message: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|value: &String| -> std::result::Result<(), &str> {
                if value.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok(answer.trim().to_string())
    }
}
