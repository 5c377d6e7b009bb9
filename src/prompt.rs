//! User interaction.
//! The [`Prompter`] trait keeps dialoguer out of the generation logic so
//! runs can be scripted in tests.

use dialoguer::{Confirm, FuzzySelect};

use crate::error::{Error, Result};

pub trait Prompter {
    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;

    /// Lets the user pick one of `items`; returns its index.
    fn select(&self, prompt: String, items: &[String]) -> Result<usize>;
}

#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: String, items: &[String]) -> Result<usize> {
        if items.is_empty() {
            return Err(Error::PromptError("nothing to choose from".to_string()));
        }
        FuzzySelect::new()
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
