//! User input and interaction handling.
//! The orchestration talks to the user only through the [`Prompter`] trait;
//! [`DialoguerPrompter`] is the terminal implementation.

use dialoguer::{Confirm, Input, Password, Select};

use crate::error::Result;
use crate::flavor::Flavor;
use crate::project::{is_valid_project_name, NAME_RULE};

/// Trait for asking the user questions.
pub trait Prompter {
    /// Single-choice menu of project flavors.
    fn select_flavor(&self, flavors: &[Flavor]) -> Result<Flavor>;

    /// Asks for a project name. Implementations must only return names that
    /// pass [`is_valid_project_name`].
    fn project_name(&self, default: &str) -> Result<String>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Free-form input that is not echoed to the terminal.
    fn secret(&self, prompt: &str) -> Result<String>;
}

/// Input validator for the project name prompt.
#[allow(clippy::ptr_arg)]
pub fn validate_name_input(input: &String) -> std::result::Result<(), &'static str> {
    if is_valid_project_name(input) {
        Ok(())
    } else {
        Err(NAME_RULE)
    }
}

/// Prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select_flavor(&self, flavors: &[Flavor]) -> Result<Flavor> {
        let items: Vec<String> = flavors
            .iter()
            .map(|flavor| {
                let profile = flavor.profile();
                format!("{} - {}", profile.label, profile.description)
            })
            .collect();

        let selection = Select::new()
            .with_prompt("Which type of project do you want to create?")
            .default(0)
            .items(&items)
            .interact()?;

        Ok(flavors[selection])
    }

    fn project_name(&self, default: &str) -> Result<String> {
        let name = Input::<String>::new()
            .with_prompt("What is the name of your project?")
            .default(default.to_string())
            .validate_with(validate_name_input)
            .interact_text()?;

        Ok(name)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        Ok(Password::new().with_prompt(prompt).interact()?)
    }
}
