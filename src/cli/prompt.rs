//! Reading user input.
//!
//! The shell asks for input through the [`Prompt`] trait, so that it can be
//! driven by a terminal in production and by a script in tests.

use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};

use crate::cli::terminal::Palette;

/// A source of answers to the shell's questions.
pub trait Prompt {
    /// Asks for a line of free text. Empty answers are allowed.
    fn text(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Asks for a non-negative whole number.
    ///
    /// Implementations keep asking until a valid number is entered.
    fn number(&mut self, prompt: &str) -> anyhow::Result<u32>;

    /// Asks the user to pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<usize>;
}

/// Interactive prompts on the controlling terminal.
pub struct Terminal {
    theme: Box<dyn Theme>,
}

impl Terminal {
    pub fn new(palette: Palette) -> Self {
        let theme: Box<dyn Theme> = if palette.enabled() {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompt for Terminal {
    fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
        let answer = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn number(&mut self, prompt: &str) -> anyhow::Result<u32> {
        let answer = Input::<u32>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .interact_text()?;
        Ok(answer)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<usize> {
        let choice = Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(choice)
    }
}
