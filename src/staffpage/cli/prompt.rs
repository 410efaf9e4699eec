//! Line-level terminal interaction behind a trait, so both editors can be driven by a
//! script in tests.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use staffpage::error::{Result, StaffError};
use std::io;

pub trait Prompter {
    /// Shows a line of output.
    fn say(&mut self, text: &str);

    /// Reads a trimmed line; a blank answer yields `default`.
    fn ask(&mut self, prompt: &str, default: &str) -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Picks one of `items`; `None` when the user backs out.
    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}

fn prompt_error(err: dialoguer::Error) -> StaffError {
    StaffError::Io(io::Error::other(err.to_string()))
}

#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn ask(&mut self, prompt: &str, default: &str) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text().map_err(prompt_error)?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)
    }
}

/// Answers prompts from a fixed script and records everything shown.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.output.push(format!("? {}", prompt));
        self.answers.pop_front().ok_or_else(|| {
            StaffError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("script ran out at prompt: {}", prompt),
            ))
        })
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn ask(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.next(prompt)?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = self.next(prompt)?;
        Ok(match answer.trim().to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Answers pick the first item containing them; a blank answer backs out.
    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let answer = self.next(prompt)?;
        if answer.trim().is_empty() {
            return Ok(None);
        }
        items
            .iter()
            .position(|item| item.contains(answer.trim()))
            .map(Some)
            .ok_or_else(|| {
                StaffError::Api(format!("no item matching '{}' in {:?}", answer, items))
            })
    }
}
