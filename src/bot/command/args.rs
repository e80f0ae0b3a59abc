//! Command arguments independent of how the command was invoked.
//!
//! Slash command options, modal form inputs and prefix command words all end up in a
//! `CommandArgs` map so the commands are parsed by a single piece of code.

use std::collections::HashMap;

use serenity::all::{ActionRow, ActionRowComponent, ResolvedOption, ResolvedValue};

use crate::{
    error::input::InputError,
    util::parse::{check_key_amount, parse_key_amount, parse_yes_no, require_text},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandArgs(HashMap<String, ArgValue>);

impl CommandArgs {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, builder style.
    #[cfg(test)]
    pub fn with(mut self, name: &str, value: ArgValue) -> Self {
        self.0.insert(name.to_string(), value);
        self
    }

    /// Collects the options of a slash command.
    pub fn from_resolved(options: &[ResolvedOption<'_>]) -> Self {
        let args = options
            .iter()
            .filter_map(|option| {
                let value = match option.value {
                    ResolvedValue::String(value) => ArgValue::Text(value.to_string()),
                    ResolvedValue::Integer(value) => ArgValue::Integer(value),
                    ResolvedValue::Boolean(value) => ArgValue::Boolean(value),
                    _ => return None,
                };
                Some((option.name.to_string(), value))
            })
            .collect();

        Self(args)
    }

    /// Collects the text inputs of a submitted modal, keyed by input custom ID.
    pub fn from_modal(rows: &[ActionRow]) -> Self {
        let args = rows
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => Some((
                    input.custom_id.clone(),
                    ArgValue::Text(input.value.clone().unwrap_or_default()),
                )),
                _ => None,
            })
            .collect();

        Self(args)
    }

    /// Assigns positional words to argument names, in order.
    ///
    /// Extra words are ignored; missing words leave the argument unset.
    pub fn from_positional(names: &[&str], words: &[&str]) -> Self {
        let args = names
            .iter()
            .zip(words.iter())
            .map(|(name, word)| (name.to_string(), ArgValue::Text(word.to_string())))
            .collect();

        Self(args)
    }

    /// Text value of an argument, if present and not blank.
    pub fn text(&self, name: &str) -> Option<String> {
        let value = match self.0.get(name)? {
            ArgValue::Text(value) => value.trim().to_string(),
            ArgValue::Integer(value) => value.to_string(),
            ArgValue::Boolean(value) => value.to_string(),
        };

        (!value.is_empty()).then_some(value)
    }

    /// Text value of an argument, or `default` when absent or blank.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or_else(|| default.to_string())
    }

    /// Required text argument.
    pub fn required_text(&self, name: &str) -> Result<String, InputError> {
        require_text(name, self.text(name).as_deref())
    }

    /// Number of keys to generate, `default` when absent.
    pub fn key_amount(&self, name: &str, default: u32) -> Result<u32, InputError> {
        match self.0.get(name) {
            Some(ArgValue::Integer(value)) => check_key_amount(*value),
            Some(_) => match self.text(name) {
                Some(text) => parse_key_amount(&text),
                None => Ok(default),
            },
            None => Ok(default),
        }
    }

    /// Boolean flag; text values are read as yes/no answers.
    pub fn flag(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(ArgValue::Boolean(value)) => *value,
            Some(ArgValue::Integer(value)) => *value == 1,
            Some(ArgValue::Text(value)) => parse_yes_no(value),
            None => false,
        }
    }
}
