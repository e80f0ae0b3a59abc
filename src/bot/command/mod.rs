//! Bot command names, registration and parsing.
//!
//! A command reaches the bot three ways: as a slash command, as a menu modal
//! submission, or as a prefixed chat message. All three are turned into a
//! `BotCommand` here so the handlers only differ in how they reply.

pub mod args;
pub mod register;

use crate::{bot::action::LicenseCommand, error::input::InputError};

use self::args::CommandArgs;

pub const GENERATE: &str = "generate";
pub const DELETE: &str = "delete";
pub const RESET_HWID: &str = "resethwid";
pub const KEY_INFO: &str = "info";
pub const USER_INFO: &str = "userinfo";
pub const MENU: &str = "menu";
pub const HELP: &str = "helpme";

#[derive(Debug, Clone, PartialEq)]
pub enum BotCommand {
    Menu,
    Help,
    License(LicenseCommand),
}

impl BotCommand {
    /// Parses the command called `name`.
    ///
    /// # Returns
    /// - `Ok(Some(command))` - Known command with valid arguments
    /// - `Ok(None)` - Unknown command name
    /// - `Err(InputError)` - Known command with invalid arguments
    pub fn parse(name: &str, args: &CommandArgs) -> Result<Option<Self>, InputError> {
        match name {
            MENU => Ok(Some(Self::Menu)),
            HELP => Ok(Some(Self::Help)),
            _ => Ok(LicenseCommand::parse(name, args)?.map(Self::License)),
        }
    }

    /// Parses a prefix command from the words following the command name.
    pub fn parse_positional(name: &str, words: &[&str]) -> Result<Option<Self>, InputError> {
        let args = CommandArgs::from_positional(positional_names(name), words);
        Self::parse(name, &args)
    }
}

/// Whether `name` is one of the bot's commands.
pub fn is_known(name: &str) -> bool {
    matches!(
        name,
        GENERATE | DELETE | RESET_HWID | KEY_INFO | USER_INFO | MENU | HELP
    )
}

/// Argument names of a prefix command, in the order they are typed.
pub fn positional_names(name: &str) -> &'static [&'static str] {
    match name {
        GENERATE => &["expiry", "level", "amount"],
        DELETE => &["key", "delete_user"],
        RESET_HWID | KEY_INFO | USER_INFO => &["key"],
        _ => &[],
    }
}
