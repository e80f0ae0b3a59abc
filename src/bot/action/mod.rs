//! License operations as the bot runs them.
//!
//! Each action turns validated command input into one license API call and renders
//! the result as an embed. Actions are invoked the same way from slash commands, from
//! the menu's modal forms and from prefix commands.

pub mod delete;
pub mod generate;
pub mod key_info;
pub mod reset_hwid;
pub mod user_info;

use serenity::all::CreateEmbed;

use crate::{
    bot::command::{
        args::CommandArgs, DELETE, GENERATE, KEY_INFO, RESET_HWID, USER_INFO,
    },
    error::input::InputError,
    model::license::DeleteLicenseParams,
    state::AppState,
};

use self::generate::GenerateInput;

/// A license operation with its validated input.
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseCommand {
    Generate(GenerateInput),
    Delete(DeleteLicenseParams),
    ResetHwid { key: String },
    KeyInfo { key: String },
    UserInfo { key: String },
}

impl LicenseCommand {
    /// Builds the command called `name` from its arguments.
    ///
    /// # Returns
    /// - `Ok(Some(command))` - `name` is a license command and the arguments are valid
    /// - `Ok(None)` - `name` is not a license command
    /// - `Err(InputError)` - The arguments are invalid
    pub fn parse(name: &str, args: &CommandArgs) -> Result<Option<Self>, InputError> {
        let command = match name {
            GENERATE => Self::Generate(GenerateInput {
                expiry: args.text_or("expiry", generate::DEFAULT_EXPIRY),
                level: args.text_or("level", generate::DEFAULT_LEVEL),
                amount: args.key_amount("amount", generate::DEFAULT_AMOUNT)?,
            }),
            DELETE => Self::Delete(DeleteLicenseParams {
                key: args.required_text("key")?,
                user_too: args.flag("delete_user"),
            }),
            RESET_HWID => Self::ResetHwid {
                key: args.required_text("key")?,
            },
            KEY_INFO => Self::KeyInfo {
                key: args.required_text("key")?,
            },
            USER_INFO => Self::UserInfo {
                key: args.required_text("key")?,
            },
            _ => return Ok(None),
        };

        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => GENERATE,
            Self::Delete(_) => DELETE,
            Self::ResetHwid { .. } => RESET_HWID,
            Self::KeyInfo { .. } => KEY_INFO,
            Self::UserInfo { .. } => USER_INFO,
        }
    }

    /// Whether the result is shown to the whole channel.
    ///
    /// Generated keys are announced publicly; everything else is only shown to the
    /// invoking administrator.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Generate(_))
    }

    /// Embed shown while the license API call is outstanding.
    pub fn pending_embed(&self, invoker: u64) -> CreateEmbed {
        match self {
            Self::Generate(input) => generate::pending(input, invoker),
            Self::Delete(params) => delete::pending(&params.key),
            Self::ResetHwid { key } => reset_hwid::pending(key),
            Self::KeyInfo { key } => key_info::pending(key),
            Self::UserInfo { key } => user_info::pending(key),
        }
    }

    /// Runs the command against the license API and renders the outcome.
    pub async fn execute(&self, state: &AppState, invoker: u64) -> CreateEmbed {
        tracing::info!("User {} is running `{}`", invoker, self.name());

        match self {
            Self::Generate(input) => generate::execute(state, input, invoker).await,
            Self::Delete(params) => delete::execute(state, params, invoker).await,
            Self::ResetHwid { key } => reset_hwid::execute(state, key, invoker).await,
            Self::KeyInfo { key } => key_info::execute(state, key, invoker).await,
            Self::UserInfo { key } => user_info::execute(state, key, invoker).await,
        }
    }
}

/// Shortens a key for "working on it" messages.
fn key_preview(key: &str) -> String {
    crate::bot::format::truncate(key, 30)
}

#[cfg(test)]
mod test;
