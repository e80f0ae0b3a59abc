//! Discord side of the license bot.
//!
//! Administrators drive the license API from Discord in three ways: slash commands,
//! the button menu with its modal forms, and prefixed chat messages. Every entry
//! point goes through the same administrator check and the same license actions,
//! and replies with embeds styled by the `embed` module.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and role data used for prefix command permission checks
//! - `GUILD_MESSAGES` - Receive prefix commands
//! - `GUILD_MEMBERS` - Resolve the roles of the member typing a prefix command
//!   (privileged intent)
//! - `MESSAGE_CONTENT` - Read prefix command text (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod action;
pub mod command;
pub mod embed;
pub mod format;
pub mod handler;
pub mod menu;
pub mod permission;
pub mod prefix;
pub mod start;
