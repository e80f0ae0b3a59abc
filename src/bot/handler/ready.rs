//! Ready event handler for bot initialization.
//!
//! Fired once the bot has authenticated with Discord's gateway. Registers the slash
//! commands globally and sets the bot's presence.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::{command::register, embed::FOOTER_TEXT};

/// Handles the ready event when the bot connects to Discord.
///
/// Slash command registration replaces the previously registered set, so removed
/// commands disappear on the next start. A registration failure is logged and the
/// bot keeps running: prefix commands still work.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands and setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, register::all()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    ctx.set_activity(Some(ActivityData::watching(FOOTER_TEXT)));
}
