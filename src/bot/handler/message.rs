//! Prefix commands typed as chat messages.
//!
//! Messages don't carry resolved permissions, so the invoking member's guild
//! permissions are computed from the guild's roles before any command runs.

use serenity::all::{Context, CreateEmbed, CreateMessage, EditMessage, Message, Permissions};

use crate::{
    bot::{
        command::{self, BotCommand},
        embed, menu,
        permission::{member_guild_permissions, Permission, PermissionGuard},
        prefix::split_command,
    },
    error::AppError,
    state::AppState,
};

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(invocation) = split_command(&state.command_prefix, &message.content) else {
        return;
    };
    let name = invocation.name.as_str();
    if !command::is_known(name) {
        return;
    }

    let permissions = match resolve_permissions(&ctx, &message).await {
        Ok(permissions) => permissions,
        Err(e) => {
            tracing::error!("Failed to resolve permissions for `{}`: {}", name, e);
            reply(&ctx, &message, embed::from_error(&e)).await;
            return;
        }
    };

    let guard = PermissionGuard::new(message.author.id.get(), permissions);
    if let Err(e) = guard.require(&[Permission::Admin], name) {
        reply(&ctx, &message, embed::from_error(&e.into())).await;
        return;
    }

    let command = match BotCommand::parse_positional(name, &invocation.words) {
        Ok(Some(command)) => command,
        Ok(None) => return,
        Err(e) => {
            reply(&ctx, &message, embed::from_error(&e.into())).await;
            return;
        }
    };

    let license = match command {
        BotCommand::Menu => {
            let menu = CreateMessage::new()
                .embed(menu::menu_embed())
                .components(menu::menu_buttons());
            if let Err(e) = message.channel_id.send_message(&ctx.http, menu).await {
                tracing::error!("Failed to send menu: {}", e);
            }
            return;
        }
        BotCommand::Help => {
            reply(&ctx, &message, menu::help_embed(&state.command_prefix)).await;
            return;
        }
        BotCommand::License(license) => license,
    };

    let invoker = message.author.id.get();
    let Some(mut sent) = reply(&ctx, &message, license.pending_embed(invoker)).await else {
        return;
    };

    let result = license.execute(state, invoker).await;

    if let Err(e) = sent.edit(&ctx, EditMessage::new().embed(result)).await {
        tracing::error!("Failed to edit response for `{}`: {}", name, e);
    }
}

/// Guild permissions of the message author, or `None` outside of a guild.
///
/// Roles and owner come from the cache when the guild is cached, from the API
/// otherwise.
async fn resolve_permissions(
    ctx: &Context,
    message: &Message,
) -> Result<Option<Permissions>, AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(None);
    };

    let member = message.member(ctx).await?;

    let cached = ctx
        .cache
        .guild(guild_id)
        .map(|guild| (guild.owner_id, guild.roles.clone()));

    let (owner_id, roles) = match cached {
        Some(cached) => cached,
        None => {
            let guild = guild_id.to_partial_guild(&ctx.http).await?;
            (guild.owner_id, guild.roles)
        }
    };

    Ok(Some(member_guild_permissions(
        guild_id, owner_id, &roles, &member,
    )))
}

/// Replies to `message` with an embed, returning the sent message.
async fn reply(ctx: &Context, message: &Message, embed: CreateEmbed) -> Option<Message> {
    let reply = CreateMessage::new().embed(embed).reference_message(message);

    match message.channel_id.send_message(&ctx.http, reply).await {
        Ok(sent) => Some(sent),
        Err(e) => {
            tracing::error!("Failed to reply in channel {}: {}", message.channel_id, e);
            None
        }
    }
}
