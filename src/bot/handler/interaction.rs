//! Slash commands, menu buttons and modal submissions.
//!
//! Every interaction goes through the administrator check first. License commands
//! are answered with a pending embed straight away (Discord expects a reply within
//! three seconds) which is then edited into the result once the license API has
//! answered.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Interaction, ModalInteraction,
};
use serenity::async_trait;

use crate::{
    bot::{
        command::{args::CommandArgs, BotCommand},
        embed, menu,
        permission::{Permission, PermissionGuard},
    },
    error::AppError,
    state::AppState,
};

/// Reply operations shared by the interaction kinds the bot answers.
#[async_trait]
trait Reply: Sync {
    fn user_id(&self) -> u64;

    async fn respond(&self, ctx: &Context, response: CreateInteractionResponse)
        -> serenity::Result<()>;

    async fn edit(&self, ctx: &Context, edit: EditInteractionResponse) -> serenity::Result<()>;
}

#[async_trait]
impl Reply for CommandInteraction {
    fn user_id(&self) -> u64 {
        self.user.id.get()
    }

    async fn respond(
        &self,
        ctx: &Context,
        response: CreateInteractionResponse,
    ) -> serenity::Result<()> {
        self.create_response(&ctx.http, response).await
    }

    async fn edit(&self, ctx: &Context, edit: EditInteractionResponse) -> serenity::Result<()> {
        self.edit_response(&ctx.http, edit).await.map(|_| ())
    }
}

#[async_trait]
impl Reply for ModalInteraction {
    fn user_id(&self) -> u64 {
        self.user.id.get()
    }

    async fn respond(
        &self,
        ctx: &Context,
        response: CreateInteractionResponse,
    ) -> serenity::Result<()> {
        self.create_response(&ctx.http, response).await
    }

    async fn edit(&self, ctx: &Context, edit: EditInteractionResponse) -> serenity::Result<()> {
        self.edit_response(&ctx.http, edit).await.map(|_| ())
    }
}

/// Dispatches an interaction by kind; other interaction kinds are ignored.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => handle_component(&ctx, &component).await,
        Interaction::Modal(modal) => handle_modal(state, &ctx, &modal).await,
        _ => {}
    }
}

async fn handle_command(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    let name = command.data.name.as_str();
    let guard = PermissionGuard::from_interaction(command.user.id, command.member.as_deref());

    if let Err(e) = guard.require(&[Permission::Admin], name) {
        reply_error(ctx, command, &e.into()).await;
        return;
    }

    let args = CommandArgs::from_resolved(&command.data.options());
    run(state, ctx, command, name, &args).await;
}

/// Opens the form behind a menu button.
async fn handle_component(ctx: &Context, component: &ComponentInteraction) {
    let Some(name) = menu::button_command(&component.data.custom_id) else {
        return;
    };

    let guard = PermissionGuard::from_interaction(component.user.id, component.member.as_ref());
    let response = match guard.require(&[Permission::Admin], name) {
        Ok(()) => match menu::modal_for(name) {
            Some(modal) => CreateInteractionResponse::Modal(modal),
            None => {
                tracing::warn!("Menu button for unknown command `{}`", name);
                return;
            }
        },
        Err(e) => message_response(embed::from_error(&e.into()), true),
    };

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!("Failed to answer menu button `{}`: {}", name, e);
    }
}

async fn handle_modal(state: &AppState, ctx: &Context, modal: &ModalInteraction) {
    let Some(name) = menu::modal_command(&modal.data.custom_id) else {
        return;
    };

    let guard = PermissionGuard::from_interaction(modal.user.id, modal.member.as_ref());
    if let Err(e) = guard.require(&[Permission::Admin], name) {
        reply_error(ctx, modal, &e.into()).await;
        return;
    }

    let args = CommandArgs::from_modal(&modal.data.components);
    run(state, ctx, modal, name, &args).await;
}

/// Parses and runs a command for an interaction that already passed the
/// permission check.
async fn run(
    state: &AppState,
    ctx: &Context,
    interaction: &impl Reply,
    name: &str,
    args: &CommandArgs,
) {
    let command = match BotCommand::parse(name, args) {
        Ok(Some(command)) => command,
        Ok(None) => {
            tracing::debug!("Ignoring unknown command `{}`", name);
            return;
        }
        Err(e) => {
            reply_error(ctx, interaction, &e.into()).await;
            return;
        }
    };

    let invoker = interaction.user_id();
    let license = match command {
        BotCommand::Menu => {
            let response = CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(menu::menu_embed())
                    .components(menu::menu_buttons()),
            );
            send(ctx, interaction, response, name).await;
            return;
        }
        BotCommand::Help => {
            let response = message_response(menu::help_embed(&state.command_prefix), true);
            send(ctx, interaction, response, name).await;
            return;
        }
        BotCommand::License(license) => license,
    };

    let pending = message_response(license.pending_embed(invoker), !license.is_public());
    if !send(ctx, interaction, pending, name).await {
        return;
    }

    let result = license.execute(state, invoker).await;

    if let Err(e) = interaction
        .edit(ctx, EditInteractionResponse::new().embed(result))
        .await
    {
        tracing::error!("Failed to edit response for `{}`: {}", name, e);
    }
}

fn message_response(embed: CreateEmbed, ephemeral: bool) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(ephemeral),
    )
}

async fn reply_error(ctx: &Context, interaction: &impl Reply, err: &AppError) {
    let response = message_response(embed::from_error(err), true);
    if let Err(e) = interaction.respond(ctx, response).await {
        tracing::error!("Failed to send error response: {}", e);
    }
}

/// Sends the initial response, logging failures.
///
/// Returns whether the response was delivered.
async fn send(
    ctx: &Context,
    interaction: &impl Reply,
    response: CreateInteractionResponse,
    name: &str,
) -> bool {
    match interaction.respond(ctx, response).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to respond to `{}`: {}", name, e);
            false
        }
    }
}
