use chrono::{DateTime, Utc};
use serenity::all::CreateEmbed;

use crate::{
    bot::{
        embed::{self, code, field_value, mention},
        format,
    },
    model::{
        license::{AddLicenseParams, GeneratedKeys},
        response::ApiResponse,
    },
    service::license::keys::{mask_prefix, resolve_generated_keys},
    state::AppState,
};

pub const DEFAULT_EXPIRY: &str = "30";
pub const DEFAULT_LEVEL: &str = "1";
pub const DEFAULT_AMOUNT: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateInput {
    /// Validity in days, `0` for lifetime.
    pub expiry: String,
    pub level: String,
    pub amount: u32,
}

pub fn pending(input: &GenerateInput, invoker: u64) -> CreateEmbed {
    embed::pending(
        "🔑 Generating License Keys...",
        format!(
            "**{} is generating {} license key(s)...** ⏳",
            mention(invoker),
            input.amount
        ),
    )
}

pub async fn execute(state: &AppState, input: &GenerateInput, invoker: u64) -> CreateEmbed {
    let params = AddLicenseParams {
        expiry: input.expiry.clone(),
        level: input.level.clone(),
        amount: input.amount,
        mask: Some(state.key_mask.clone()),
    };

    let response = state.license_api.add_license(&params).await;

    render(&response, &params, invoker, Utc::now())
}

/// Renders the outcome of a generate call.
///
/// Placeholder keys get their own title and a warning field; they are never
/// described as active.
pub fn render(
    response: &ApiResponse,
    params: &AddLicenseParams,
    invoker: u64,
    now: DateTime<Utc>,
) -> CreateEmbed {
    let ApiResponse::Success { .. } = response else {
        let message = response.message().unwrap_or("Unknown error occurred");
        return embed::failure("Generation Failed", message);
    };

    let mask = params.mask.as_deref().unwrap_or_default();
    let generated = resolve_generated_keys(response, params.amount, mask_prefix(mask));
    let count = generated.keys.len();

    let title = if generated.is_placeholder() {
        "Generation Reported Successful"
    } else {
        "License Keys Generated!"
    };

    let description = format!(
        "**{} generated {} license key(s).**\n\n\
         📊 **Details:**\n\
         • Level: **{}**\n\
         • Expiry: **{}**\n\
         • Format: {}\n\
         • Generated by: {}\n\
         • Time: {}",
        mention(invoker),
        count,
        params.level,
        format::expiry(&params.expiry),
        code(mask),
        mention(invoker),
        now.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    let field_name = if count > 1 {
        "Generated Keys:"
    } else {
        "Generated Key:"
    };

    let embed = embed::success(title, description).field(
        field_name,
        field_value(keys_text(&generated)),
        false,
    );

    if generated.is_placeholder() {
        embed.field(
            "⚠️ Placeholder keys",
            "The license service confirmed the request but returned no keys. The keys above \
             were made up locally for display only and are NOT registered. Check the license \
             dashboard for the real keys.",
            false,
        )
    } else {
        embed.field(
            "Important",
            "These keys are now active in the system. Keep them secure!",
            false,
        )
    }
}

fn keys_text(generated: &GeneratedKeys) -> String {
    generated
        .keys
        .iter()
        .map(|key| code(key.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
