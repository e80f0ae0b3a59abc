use serenity::all::CreateEmbed;

use crate::{
    bot::{
        embed::{self, code, mention, MAX_FIELDS},
        format::{display_name, key_info_value},
    },
    model::response::ApiResponse,
    state::AppState,
};

use super::key_preview;

pub fn pending(key: &str) -> CreateEmbed {
    embed::pending(
        "🔍 Checking Key Information...",
        format!("Looking up key: {}...", code(&key_preview(key))),
    )
}

pub async fn execute(state: &AppState, key: &str, invoker: u64) -> CreateEmbed {
    let response = state.license_api.verify_key(key).await;

    render(&response, key, invoker)
}

/// Renders a key lookup, one inline field per returned data field up to Discord's
/// field limit.
pub fn render(response: &ApiResponse, key: &str, invoker: u64) -> CreateEmbed {
    if let ApiResponse::Failure { message } = response {
        return embed::failure("Key Not Found", message);
    }

    let description = format!(
        "Information for key: {}\nChecked by: {}",
        code(key),
        mention(invoker)
    );

    response.data_fields().take(MAX_FIELDS).fold(
        embed::success("License Key Information", description),
        |embed, (name, value)| embed.field(display_name(name), key_info_value(name, value), true),
    )
}
