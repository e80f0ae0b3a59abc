use serenity::all::CreateEmbed;

use crate::{
    bot::{
        embed::{self, code, mention, MAX_FIELDS},
        format::{display_name, user_info_value},
    },
    model::response::ApiResponse,
    state::AppState,
};

use super::key_preview;

pub fn pending(key: &str) -> CreateEmbed {
    embed::pending(
        "👤 Fetching User Information...",
        format!("Looking up info for key: {}...", code(&key_preview(key))),
    )
}

pub async fn execute(state: &AppState, key: &str, invoker: u64) -> CreateEmbed {
    let response = state.license_api.fetch_info_by_key(key).await;

    render(&response, key, invoker)
}

/// Renders a user lookup, one inline field per returned data field up to Discord's
/// field limit.
pub fn render(response: &ApiResponse, key: &str, invoker: u64) -> CreateEmbed {
    if let ApiResponse::Failure { message } = response {
        return embed::failure("Not Found", message);
    }

    let description = format!(
        "Information for license key: {}\nChecked by: {}",
        code(key),
        mention(invoker)
    );

    response.data_fields().take(MAX_FIELDS).fold(
        embed::success("User/License Information", description),
        |embed, (name, value)| embed.field(display_name(name), user_info_value(name, value), true),
    )
}
