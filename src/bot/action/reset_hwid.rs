use serenity::all::CreateEmbed;

use crate::{
    bot::embed::{self, code, field_value, mention},
    model::response::ApiResponse,
    state::AppState,
};

use super::key_preview;

pub fn pending(key: &str) -> CreateEmbed {
    embed::pending(
        "🔄 Resetting HWID...",
        format!("Resetting HWID for license key: {}...", code(&key_preview(key))),
    )
}

pub async fn execute(state: &AppState, key: &str, invoker: u64) -> CreateEmbed {
    let response = state.license_api.reset_hwid_by_key(key).await;

    render(&response, key, invoker)
}

pub fn render(response: &ApiResponse, key: &str, invoker: u64) -> CreateEmbed {
    match response {
        ApiResponse::Success { .. } => embed::success(
            "HWID Reset Successful!",
            response
                .message()
                .unwrap_or("HWID has been reset successfully"),
        )
        .field("License Key", field_value(code(key)), false)
        .field("Reset by", mention(invoker), true),
        ApiResponse::Failure { message } => embed::failure("HWID Reset Failed", message).field(
            "License Key",
            field_value(code(key)),
            false,
        ),
    }
}
