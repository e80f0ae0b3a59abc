use serenity::all::CreateEmbed;

use crate::{
    bot::{
        embed::{self, code, field_value, mention},
        format::yes_no,
    },
    model::{license::DeleteLicenseParams, response::ApiResponse},
    state::AppState,
};

use super::key_preview;

pub fn pending(key: &str) -> CreateEmbed {
    embed::pending(
        "🗑️ Deleting License Key...",
        format!("Deleting key: {}...", code(&key_preview(key))),
    )
}

pub async fn execute(state: &AppState, params: &DeleteLicenseParams, invoker: u64) -> CreateEmbed {
    let response = state.license_api.delete_license(params).await;

    render(&response, params, invoker)
}

pub fn render(response: &ApiResponse, params: &DeleteLicenseParams, invoker: u64) -> CreateEmbed {
    match response {
        ApiResponse::Success { .. } => embed::success(
            "License Key Deleted!",
            response
                .message()
                .unwrap_or("License key deleted successfully"),
        )
        .field("Key", field_value(code(&params.key)), false)
        .field("Delete from user", yes_no(params.user_too), true)
        .field("Deleted by", mention(invoker), true),
        ApiResponse::Failure { message } => embed::failure("Delete Failed", message).field(
            "Key",
            field_value(code(&params.key)),
            false,
        ),
    }
}
