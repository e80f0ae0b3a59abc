//! Embed styling shared by every bot reply.
//!
//! All replies use the same footer and a timestamp; the colour tells the outcome at a
//! glance (green success, red failure, orange while waiting on the license API).

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{bot::format::truncate, error::AppError};

pub const COLOR_SUCCESS: u32 = 0x2ECC71;
pub const COLOR_FAILURE: u32 = 0xE74C3C;
pub const COLOR_PENDING: u32 = 0xE67E22;
pub const COLOR_INFO: u32 = 0x3498DB;
pub const COLOR_HELP: u32 = 0x9B59B6;

pub const FOOTER_TEXT: &str = "License Key System";

/// Discord rejects embeds exceeding these limits.
pub const MAX_DESCRIPTION_CHARS: usize = 4096;
pub const MAX_FIELD_CHARS: usize = 1024;
pub const MAX_FIELDS: usize = 25;

/// Builds an embed with the common footer and timestamp.
///
/// The description is cut to `MAX_DESCRIPTION_CHARS`.
pub fn base(title: impl Into<String>, description: impl Into<String>, color: u32) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(truncate(&description.into(), MAX_DESCRIPTION_CHARS))
        .color(color)
        .timestamp(Timestamp::now())
        .footer(CreateEmbedFooter::new(FOOTER_TEXT))
}

pub fn success(title: &str, description: impl Into<String>) -> CreateEmbed {
    base(format!("✅ {}", title), description, COLOR_SUCCESS)
}

pub fn failure(title: &str, message: impl Into<String>) -> CreateEmbed {
    base(format!("❌ {}", title), message, COLOR_FAILURE)
}

pub fn pending(title: &str, description: impl Into<String>) -> CreateEmbed {
    base(title, description, COLOR_PENDING)
}

/// Renders an error raised before the license API was called.
///
/// Permission and input errors get a message meant for the user; anything else is
/// logged and shown as a generic error.
pub fn from_error(err: &AppError) -> CreateEmbed {
    match err {
        AppError::AuthErr(_) => failure(
            "Permission Denied",
            "You need **Administrator** permission to use the license key system!",
        ),
        AppError::InputErr(input) => failure("Invalid Input", input.to_string()),
        other => {
            tracing::error!("Command failed: {}", other);
            failure("Error Occurred", other.to_string())
        }
    }
}

/// Cuts a field value to `MAX_FIELD_CHARS`.
pub fn field_value(value: impl Into<String>) -> String {
    truncate(&value.into(), MAX_FIELD_CHARS)
}

/// Wraps a value in a Discord inline code span.
pub fn code(value: &str) -> String {
    format!("`{}`", value)
}

/// Discord mention for a user ID.
pub fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}
