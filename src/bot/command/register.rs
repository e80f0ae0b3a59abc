//! Slash command definitions registered with Discord on startup.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use crate::util::parse::{MAX_KEY_AMOUNT, MIN_KEY_AMOUNT};

use super::{DELETE, GENERATE, HELP, KEY_INFO, MENU, RESET_HWID, USER_INFO};

/// Every slash command the bot provides.
///
/// Commands are hidden from members without administrator permission; the handler
/// still checks permission on each invocation since guild admins can override the
/// default.
pub fn all() -> Vec<CreateCommand> {
    vec![
        admin_command(GENERATE, "Generate new license keys")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "expiry",
                    "Validity in days, 0 for lifetime (default 30)",
                )
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "level",
                    "License level (default 1)",
                )
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "amount",
                    "Number of keys to generate (default 1)",
                )
                .min_int_value(MIN_KEY_AMOUNT as u64)
                .max_int_value(MAX_KEY_AMOUNT as u64)
                .required(false),
            ),
        admin_command(DELETE, "Delete a license key")
            .add_option(key_option())
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "delete_user",
                    "Also delete the user registered with the key",
                )
                .required(false),
            ),
        admin_command(RESET_HWID, "Reset the HWID bound to a license key").add_option(key_option()),
        admin_command(KEY_INFO, "Show information about a license key").add_option(key_option()),
        admin_command(USER_INFO, "Show the user registered with a license key")
            .add_option(key_option()),
        admin_command(MENU, "Open the license management menu"),
        admin_command(HELP, "Show how to use the license bot"),
    ]
}

fn admin_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

fn key_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "key", "The license key").required(true)
}
