//! The management menu: an embed with one button per license operation, and the
//! modal form each button opens.
//!
//! Custom IDs carry the command name (`menu:<command>` for buttons,
//! `modal:<command>` for forms) so a submission can be parsed like any other
//! command invocation.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateInputText, CreateModal,
    InputTextStyle,
};

use crate::bot::{
    action::generate::{DEFAULT_AMOUNT, DEFAULT_EXPIRY, DEFAULT_LEVEL},
    command::{DELETE, GENERATE, HELP, KEY_INFO, RESET_HWID, USER_INFO},
    embed::{self, COLOR_HELP, COLOR_INFO},
};

pub const BUTTON_PREFIX: &str = "menu:";
pub const MODAL_PREFIX: &str = "modal:";

const MAX_KEY_CHARS: u16 = 100;

struct MenuEntry {
    command: &'static str,
    label: &'static str,
    emoji: char,
    style: ButtonStyle,
}

const MENU_ENTRIES: [MenuEntry; 5] = [
    MenuEntry {
        command: GENERATE,
        label: "Generate Key",
        emoji: '🔑',
        style: ButtonStyle::Success,
    },
    MenuEntry {
        command: DELETE,
        label: "Delete License",
        emoji: '🗑',
        style: ButtonStyle::Danger,
    },
    MenuEntry {
        command: RESET_HWID,
        label: "Reset HWID",
        emoji: '🔄',
        style: ButtonStyle::Primary,
    },
    MenuEntry {
        command: KEY_INFO,
        label: "Key Info",
        emoji: '📊',
        style: ButtonStyle::Secondary,
    },
    MenuEntry {
        command: USER_INFO,
        label: "User Info",
        emoji: '👤',
        style: ButtonStyle::Secondary,
    },
];

pub fn menu_embed() -> CreateEmbed {
    embed::base(
        "🔐 License Key Management",
        "Choose an operation below. Each button opens a short form.\n\n\
         🔑 **Generate Key** - create new license keys\n\
         🗑️ **Delete License** - delete a license key\n\
         🔄 **Reset HWID** - unbind a key from its machine\n\
         📊 **Key Info** - look up a license key\n\
         👤 **User Info** - look up the user registered with a key",
        COLOR_INFO,
    )
}

pub fn menu_buttons() -> Vec<CreateActionRow> {
    let buttons = MENU_ENTRIES
        .iter()
        .map(|entry| {
            CreateButton::new(format!("{}{}", BUTTON_PREFIX, entry.command))
                .label(entry.label)
                .emoji(entry.emoji)
                .style(entry.style)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

/// Command name carried by a menu button's custom ID.
pub fn button_command(custom_id: &str) -> Option<&str> {
    custom_id.strip_prefix(BUTTON_PREFIX)
}

/// Command name carried by a modal's custom ID.
pub fn modal_command(custom_id: &str) -> Option<&str> {
    custom_id.strip_prefix(MODAL_PREFIX)
}

/// Builds the form opened by the menu button for `command`.
///
/// Returns `None` for commands without a form.
pub fn modal_for(command: &str) -> Option<CreateModal> {
    let (title, inputs) = match command {
        GENERATE => (
            "Generate License Keys",
            vec![
                text_input("expiry", "Expiry in days (0 = lifetime)", DEFAULT_EXPIRY, 5),
                text_input("level", "License level", DEFAULT_LEVEL, 10),
                text_input("amount", "Amount (1-10)", &DEFAULT_AMOUNT.to_string(), 2),
            ],
        ),
        DELETE => (
            "Delete License Key",
            vec![
                key_input(),
                text_input("delete_user", "Delete from user too? (yes/no)", "no", 3),
            ],
        ),
        RESET_HWID => ("Reset HWID", vec![key_input()]),
        KEY_INFO => ("License Key Information", vec![key_input()]),
        USER_INFO => ("User Information", vec![key_input()]),
        _ => return None,
    };

    let rows = inputs.into_iter().map(CreateActionRow::InputText).collect();

    Some(CreateModal::new(format!("{}{}", MODAL_PREFIX, command), title).components(rows))
}

fn key_input() -> CreateInputText {
    CreateInputText::new(InputTextStyle::Short, "License key", "key")
        .placeholder("Enter the license key")
        .max_length(MAX_KEY_CHARS)
        .required(true)
}

fn text_input(id: &str, label: &str, default: &str, max_length: u16) -> CreateInputText {
    CreateInputText::new(InputTextStyle::Short, label, id)
        .value(default)
        .max_length(max_length)
        .required(false)
}

/// Usage help listing every command under both the slash and the chat prefix.
pub fn help_embed(prefix: &str) -> CreateEmbed {
    let description = format!(
        "All commands require **Administrator** permission.\n\n\
         **Slash commands**\n\
         `/{menu}` - open the management menu\n\
         `/{generate} [expiry] [level] [amount]` - generate 1 to 10 keys\n\
         `/{delete} <key> [delete_user]` - delete a license key\n\
         `/{reset} <key>` - reset the HWID of a key\n\
         `/{info} <key>` - show key information\n\
         `/{user} <key>` - show user information\n\n\
         **Chat commands**\n\
         `{p}{menu}`, `{p}{generate} [expiry] [level] [amount]`, \
         `{p}{delete} <key> [yes/no]`, `{p}{reset} <key>`, `{p}{info} <key>`, \
         `{p}{user} <key>`, `{p}{help}`\n\n\
         Expiry is in days; `0` makes a lifetime key.",
        p = prefix,
        menu = crate::bot::command::MENU,
        generate = GENERATE,
        delete = DELETE,
        reset = RESET_HWID,
        info = KEY_INFO,
        user = USER_INFO,
        help = HELP,
    );

    embed::base("📖 License Bot Help", description, COLOR_HELP)
}
