//! Display formatting for license data fields.
//!
//! The license API returns loosely typed fields ("1", "true", "active", ...). These
//! helpers turn them into readable embed field names and values.

use crate::bot::embed::code;

/// Embed field values are cut to this many characters.
pub const MAX_FIELD_VALUE_CHARS: usize = 100;

/// Discord's limit for embed field names.
const MAX_FIELD_NAME_CHARS: usize = 256;

/// HWIDs are shortened to this many characters before display.
const MAX_HWID_CHARS: usize = 30;

/// Turns an API field name into a display name: first letter upper-cased, `_`
/// replaced with spaces (`last_login` becomes `Last login`).
pub fn display_name(field: &str) -> String {
    let spaced = field.to_lowercase().replace('_', " ");
    let mut chars = spaced.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    truncate(&name, MAX_FIELD_NAME_CHARS)
}

/// Formats a field of a key lookup.
pub fn key_info_value(field: &str, value: &str) -> String {
    let formatted = match field {
        "status" => {
            if is_yes(value, &["active", "true", "1"]) {
                "✅ Active".to_string()
            } else {
                "❌ Inactive".to_string()
            }
        }
        "used" => format!("{} time(s)", value),
        "expiry" => expiry(value),
        "level" => format!("Level {}", value),
        _ => value.to_string(),
    };

    truncate(&formatted, MAX_FIELD_VALUE_CHARS)
}

/// Formats a field of a user lookup.
pub fn user_info_value(field: &str, value: &str) -> String {
    let formatted = match field {
        "banned" | "active" => yes_no(is_yes(value, &["true", "1", "yes"])),
        "hwid" => {
            if value.is_empty() {
                "Not set".to_string()
            } else {
                code(&truncate(value, MAX_HWID_CHARS))
            }
        }
        "owner" => {
            if value.is_empty() {
                "Not registered".to_string()
            } else {
                code(value)
            }
        }
        _ => value.to_string(),
    };

    truncate(&formatted, MAX_FIELD_VALUE_CHARS)
}

/// Formats an expiry in days, `0` meaning the key never expires.
pub fn expiry(days: &str) -> String {
    if days.trim() == "0" {
        "Never (Lifetime)".to_string()
    } else {
        format!("{} day(s)", days)
    }
}

pub fn yes_no(value: bool) -> String {
    if value { "✅ Yes" } else { "❌ No" }.to_string()
}

/// Cuts `value` to at most `max` characters.
pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn is_yes(value: &str, accepted: &[&str]) -> bool {
    let value = value.trim().to_lowercase();
    accepted.contains(&value.as_str())
}
