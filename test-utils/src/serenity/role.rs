//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role granting the given permissions.
///
/// All other fields are set to reasonable defaults (no colour, not hoisted, not
/// managed, not mentionable, position 1).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake); pass the guild ID for `@everyone`
/// - `name` - Role name
/// - `permissions` - Permission bits granted by the role
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Admin", Permissions::ADMINISTRATOR.bits());
/// assert!(role.permissions.administrator());
/// ```
pub fn create_test_role(role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_role_with_permissions() {
        let role = create_test_role(42, "Admin", 8);

        assert_eq!(role.id.get(), 42);
        assert_eq!(role.name, "Admin");
        assert!(role.permissions.administrator());
    }
}
