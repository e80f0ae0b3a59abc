//! Test factory for creating Serenity Member objects.
//!
//! Interaction payloads carry the invoking member together with their resolved
//! permissions in the channel. These factories build such members by deserializing
//! JSON, simulating what Discord's API would send.

use serenity::all::Member;

/// Creates a test Serenity Member as found on an interaction.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `guild_id` - Discord guild ID the member belongs to
/// - `permissions` - Resolved permission bits, or `None` to leave them unset like
///   members received outside of an interaction
/// - `role_ids` - IDs of the roles the member holds
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::member::create_test_member;
///
/// let admin = create_test_member(1, 2, Some(Permissions::ADMINISTRATOR.bits()), &[]);
/// ```
pub fn create_test_member(
    user_id: u64,
    guild_id: u64,
    permissions: Option<u64>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": format!("user{}", user_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|bits| bits.to_string()),
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
