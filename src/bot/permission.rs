//! Administrator gate for every license command.
//!
//! Each command, button press and modal submission passes through `PermissionGuard`
//! before anything is sent to the license API.

use std::collections::HashMap;

use serenity::all::{GuildId, Member, Permissions, Role, RoleId, UserId};

use crate::error::auth::AuthError;

pub enum Permission {
    Admin,
}

pub struct PermissionGuard {
    user_id: u64,
    in_guild: bool,
    permissions: Permissions,
}

impl PermissionGuard {
    /// Creates a guard from already resolved permissions.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the invoking user
    /// - `permissions` - The user's permissions in the guild, or `None` when the
    ///   invocation did not happen in a guild
    pub fn new(user_id: u64, permissions: Option<Permissions>) -> Self {
        Self {
            user_id,
            in_guild: permissions.is_some(),
            permissions: permissions.unwrap_or_else(Permissions::empty),
        }
    }

    /// Creates a guard for an interaction.
    ///
    /// Interactions carry the invoking member with their permissions already resolved;
    /// direct-message interactions have no member and are treated as outside a guild.
    pub fn from_interaction(user_id: UserId, member: Option<&Member>) -> Self {
        let permissions = member.map(|member| member.permissions.unwrap_or_else(Permissions::empty));
        Self::new(user_id.get(), permissions)
    }

    /// Checks that the user holds every permission in `permissions`.
    ///
    /// # Arguments
    /// - `permissions` - Permissions to require
    /// - `command` - Name of the command being run, for the error and the log
    ///
    /// # Returns
    /// - `Ok(())` - All permissions held
    /// - `Err(AuthError::NotInGuild)` - Invoked outside of a guild
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub fn require(&self, permissions: &[Permission], command: &str) -> Result<(), AuthError> {
        if !self.in_guild {
            tracing::info!("Denied `{}` to user {}: not in a guild", command, self.user_id);
            return Err(AuthError::NotInGuild(self.user_id, command.to_string()));
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.permissions.contains(Permissions::ADMINISTRATOR) {
                        tracing::info!(
                            "Denied `{}` to user {}: missing administrator permission",
                            command,
                            self.user_id
                        );
                        return Err(AuthError::AccessDenied(self.user_id, command.to_string()));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Computes a member's guild-wide permissions from their roles.
///
/// Used for prefix commands, where the message does not carry resolved permissions.
/// The guild owner implicitly holds every permission. Channel overwrites are not
/// considered: they cannot take away administrator permission.
pub fn member_guild_permissions(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    member: &Member,
) -> Permissions {
    if member.user.id == owner_id {
        return Permissions::all();
    }

    let everyone = RoleId::new(guild_id.get());

    std::iter::once(&everyone)
        .chain(member.roles.iter())
        .filter_map(|role_id| roles.get(role_id))
        .fold(Permissions::empty(), |acc, role| acc | role.permissions)
}
