use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// User lacks the permission required for the command.
    ///
    /// Checked before any request to the license API is made.
    ///
    /// # Fields
    /// - Discord ID of the user that was denied
    /// - Name of the command they attempted to run
    #[error("User {0} attempted to run `{1}` without administrator permission")]
    AccessDenied(u64, String),

    /// Command was invoked outside of a guild (e.g. in a direct message).
    ///
    /// Administrator permission only exists within a guild, so these invocations are
    /// always denied.
    #[error("User {0} attempted to run `{1}` outside of a guild")]
    NotInGuild(u64, String),
}
