//! License domain models and operation parameter types.
//!
//! Nothing here is persisted: the license API is the source of truth and these types
//! only describe what is sent to it and what came back.

use std::fmt;

/// Seller API action, sent as the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Generate new license keys.
    Add,
    /// Delete a license key.
    Delete,
    /// Reset the HWID bound to a license key.
    ResetUser,
    /// Look up a license key.
    Verify,
    /// Look up the user registered with a license key.
    FetchUser,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Delete => "del",
            Action::ResetUser => "resetuser",
            Action::Verify => "verify",
            Action::FetchUser => "fetchuser",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A license key token such as `Corvus-AB12-CD34-EFG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseKey(String);

impl LicenseKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a batch of displayed keys came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// Keys were found in the license API response.
    Api,
    /// The API reported success without any key in its reply, so placeholder keys were
    /// made up locally. They are NOT registered with the license service.
    Placeholder,
}

/// Keys to show the user after a successful generate call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedKeys {
    pub keys: Vec<LicenseKey>,
    pub origin: KeyOrigin,
}

impl GeneratedKeys {
    pub fn is_placeholder(&self) -> bool {
        self.origin == KeyOrigin::Placeholder
    }
}

/// Parameters for generating license keys.
#[derive(Debug, Clone, PartialEq)]
pub struct AddLicenseParams {
    /// Validity in days, `0` meaning lifetime.
    pub expiry: String,
    /// Subscription level the keys grant.
    pub level: String,
    /// Number of keys to generate (1 to 10).
    pub amount: u32,
    /// Key template, e.g. `Corvus-****-****-***`.
    pub mask: Option<String>,
}

/// Parameters for deleting a license key.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteLicenseParams {
    pub key: String,
    /// Also delete the user that redeemed the key.
    pub user_too: bool,
}
