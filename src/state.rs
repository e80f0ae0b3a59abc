//! State shared by every bot event handler.
//!
//! Built once at startup and cloned into the Discord event handler. All fields are
//! cheap to clone: `LicenseApiClient` wraps a `reqwest::Client`, which is
//! reference counted internally.

use crate::{config::Config, service::license::LicenseApiClient};

#[derive(Clone)]
pub struct AppState {
    /// Client for the license seller API.
    pub license_api: LicenseApiClient,
    /// Key format sent with every generate request, e.g. `Corvus-****-****-***`.
    pub key_mask: String,
    /// Prefix that marks a chat message as a bot command.
    pub command_prefix: String,
}

impl AppState {
    pub fn new(license_api: LicenseApiClient, key_mask: String, command_prefix: String) -> Self {
        Self {
            license_api,
            key_mask,
            command_prefix,
        }
    }

    /// Builds the state from configuration and an already constructed license client.
    pub fn from_config(config: &Config, license_api: LicenseApiClient) -> Self {
        Self::new(
            license_api,
            config.key_mask.clone(),
            config.command_prefix.clone(),
        )
    }
}
