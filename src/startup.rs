use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::license::LicenseApiClient};

/// Initializes the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info`. Must be called once, before
/// anything logs.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for every license API request.
///
/// Redirects are disabled so the seller key in the query string is never forwarded to
/// another host, and every request is bounded by `timeout`.
///
/// # Arguments
/// - `timeout` - Per-request timeout covering connect, send and body read
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - The TLS backend could not be initialized
pub fn setup_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Creates the license API client from configuration.
///
/// Called once at startup; the returned client is shared by every command.
pub fn setup_license_client(config: &Config) -> Result<LicenseApiClient, AppError> {
    let http_client = setup_reqwest_client(config.api_timeout)?;

    Ok(LicenseApiClient::new(
        http_client,
        config.api_url.clone(),
        config.seller_key.clone(),
        config.api_timeout.as_secs(),
    ))
}
