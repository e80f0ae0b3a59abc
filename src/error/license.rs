use thiserror::Error;

/// Failures that can occur while talking to the license API.
///
/// These never propagate past the client: `LicenseApiClient` converts each of them
/// into an `ApiResponse::Failure` carrying the `Display` text, so callers handle a
/// network failure exactly like an application-level rejection.
#[derive(Error, Debug)]
pub enum LicenseApiError {
    /// Transport failure (connection refused, DNS, TLS, body read, ...).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request exceeded the configured per-request timeout.
    #[error("Network error: request timed out after {0} seconds")]
    Timeout(u64),

    /// The API replied with an empty or whitespace-only body.
    #[error("Empty response from API")]
    EmptyResponse,

    /// The API reported that the operation failed.
    #[error("{0}")]
    Application(String),
}
