//! License API client.
//!
//! Wraps the seller endpoint of the license service. Every operation is a `GET`
//! request against the same base URL with the seller key, the action name and the
//! operation's parameters in the query string. Replies are normalized by
//! [`normalize::normalize`] and any transport failure is turned into an
//! `ApiResponse::Failure`, so callers never see an `Err`.

pub mod keys;
pub mod normalize;

#[cfg(test)]
mod test;

use reqwest::header::{ACCEPT, USER_AGENT};
use url::Url;

use crate::{
    error::license::LicenseApiError,
    model::{
        license::{Action, AddLicenseParams, DeleteLicenseParams},
        response::ApiResponse,
    },
};

/// User agent sent with every license API request.
pub const CLIENT_USER_AGENT: &str = "KeyAuth-Discord-Bot/1.0";

/// Client for the license service seller API.
///
/// Cheap to clone: `reqwest::Client` keeps its connection pool behind an `Arc`, so all
/// clones share one pool. The pool lives as long as the last clone.
#[derive(Clone)]
pub struct LicenseApiClient {
    http_client: reqwest::Client,
    base_url: Url,
    seller_key: String,
    timeout_secs: u64,
}

impl LicenseApiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client, already configured with the request timeout
    /// - `base_url` - Seller API endpoint; a trailing `/` is removed
    /// - `seller_key` - Seller credential sent with every request
    /// - `timeout_secs` - Timeout configured on `http_client`, used in error messages
    pub fn new(
        http_client: reqwest::Client,
        mut base_url: Url,
        seller_key: String,
        timeout_secs: u64,
    ) -> Self {
        let path = base_url.path().trim_end_matches('/').to_string();
        base_url.set_path(&path);

        Self {
            http_client,
            base_url,
            seller_key,
            timeout_secs,
        }
    }

    /// Builds the full request URL for an action.
    ///
    /// `sellerkey` and `type` come first, followed by `params` in order. Parameters
    /// whose value is `None` are left out. All values are URL-encoded.
    pub fn request_url(&self, action: Action, params: &[(&str, Option<String>)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("sellerkey", &self.seller_key)
                .append_pair("type", action.as_str());
            for (name, value) in params {
                if let Some(value) = value {
                    query.append_pair(name, value);
                }
            }
        }
        url
    }

    /// Sends a request for `action` and normalizes the reply.
    ///
    /// Never fails: network errors and timeouts come back as `ApiResponse::Failure`
    /// with the error text as message.
    pub async fn request(&self, action: Action, params: &[(&str, Option<String>)]) -> ApiResponse {
        let url = self.request_url(action, params);

        let param_names: Vec<&str> = params
            .iter()
            .filter(|(_, value)| value.is_some())
            .map(|(name, _)| *name)
            .collect();
        tracing::debug!(
            "License API request: action={} params={:?} url={}",
            action,
            param_names,
            redact_seller_key(&url)
        );

        match self.fetch(url).await {
            Ok((status, body)) => {
                tracing::debug!("License API response: status={} body='{}'", status, body.trim());
                normalize::normalize(action, status, &body)
            }
            Err(err) => {
                tracing::warn!("License API {} request failed: {}", action, err);
                err.into()
            }
        }
    }

    /// Performs the HTTP round trip, returning the status code and raw body.
    async fn fetch(&self, url: Url) -> Result<(u16, String), LicenseApiError> {
        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        Ok((status, body))
    }

    fn map_transport_error(&self, err: reqwest::Error) -> LicenseApiError {
        if err.is_timeout() {
            LicenseApiError::Timeout(self.timeout_secs)
        } else {
            LicenseApiError::Network(err)
        }
    }

    /// Generates `amount` license keys.
    ///
    /// Not idempotent: each call may create new keys on the license service.
    pub async fn add_license(&self, params: &AddLicenseParams) -> ApiResponse {
        self.request(
            Action::Add,
            &[
                ("expiry", Some(params.expiry.clone())),
                ("level", Some(params.level.clone())),
                ("amount", Some(params.amount.to_string())),
                (
                    "mask",
                    params.mask.clone().filter(|mask| !mask.is_empty()),
                ),
            ],
        )
        .await
    }

    /// Deletes a license key, optionally together with the user that redeemed it.
    pub async fn delete_license(&self, params: &DeleteLicenseParams) -> ApiResponse {
        let user_too = if params.user_too { "1" } else { "0" };
        self.request(
            Action::Delete,
            &[
                ("key", Some(params.key.clone())),
                ("userToo", Some(user_too.to_string())),
            ],
        )
        .await
    }

    /// Resets the HWID bound to a license key.
    ///
    /// The seller API addresses users by name; a redeemed key is its own user name.
    pub async fn reset_hwid_by_key(&self, key: &str) -> ApiResponse {
        self.request(Action::ResetUser, &[("user", Some(key.to_string()))])
            .await
    }

    /// Looks up a license key.
    pub async fn verify_key(&self, key: &str) -> ApiResponse {
        self.request(Action::Verify, &[("key", Some(key.to_string()))])
            .await
    }

    /// Fetches everything known about a license key.
    ///
    /// Tries `verify` first; when that fails, asks for the user registered under the
    /// key instead and returns that reply.
    pub async fn fetch_info_by_key(&self, key: &str) -> ApiResponse {
        let verified = self.verify_key(key).await;
        if verified.is_success() {
            return verified;
        }

        tracing::debug!("verify failed for key lookup, falling back to fetchuser");
        self.request(Action::FetchUser, &[("user", Some(key.to_string()))])
            .await
    }
}

/// Returns `url` as a string with the seller key value masked.
fn redact_seller_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "sellerkey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
