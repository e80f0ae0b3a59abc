use std::time::Duration;

use test_utils::{
    error::TestError,
    mock::{unreachable_url, MockLicenseApi},
};
use url::Url;

use crate::{
    model::{
        license::{Action, AddLicenseParams, DeleteLicenseParams},
        response::ApiResponse,
    },
    service::license::{LicenseApiClient, CLIENT_USER_AGENT},
    startup::setup_reqwest_client,
};


const SELLER_KEY: &str = "test-seller-key";

fn client_for(url: &str, timeout_secs: u64) -> LicenseApiClient {
    let http_client = setup_reqwest_client(Duration::from_secs(timeout_secs)).unwrap();
    LicenseApiClient::new(
        http_client,
        Url::parse(url).unwrap(),
        SELLER_KEY.to_string(),
        timeout_secs,
    )
}

/// Tests that the request URL carries the seller key, the action and the parameters
/// in order, URL-encoded, with absent parameters left out.
#[test]
fn builds_request_url() {
    let client = client_for("https://keyauth.win/api/seller/", 30);

    let url = client.request_url(
        Action::Add,
        &[
            ("expiry", Some("30".to_string())),
            ("level", None),
            ("mask", Some("Corvus-****-****-***".to_string())),
        ],
    );

    assert_eq!(url.path(), "/api/seller");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("sellerkey".to_string(), SELLER_KEY.to_string()),
            ("type".to_string(), "add".to_string()),
            ("expiry".to_string(), "30".to_string()),
            ("mask".to_string(), "Corvus-****-****-***".to_string()),
        ]
    );
    assert!(!url.as_str().contains("level"));
}

#[test]
fn encodes_special_characters() {
    let client = client_for("https://keyauth.win/api/seller/", 30);

    let url = client.request_url(Action::Verify, &[("key", Some("a&b=c d".to_string()))]);

    assert!(!url.as_str().contains("a&b=c d"));
    let key = url
        .query_pairs()
        .find(|(name, _)| name == "key")
        .map(|(_, value)| value.into_owned());
    assert_eq!(key.as_deref(), Some("a&b=c d"));
}

/// Tests that requests send the fixed headers.
#[tokio::test]
async fn sends_user_agent_and_accept_headers() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(200, r#"{"success":true,"message":"Key found"}"#);
    let client = client_for(&api.url(), 5);

    client.verify_key("Corvus-AAAA-BBBB-CCC").await;

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user_agent.as_deref(), Some(CLIENT_USER_AGENT));
    assert_eq!(requests[0].accept.as_deref(), Some("application/json"));
    assert_eq!(requests[0].param("sellerkey"), Some(SELLER_KEY));

    Ok(())
}

/// Tests that a JSON reply is returned as the normalized structure.
#[tokio::test]
async fn json_reply_is_normalized() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(
        200,
        r#"{"success":true,"message":"Key found","status":"Active","expiry":"30"}"#,
    );
    let client = client_for(&api.url(), 5);

    let response = client.verify_key("Corvus-AAAA-BBBB-CCC").await;

    assert!(response.is_success());
    assert_eq!(response.field("status"), Some("Active"));
    assert_eq!(response.field("expiry"), Some("30"));

    Ok(())
}

/// Tests that a non-200 plain-text reply keeps the status in the message.
#[tokio::test]
async fn http_error_status_becomes_failure() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(502, "Bad Gateway");
    let client = client_for(&api.url(), 5);

    let response = client.reset_hwid_by_key("Corvus-AAAA-BBBB-CCC").await;

    assert_eq!(response, ApiResponse::failure("HTTP 502: Bad Gateway"));

    Ok(())
}

/// Tests that an unreachable server is reported as a network failure.
#[tokio::test]
async fn connection_failure_becomes_failure() -> Result<(), TestError> {
    let url = unreachable_url().await?;
    let client = client_for(&url, 5);

    let response = client.verify_key("Corvus-AAAA-BBBB-CCC").await;

    assert!(!response.is_success());
    assert!(response.message().unwrap().starts_with("Network error:"));

    Ok(())
}

/// Tests that a reply slower than the timeout is reported as a network failure.
#[tokio::test]
async fn slow_reply_times_out() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply_after(Duration::from_secs(3), 200, "too late");
    let client = client_for(&api.url(), 1);

    let response = client.verify_key("Corvus-AAAA-BBBB-CCC").await;

    assert_eq!(
        response,
        ApiResponse::failure("Network error: request timed out after 1 seconds")
    );

    Ok(())
}

/// Tests that no retry happens after a failure.
#[tokio::test]
async fn failures_are_not_retried() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(500, "Internal Server Error");
    let client = client_for(&api.url(), 5);

    let response = client
        .delete_license(&DeleteLicenseParams {
            key: "Corvus-AAAA-BBBB-CCC".to_string(),
            user_too: false,
        })
        .await;

    assert!(!response.is_success());
    assert_eq!(api.requests().len(), 1);

    Ok(())
}

#[tokio::test]
async fn empty_reply_is_failure() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(200, "   ");
    let client = client_for(&api.url(), 5);

    let response = client
        .add_license(&AddLicenseParams {
            expiry: "30".to_string(),
            level: "1".to_string(),
            amount: 1,
            mask: None,
        })
        .await;

    assert_eq!(response, ApiResponse::failure("Empty response from API"));

    Ok(())
}
