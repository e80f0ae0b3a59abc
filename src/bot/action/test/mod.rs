use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::Value;
use serenity::all::CreateEmbed;
use test_utils::{error::TestError, mock::MockLicenseApi};
use url::Url;

use crate::{
    bot::{
        command::args::{ArgValue, CommandArgs},
        embed::{COLOR_FAILURE, COLOR_PENDING, COLOR_SUCCESS},
    },
    error::input::InputError,
    model::{
        license::{AddLicenseParams, DeleteLicenseParams},
        response::ApiResponse,
    },
    service::license::LicenseApiClient,
    startup::setup_reqwest_client,
    state::AppState,
};

use super::{generate::GenerateInput, LicenseCommand};

mod render;

const INVOKER: u64 = 424242;
const MASK: &str = "Corvus-****-****-***";

fn to_json(embed: CreateEmbed) -> Value {
    serde_json::to_value(embed).unwrap()
}

/// Field values of an embed keyed by field name.
fn field<'a>(embed: &'a Value, name: &str) -> Option<&'a str> {
    embed["fields"]
        .as_array()?
        .iter()
        .find(|field| field["name"] == name)
        .and_then(|field| field["value"].as_str())
}

fn state_for(api: &MockLicenseApi) -> AppState {
    let http_client = setup_reqwest_client(Duration::from_secs(5)).unwrap();
    let license_api = LicenseApiClient::new(
        http_client,
        Url::parse(&api.url()).unwrap(),
        "test-seller-key".to_string(),
        5,
    );

    AppState::new(license_api, MASK.to_string(), "!".to_string())
}

#[test]
fn parses_generate_with_defaults() {
    let command = LicenseCommand::parse("generate", &CommandArgs::new()).unwrap();

    assert_eq!(
        command,
        Some(LicenseCommand::Generate(GenerateInput {
            expiry: "30".to_string(),
            level: "1".to_string(),
            amount: 1,
        }))
    );
}

#[test]
fn rejects_generate_amount_out_of_range() {
    let args = CommandArgs::new().with("amount", ArgValue::Text("0".to_string()));

    assert_eq!(
        LicenseCommand::parse("generate", &args),
        Err(InputError::AmountOutOfRange { min: 1, max: 10 })
    );
}

#[test]
fn parses_delete_from_slash_options() {
    let args = CommandArgs::new()
        .with("key", ArgValue::Text("KEY-0001-AAAA".to_string()))
        .with("delete_user", ArgValue::Boolean(true));

    assert_eq!(
        LicenseCommand::parse("delete", &args),
        Ok(Some(LicenseCommand::Delete(DeleteLicenseParams {
            key: "KEY-0001-AAAA".to_string(),
            user_too: true,
        })))
    );
}

#[test]
fn key_commands_require_a_key() {
    for name in ["resethwid", "info", "userinfo", "delete"] {
        assert_eq!(
            LicenseCommand::parse(name, &CommandArgs::new()),
            Err(InputError::MissingArgument("key".to_string())),
            "{}",
            name
        );
    }
}

#[test]
fn only_generate_is_public() {
    let key = || "KEY-0001-AAAA".to_string();

    assert!(LicenseCommand::Generate(GenerateInput {
        expiry: "30".to_string(),
        level: "1".to_string(),
        amount: 1,
    })
    .is_public());
    assert!(!LicenseCommand::ResetHwid { key: key() }.is_public());
    assert!(!LicenseCommand::KeyInfo { key: key() }.is_public());
    assert!(!LicenseCommand::UserInfo { key: key() }.is_public());
}

#[test]
fn pending_embed_shortens_long_keys() {
    let command = LicenseCommand::KeyInfo {
        key: "K".repeat(80),
    };

    let embed = to_json(command.pending_embed(INVOKER));

    assert_eq!(embed["color"], COLOR_PENDING);
    let description = embed["description"].as_str().unwrap();
    assert!(description.contains(&format!("`{}`", "K".repeat(30))));
    assert!(!description.contains(&"K".repeat(31)));
}

/// Tests that a generate command sends the configured mask and renders the
/// returned key.
#[tokio::test]
async fn generate_sends_mask_and_renders_keys() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(200, r#"{"success":true,"key":"Corvus-AB12-CD34-EF5"}"#);
    let state = state_for(&api);

    let command = LicenseCommand::Generate(GenerateInput {
        expiry: "7".to_string(),
        level: "2".to_string(),
        amount: 1,
    });
    let embed = to_json(command.execute(&state, INVOKER).await);

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].param("type"), Some("add"));
    assert_eq!(requests[0].param("mask"), Some(MASK));
    assert_eq!(requests[0].param("expiry"), Some("7"));

    assert_eq!(embed["color"], COLOR_SUCCESS);
    assert_eq!(
        field(&embed, "Generated Key:"),
        Some("`Corvus-AB12-CD34-EF5`")
    );
    Ok(())
}

/// Tests that an API failure is rendered as a failure embed carrying its message.
#[tokio::test]
async fn delete_failure_is_rendered() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(200, r#"{"success":false,"message":"Key not found."}"#);
    let state = state_for(&api);

    let command = LicenseCommand::Delete(DeleteLicenseParams {
        key: "KEY-0001-AAAA".to_string(),
        user_too: false,
    });
    let embed = to_json(command.execute(&state, INVOKER).await);

    assert_eq!(api.requests()[0].param("userToo"), Some("0"));
    assert_eq!(embed["title"], "❌ Delete Failed");
    assert_eq!(embed["description"], "Key not found.");
    assert_eq!(embed["color"], COLOR_FAILURE);
    Ok(())
}

/// Tests that the user info command falls back to a user lookup.
#[tokio::test]
async fn user_info_uses_fallback_lookup() -> Result<(), TestError> {
    let api = MockLicenseApi::start().await?;
    api.reply(200, r#"{"success":false,"message":"Invalid key"}"#)
        .reply(200, r#"{"success":true,"banned":"0","hwid":""}"#);
    let state = state_for(&api);

    let command = LicenseCommand::UserInfo {
        key: "KEY-0001-AAAA".to_string(),
    };
    let embed = to_json(command.execute(&state, INVOKER).await);

    let requests = api.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].param("type"), Some("fetchuser"));
    assert_eq!(embed["title"], "✅ User/License Information");
    assert_eq!(field(&embed, "Banned"), Some("❌ No"));
    Ok(())
}

fn add_params(amount: u32) -> AddLicenseParams {
    AddLicenseParams {
        expiry: "0".to_string(),
        level: "1".to_string(),
        amount,
        mask: Some(MASK.to_string()),
    }
}

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
}

fn success(fields: &[(&str, &str)]) -> ApiResponse {
    ApiResponse::Success {
        fields: fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}
