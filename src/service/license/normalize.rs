//! Lenient license API response parsing.
//!
//! The API may answer with JSON or with plain text depending on the action and the
//! server version. `normalize` applies a fixed chain of rules, first match wins. The
//! order matters: a body such as "error: key reset" matches both keyword lists and is
//! classified by whichever rule runs first.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{
    error::license::LicenseApiError,
    model::{
        license::Action,
        response::{ApiResponse, KEY_FIELD, MESSAGE_FIELD},
    },
};

/// Keywords that mark a plain-text body as a success.
pub const SUCCESS_KEYWORDS: [&str; 7] = [
    "success",
    "successful",
    "deleted",
    "reset",
    "banned",
    "unbanned",
    "verified",
];

/// Keywords that mark a plain-text body as a failure.
pub const ERROR_KEYWORDS: [&str; 5] = ["error", "invalid", "failed", "not found", "unhandled"];

/// A whole body consisting of a single key-shaped token.
static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-]{10,}$").expect("bare key pattern is valid"));

/// Normalizes a raw API reply into an `ApiResponse`.
///
/// Rules, applied in order:
/// 1. A body that parses as a JSON object is converted as-is.
/// 2. An empty body is a failure ("Empty response from API").
/// 3. For `add`, a body that is a single key-shaped token is the generated key.
/// 4. A body containing a success keyword is a success.
/// 5. A body containing an error keyword is a failure.
/// 6. Otherwise the HTTP status decides: 200 is a success, anything else a failure
///    with message `HTTP <status>: <body>`.
///
/// # Arguments
/// - `action` - The action the request was made for
/// - `status` - HTTP status code of the reply
/// - `body` - Raw reply body
pub fn normalize(action: Action, status: u16, body: &str) -> ApiResponse {
    let body = body.trim();

    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(body) {
        tracing::debug!("{} response parsed as JSON", action);
        return ApiResponse::from_json_object(object);
    }

    tracing::debug!("{} response is plain text", action);

    if body.is_empty() {
        return LicenseApiError::EmptyResponse.into();
    }

    if action == Action::Add && BARE_KEY.is_match(body) {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert(KEY_FIELD.to_string(), body.to_string());
        fields.insert(MESSAGE_FIELD.to_string(), "License key generated".to_string());
        return ApiResponse::Success { fields };
    }

    let lowered = body.to_lowercase();

    if SUCCESS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
        return ApiResponse::success_message(body);
    }

    if ERROR_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
        return LicenseApiError::Application(body.to_string()).into();
    }

    if status == 200 {
        ApiResponse::success_message(body)
    } else {
        LicenseApiError::Application(format!("HTTP {}: {}", status, body)).into()
    }
}
