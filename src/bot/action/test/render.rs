use crate::{
    bot::{
        action::{delete, generate, key_info, reset_hwid, user_info},
        embed::{MAX_DESCRIPTION_CHARS, MAX_FIELDS, MAX_FIELD_CHARS},
    },
    model::{
        license::{Action, DeleteLicenseParams},
        response::ApiResponse,
    },
    service::license::normalize::normalize,
};

use super::{add_params, field, fixed_time, success, to_json, INVOKER, MASK};

#[test]
fn generate_lists_every_returned_key() {
    let response = success(&[("keys", "Corvus-AAAA-BBBB-CCC\nCorvus-DDDD-EEEE-FFF")]);

    let embed = to_json(generate::render(&response, &add_params(2), INVOKER, fixed_time()));

    assert_eq!(embed["title"], "✅ License Keys Generated!");
    assert_eq!(
        field(&embed, "Generated Keys:"),
        Some("`Corvus-AAAA-BBBB-CCC`\n`Corvus-DDDD-EEEE-FFF`")
    );
    assert!(field(&embed, "Important").is_some());

    let description = embed["description"].as_str().unwrap();
    assert!(description.contains("generated 2 license key(s)"));
    assert!(description.contains("Expiry: **Never (Lifetime)**"));
    assert!(description.contains(&format!("Format: `{}`", MASK)));
    assert!(description.contains("2025-01-02 03:04:05 UTC"));
}

/// Tests that keys made up locally are never presented as active keys.
#[test]
fn generate_labels_placeholder_keys() {
    let response = success(&[("message", "Successfully generated")]);

    let embed = to_json(generate::render(&response, &add_params(3), INVOKER, fixed_time()));

    assert_eq!(embed["title"], "✅ Generation Reported Successful");
    assert!(field(&embed, "Important").is_none());
    assert!(field(&embed, "⚠️ Placeholder keys")
        .unwrap()
        .contains("NOT registered"));

    let keys = field(&embed, "Generated Keys:").unwrap();
    assert_eq!(keys.lines().count(), 3);
    assert!(keys.lines().all(|key| key.starts_with("`Corvus-")));
}

#[test]
fn generate_failure() {
    let response = ApiResponse::failure("Seller key invalid");

    let embed = to_json(generate::render(&response, &add_params(1), INVOKER, fixed_time()));

    assert_eq!(embed["title"], "❌ Generation Failed");
    assert_eq!(embed["description"], "Seller key invalid");
}

#[test]
fn delete_success_shows_options_and_invoker() {
    let params = DeleteLicenseParams {
        key: "KEY-0001-AAAA".to_string(),
        user_too: true,
    };

    let embed = to_json(delete::render(&success(&[]), &params, INVOKER));

    assert_eq!(embed["title"], "✅ License Key Deleted!");
    assert_eq!(embed["description"], "License key deleted successfully");
    assert_eq!(field(&embed, "Key"), Some("`KEY-0001-AAAA`"));
    assert_eq!(field(&embed, "Delete from user"), Some("✅ Yes"));
    assert_eq!(field(&embed, "Deleted by"), Some("<@424242>"));
}

#[test]
fn reset_hwid_uses_api_message() {
    let response = ApiResponse::success_message("Reset user HWID");

    let embed = to_json(reset_hwid::render(&response, "KEY-0001-AAAA", INVOKER));

    assert_eq!(embed["title"], "✅ HWID Reset Successful!");
    assert_eq!(embed["description"], "Reset user HWID");
    assert_eq!(field(&embed, "License Key"), Some("`KEY-0001-AAAA`"));

    let failed = to_json(reset_hwid::render(
        &ApiResponse::failure("No user found"),
        "KEY-0001-AAAA",
        INVOKER,
    ));
    assert_eq!(failed["title"], "❌ HWID Reset Failed");
}

#[test]
fn key_info_formats_data_fields() {
    let response = success(&[
        ("success", "true"),
        ("message", "Key found"),
        ("status", "Used"),
        ("used", "3"),
        ("expiry", "30"),
        ("level", "2"),
        ("created_by", "admin"),
        ("note", ""),
    ]);

    let embed = to_json(key_info::render(&response, "KEY-0001-AAAA", INVOKER));

    assert_eq!(embed["title"], "✅ License Key Information");
    assert_eq!(field(&embed, "Status"), Some("❌ Inactive"));
    assert_eq!(field(&embed, "Used"), Some("3 time(s)"));
    assert_eq!(field(&embed, "Expiry"), Some("30 day(s)"));
    assert_eq!(field(&embed, "Level"), Some("Level 2"));
    assert_eq!(field(&embed, "Created by"), Some("admin"));
    assert_eq!(field(&embed, "Note"), None);
    assert_eq!(field(&embed, "Success"), None);
    assert_eq!(field(&embed, "Message"), None);

    let description = embed["description"].as_str().unwrap();
    assert!(description.contains("`KEY-0001-AAAA`"));
    assert!(description.contains("<@424242>"));
}

#[test]
fn key_info_failure() {
    let embed = to_json(key_info::render(
        &ApiResponse::failure("Key not found."),
        "KEY-0001-AAAA",
        INVOKER,
    ));

    assert_eq!(embed["title"], "❌ Key Not Found");
    assert_eq!(embed["description"], "Key not found.");
}

#[test]
fn user_info_formats_data_fields() {
    let response = success(&[
        ("hwid", "ABCDEF0123456789ABCDEF0123456789ABCDEF"),
        ("owner", "seller"),
        ("active", "1"),
    ]);

    let embed = to_json(user_info::render(&response, "KEY-0001-AAAA", INVOKER));

    assert_eq!(embed["title"], "✅ User/License Information");
    assert_eq!(
        field(&embed, "Hwid"),
        Some("`ABCDEF0123456789ABCDEF01234567`")
    );
    assert_eq!(field(&embed, "Owner"), Some("`seller`"));
    assert_eq!(field(&embed, "Active"), Some("✅ Yes"));

    let failed = to_json(user_info::render(
        &ApiResponse::failure("User not found"),
        "KEY-0001-AAAA",
        INVOKER,
    ));
    assert_eq!(failed["title"], "❌ Not Found");
}

/// Tests that an HTML error page from the API still renders within Discord's
/// description limit.
#[test]
fn huge_error_body_is_cut_to_description_limit() {
    let body = format!("<html>{}</html>", "x".repeat(5000));
    let response = normalize(Action::Delete, 502, &body);
    let params = DeleteLicenseParams {
        key: "KEY-0001-AAAA".to_string(),
        user_too: false,
    };

    let embed = to_json(delete::render(&response, &params, INVOKER));

    assert_eq!(embed["title"], "❌ Delete Failed");
    let description = embed["description"].as_str().unwrap();
    assert_eq!(description.chars().count(), MAX_DESCRIPTION_CHARS);
    assert!(description.starts_with("HTTP 502: <html>"));
}

#[test]
fn lookups_stop_at_field_limit() {
    let names: Vec<String> = (0..30).map(|i| format!("field_{:02}", i)).collect();
    let fields: Vec<(&str, &str)> = names.iter().map(|name| (name.as_str(), "value")).collect();
    let response = success(&fields);

    let key_embed = to_json(key_info::render(&response, "KEY-0001-AAAA", INVOKER));
    let user_embed = to_json(user_info::render(&response, "KEY-0001-AAAA", INVOKER));

    assert_eq!(key_embed["fields"].as_array().unwrap().len(), MAX_FIELDS);
    assert_eq!(user_embed["fields"].as_array().unwrap().len(), MAX_FIELDS);
}

#[test]
fn long_user_supplied_key_is_cut_to_field_limit() {
    let key = "K".repeat(2000);

    let embed = to_json(reset_hwid::render(
        &ApiResponse::failure("No user found"),
        &key,
        INVOKER,
    ));

    assert_eq!(
        field(&embed, "License Key").unwrap().chars().count(),
        MAX_FIELD_CHARS
    );
}
