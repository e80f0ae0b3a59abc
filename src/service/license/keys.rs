//! Key extraction from generate responses and the placeholder fallback.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::model::{
    license::{GeneratedKeys, KeyOrigin, LicenseKey},
    response::{ApiResponse, KEYS_FIELD, KEY_FIELD},
};

/// Key-shaped substrings inside a free-text message.
static KEY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9\-]{10,}").expect("key token pattern is valid"));

/// Character set for placeholder key groups.
const PLACEHOLDER_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lengths of the random groups following the prefix in a placeholder key.
const PLACEHOLDER_GROUPS: [usize; 3] = [4, 4, 3];

/// Finds the keys in a successful generate response.
///
/// Looks at the `key` field first, then the `keys` field (one key per line), then scans
/// the message for key-shaped tokens. Message tokens made only of letters are ignored so
/// words such as "Successfully" are not mistaken for keys.
///
/// # Returns
/// - `Some(keys)` - At least one key was found
/// - `None` - The response is a failure or contains no key
pub fn extract_keys(response: &ApiResponse) -> Option<Vec<LicenseKey>> {
    if !response.is_success() {
        return None;
    }

    if let Some(key) = response.field(KEY_FIELD).filter(|key| !key.is_empty()) {
        return Some(vec![LicenseKey::new(key)]);
    }

    if let Some(keys) = response.field(KEYS_FIELD) {
        let keys: Vec<LicenseKey> = keys
            .lines()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(LicenseKey::new)
            .collect();
        if !keys.is_empty() {
            return Some(keys);
        }
    }

    let keys: Vec<LicenseKey> = response
        .message()
        .map(|message| {
            KEY_TOKEN
                .find_iter(message)
                .map(|m| m.as_str())
                .filter(|token| token.chars().any(|c| c.is_ascii_digit() || c == '-'))
                .map(LicenseKey::new)
                .collect()
        })
        .unwrap_or_default();

    (!keys.is_empty()).then_some(keys)
}

/// Resolves the keys to display for a successful generate call.
///
/// When the response holds no key at all, `amount` placeholder keys are made up so the
/// reply still has something to show. Those keys exist nowhere but in the reply and are
/// tagged `KeyOrigin::Placeholder` so callers can label them accordingly.
pub fn resolve_generated_keys(response: &ApiResponse, amount: u32, prefix: &str) -> GeneratedKeys {
    match extract_keys(response) {
        Some(keys) => GeneratedKeys {
            keys,
            origin: KeyOrigin::Api,
        },
        None => {
            tracing::warn!(
                "License API reported success without returning keys, showing {} placeholder key(s)",
                amount
            );
            GeneratedKeys {
                keys: (0..amount).map(|_| placeholder_key(prefix)).collect(),
                origin: KeyOrigin::Placeholder,
            }
        }
    }
}

/// Builds a random `PREFIX-XXXX-XXXX-XXX` key.
pub fn placeholder_key(prefix: &str) -> LicenseKey {
    let mut rng = rand::rng();

    let mut parts = vec![prefix.to_string()];
    for len in PLACEHOLDER_GROUPS {
        let group: String = (0..len)
            .map(|_| {
                let idx = rng.random_range(0..PLACEHOLDER_CHARSET.len());
                PLACEHOLDER_CHARSET[idx] as char
            })
            .collect();
        parts.push(group);
    }

    LicenseKey::new(parts.join("-"))
}

/// Literal prefix of a key mask, i.e. everything before the first `-`.
///
/// `Corvus-****-****-***` yields `Corvus`. A mask without a literal prefix yields
/// `KEY`.
pub fn mask_prefix(mask: &str) -> &str {
    mask.split('-')
        .next()
        .filter(|prefix| !prefix.is_empty() && !prefix.contains('*'))
        .unwrap_or("KEY")
}
