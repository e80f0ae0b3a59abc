//! Normalized license API response.
//!
//! The license API does not guarantee a consistent response format: some actions reply
//! with a JSON object, others with free text. Every reply is normalized into an
//! `ApiResponse` so command handlers only deal with one shape.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::license::LicenseApiError;

/// Field name carrying the human-readable message.
pub const MESSAGE_FIELD: &str = "message";
/// Field name carrying a single generated key.
pub const KEY_FIELD: &str = "key";
/// Field name carrying several generated keys.
pub const KEYS_FIELD: &str = "keys";
/// Field name carrying the success flag in JSON replies.
pub const SUCCESS_FIELD: &str = "success";

/// Result of a single license API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The operation succeeded.
    ///
    /// `fields` holds every value the API returned (including `message` when present),
    /// rendered to strings. JSON arrays are flattened into newline separated values.
    Success { fields: BTreeMap<String, String> },

    /// The operation failed, either remotely or on the way there.
    Failure { message: String },
}

impl ApiResponse {
    /// Creates a success response carrying only a message.
    pub fn success_message(message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(MESSAGE_FIELD.to_string(), message.into());
        Self::Success { fields }
    }

    /// Creates a failure response with the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Message returned by the API, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { fields } => fields.get(MESSAGE_FIELD).map(String::as_str),
            Self::Failure { message } => Some(message),
        }
    }

    /// Looks up a field on a success response.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Success { fields } => fields.get(name).map(String::as_str),
            Self::Failure { .. } => None,
        }
    }

    /// Extra data fields of a success response, i.e. everything except the success
    /// flag and the message.
    ///
    /// Empty values are skipped since they carry nothing worth displaying.
    pub fn data_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        let fields = match self {
            Self::Success { fields } => Some(fields),
            Self::Failure { .. } => None,
        };

        fields
            .into_iter()
            .flat_map(|fields| fields.iter())
            .filter(|(name, value)| {
                name.as_str() != SUCCESS_FIELD
                    && name.as_str() != MESSAGE_FIELD
                    && !value.is_empty()
            })
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Converts a parsed JSON object into a response.
    ///
    /// The `success` member decides the variant. A failure keeps only the message
    /// (defaulting to "Unknown error occurred"), a success keeps every non-null member.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let success = object.get(SUCCESS_FIELD).is_some_and(is_truthy);

        if !success {
            let message = object
                .get(MESSAGE_FIELD)
                .map(value_to_string)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "Unknown error occurred".to_string());
            return Self::Failure { message };
        }

        let fields = object
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name, value_to_string(&value)))
            .collect();

        Self::Success { fields }
    }
}

impl From<LicenseApiError> for ApiResponse {
    fn from(err: LicenseApiError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Interprets a JSON success flag.
///
/// Besides real booleans the API has been seen returning `"true"` and `1`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(s.to_lowercase().as_str(), "true" | "1"),
        _ => false,
    }
}

/// Renders a JSON value for display.
///
/// Strings lose their quotes, arrays become one element per line, anything else uses
/// its JSON text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}
