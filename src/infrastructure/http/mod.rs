pub mod assistant_client;
pub mod registration_client;

pub use assistant_client::HttpAssistantClient;
pub use registration_client::HttpRegistrationClient;

use serde_json::Value;

/// Pulls a display string out of an error body: `error`, `detail` or
/// `message` first, then the first message of a field-error map
/// (`{"email": ["already taken"]}`).
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["error", "detail", "message"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }

    object.values().find_map(|v| match v {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(|i| i.as_str().map(str::to_string)),
        _ => None,
    })
}
