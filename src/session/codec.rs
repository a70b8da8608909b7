//! Reversible mapping between a [`Session`] and a cookie-safe string.
//!
//! The value is JSON escaped with percent-encoding, so it only contains
//! `[A-Za-z0-9-_.~%]`. It is not signed: any client can write a value that
//! decodes. Reads therefore only check the minimal shape (`id`, `email`, `role`)
//! and anything that does not decode is treated as "no session".

use serde_json::{Map, Value};
use tracing::debug;

use super::{Plan, Role, Session};

/// Encode a session as a cookie value.
#[must_use]
pub fn serialize(session: &Session) -> String {
    // Serializing a struct of strings, bools and unit enums cannot fail.
    let json = serde_json::to_string(session).unwrap_or_default();
    urlencoding::encode(&json).into_owned()
}

/// Decode a cookie value.
///
/// Returns `None` when the value is absent, empty, not percent-encoded UTF-8,
/// not a JSON object, or fails the shape check.
#[must_use]
pub fn deserialize(raw: Option<&str>) -> Option<Session> {
    let raw = raw.filter(|value| !value.is_empty())?;

    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!("Session cookie is not valid percent-encoded UTF-8: {err}");
            return None;
        }
    };

    let value: Value = match serde_json::from_str(&decoded) {
        Ok(value) => value,
        Err(err) => {
            debug!("Session cookie is not valid JSON: {err}");
            return None;
        }
    };

    let Value::Object(fields) = value else {
        debug!("Session cookie is not a JSON object");
        return None;
    };

    from_fields(&fields)
}

fn from_fields(fields: &Map<String, Value>) -> Option<Session> {
    let id = fields.get("id")?.as_str()?;
    let email = fields.get("email")?.as_str()?;
    let role = fields.get("role").and_then(Value::as_str).and_then(Role::parse);
    let Some(role) = role else {
        debug!("Session cookie has a missing or unknown role");
        return None;
    };

    Some(Session {
        id: id.to_string(),
        name: string_or_empty(fields, "name"),
        email: email.to_string(),
        company: string_or_empty(fields, "company"),
        role,
        is_subscribed: fields
            .get("isSubscribed")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        plan: fields.get("plan").and_then(Value::as_str).and_then(Plan::parse),
    })
}

fn string_or_empty(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
