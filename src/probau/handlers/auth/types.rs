//! Request/response types for auth endpoints.

use regex::Regex;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::session::{Credentials, Plan, Role, Session};

const MIN_PASSWORD_CHARS: usize = 6;
const MIN_PROFILE_CHARS: usize = 2;

/// Login and registration payload.
#[derive(ToSchema, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// `employer` or `contractor`.
    pub role: String,
    pub company: String,
    pub name: String,
    #[serde(default)]
    pub is_subscribed: Option<bool>,
    /// `basic` or `pro`.
    #[serde(default)]
    pub plan: Option<String>,
}

impl LoginRequest {
    /// Check the payload and turn it into credentials.
    ///
    /// The error names the first failing field; it is for logs only, callers
    /// answer with a generic message.
    pub fn validate(self) -> Result<Credentials, String> {
        if !valid_email(&self.email) {
            return Err("email".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err("password".to_string());
        }
        if Role::parse(&self.role).is_none() {
            return Err("role".to_string());
        }
        if self.company.chars().count() < MIN_PROFILE_CHARS {
            return Err("company".to_string());
        }
        if self.name.chars().count() < MIN_PROFILE_CHARS {
            return Err("name".to_string());
        }
        let plan = match self.plan.as_deref() {
            None => None,
            Some(value) => Some(Plan::parse(value).ok_or_else(|| "plan".to_string())?),
        };

        Ok(Credentials {
            email: self.email,
            password: SecretString::from(self.password),
            role: self.role,
            company: self.company,
            name: self.name,
            is_subscribed: self.is_subscribed,
            plan,
        })
    }
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub ok: bool,
    /// `null` when there is no valid session cookie.
    pub session: Option<Session>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub ok: bool,
    pub session: Session,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub ok: bool,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            ok: false,
            message: message.to_string(),
        }
    }
}
