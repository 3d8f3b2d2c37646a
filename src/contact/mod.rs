//! Contact-form submissions: wire model, validation and recording

mod sink;

pub use sink::{ContactSink, MemorySink, TracingSink};

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_SENT: &str = "Message sent successfully";

const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Contact form body as received; every field may be missing
#[derive(Debug, Clone, Default, ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A validated submission; lives for one request
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// `local@domain.tld` shape: no whitespace, one `@`, a `.` after it
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Text of a JSON value as a form field, `None` when the value is falsy
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(flatten(other)),
    }
}

fn flatten(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl ContactRequest {
    /// Read the fields by name from a JSON object.
    ///
    /// Anything other than an object carries no fields. Scalars are
    /// taken as text; falsy values (`null`, `false`, `0`, `""`) count as missing.
    pub fn from_json(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::default();
        };
        let field = |key: &str| object.get(key).and_then(field_text);

        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    /// Build from URL-encoded pairs; a repeated key joins its values with `,`
    pub fn from_form_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut values: [Vec<String>; 4] = Default::default();
        for (key, value) in pairs {
            if let Some(slot) = FIELDS.iter().position(|f| *f == key) {
                values[slot].push(value);
            }
        }

        let [name, email, subject, message] = values.map(|v| match v.len() {
            0 => None,
            1 => v.into_iter().next(),
            _ => Some(v.join(",")),
        });

        Self {
            name,
            email,
            subject,
            message,
        }
    }

    /// Check required fields first, then the email shape
    pub fn validate(self) -> Result<ContactSubmission> {
        let (Some(name), Some(email), Some(message)) = (
            present(self.name),
            present(self.email),
            present(self.message),
        ) else {
            return Err(AppError::Validation(MSG_FIELDS_REQUIRED.to_string()));
        };

        if !is_valid_email(&email) {
            return Err(AppError::Validation(MSG_INVALID_EMAIL.to_string()));
        }

        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name,
            email,
            subject: present(self.subject),
            message,
            received_at: Utc::now(),
        })
    }
}
