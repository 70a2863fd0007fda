// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Edit payload validation.
//!
//! An edit may only carry the versioned fields. The body is checked against
//! an explicit allowed-field set before it is decoded.

use serde_json::Value;
use thiserror::Error;

use crate::request_response::EditEntityRequest;

/// Top-level keys an edit payload may contain.
pub const ALLOWED_EDIT_FIELDS: [&str; 2] = ["name", "description"];

/// Edit payload errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditPayloadError {
    /// The body is not valid JSON.
    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(String),

    /// The body is JSON but not an object.
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// A key outside the allowed set was supplied.
    #[error("Unexpected field '{field}'. Only name and description may be edited")]
    UnexpectedField { field: String },

    /// An allowed field is absent.
    #[error("Missing field '{field}'")]
    MissingField { field: &'static str },

    /// An allowed field is not a string.
    #[error("Field '{field}' must be a string")]
    InvalidFieldType { field: &'static str },
}

impl EditPayloadError {
    /// The offending field, or `body` when the whole payload is at fault.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidJson(_) | Self::NotAnObject => "body",
            Self::UnexpectedField { field } => field.as_str(),
            Self::MissingField { field } | Self::InvalidFieldType { field } => field,
        }
    }
}

/// Validates a decoded edit payload.
///
/// # Errors
///
/// Returns an error if the payload is not an object, carries a key outside
/// [`ALLOWED_EDIT_FIELDS`], or lacks a string `name` or `description`.
pub fn parse_edit_payload(payload: &Value) -> Result<EditEntityRequest, EditPayloadError> {
    let Value::Object(fields) = payload else {
        return Err(EditPayloadError::NotAnObject);
    };

    if let Some(unexpected) = fields
        .keys()
        .find(|key| !ALLOWED_EDIT_FIELDS.contains(&key.as_str()))
    {
        return Err(EditPayloadError::UnexpectedField {
            field: unexpected.clone(),
        });
    }

    Ok(EditEntityRequest {
        name: string_field(fields, "name")?,
        description: string_field(fields, "description")?,
    })
}

/// Parses and validates a raw edit body.
///
/// # Errors
///
/// Returns `EditPayloadError::InvalidJson` for malformed JSON, otherwise the
/// errors of [`parse_edit_payload`].
pub fn parse_edit_body(body: &[u8]) -> Result<EditEntityRequest, EditPayloadError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| EditPayloadError::InvalidJson(e.to_string()))?;
    parse_edit_payload(&payload)
}

fn string_field(
    fields: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, EditPayloadError> {
    match fields.get(field) {
        None => Err(EditPayloadError::MissingField { field }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(EditPayloadError::InvalidFieldType { field }),
    }
}
